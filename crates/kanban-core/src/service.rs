//! Board Service
//!
//! Glue between the in-memory board and its repository: start-up loading,
//! optional settings reset, fire-and-forget persistence and reminder policy.
//!
//! Persistence failures never reach the caller. The in-memory board stays
//! authoritative and the failure is logged.

use chrono::{DateTime, Utc};

use crate::config::BoardConfig;
use crate::domain::BoardState;
use crate::repository::StateRepository;

pub struct BoardService {
    repository: Box<dyn StateRepository>,
    config: BoardConfig,
}

impl BoardService {
    pub fn new(repository: impl StateRepository + 'static, config: BoardConfig) -> Self {
        Self {
            repository: Box::new(repository),
            config,
        }
    }

    /// Board shown before anything has been loaded
    pub fn initial_state(&self) -> BoardState {
        BoardState::with_palette(&self.config.default_palette)
    }

    /// Load the stored board, falling back to a fresh one.
    ///
    /// With `reset_requested` the palette and reminder settings are restored
    /// to defaults (stickies kept) and the result is saved right away.
    pub async fn load(&self, reset_requested: bool) -> BoardState {
        let mut state = match self.repository.load().await {
            Ok(Some(mut state)) => {
                state.normalize();
                log::info!(
                    "event=board_load status=ok backend={} stickies={}",
                    self.repository.name(),
                    state.stickies.len()
                );
                state
            }
            Ok(None) => {
                log::info!("event=board_load status=empty backend={}", self.repository.name());
                self.initial_state()
            }
            Err(err) => {
                log::error!("event=board_load status=error error={}", err);
                self.initial_state()
            }
        };

        if reset_requested {
            state.reset(&self.config.default_palette);
            log::info!("event=board_reset stickies={}", state.stickies.len());
            self.persist(&state, "reset").await;
        }

        state
    }

    /// Save a snapshot; returns whether any backend accepted it
    pub async fn persist(&self, state: &BoardState, action: &str) -> bool {
        match self.repository.save(state).await {
            Ok(()) => {
                log::debug!("event=board_save status=ok action={}", action);
                true
            }
            Err(err) => {
                log::error!("event=board_save status=error action={} error={}", action, err);
                false
            }
        }
    }

    pub fn needs_backup_reminder(&self, state: &BoardState, now: DateTime<Utc>) -> bool {
        state.needs_backup_reminder(now, self.config.backup_reminder_interval())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Column, DomainError, DomainResult};
    use crate::repository::{FallbackRepository, MemoryRepository};
    use async_trait::async_trait;
    use chrono::Duration;
    use std::rc::Rc;

    struct BrokenRepository;

    #[async_trait(?Send)]
    impl StateRepository for BrokenRepository {
        fn name(&self) -> &str {
            "broken"
        }

        async fn load(&self) -> DomainResult<Option<BoardState>> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }

        async fn save(&self, _state: &BoardState) -> DomainResult<()> {
            Err(DomainError::Storage("quota exceeded".to_string()))
        }
    }

    /// Shares one memory repository between the service and the test
    struct SharedMemory(Rc<MemoryRepository>);

    #[async_trait(?Send)]
    impl StateRepository for SharedMemory {
        fn name(&self) -> &str {
            self.0.name()
        }

        async fn load(&self) -> DomainResult<Option<BoardState>> {
            self.0.load().await
        }

        async fn save(&self, state: &BoardState) -> DomainResult<()> {
            self.0.save(state).await
        }
    }

    fn stored_board() -> BoardState {
        let mut state = BoardState::default();
        state.add_sticky("Keep me", "#0a0b0c", Column::InProgress, Utc::now()).unwrap();
        state.mark_backed_up(Utc::now());
        state.disable_backup_reminders();
        state
    }

    #[tokio::test]
    async fn test_load_empty_gives_initial_state() {
        let service = BoardService::new(MemoryRepository::new(), BoardConfig::default());
        let state = service.load(false).await;
        assert_eq!(state, BoardState::default());
    }

    #[tokio::test]
    async fn test_load_failure_gives_initial_state() {
        let service = BoardService::new(BrokenRepository, BoardConfig::default());
        let state = service.load(false).await;
        assert!(state.stickies.is_empty());
        assert!(!service.persist(&state, "test").await);
    }

    #[tokio::test]
    async fn test_load_returns_stored_board() {
        let service = BoardService::new(MemoryRepository::with_state(stored_board()), BoardConfig::default());
        let state = service.load(false).await;
        assert_eq!(state.stickies.len(), 1);
        assert!(state.disable_backup_reminders);
    }

    #[tokio::test]
    async fn test_load_with_reset_saves_reset_state() {
        let memory = Rc::new(MemoryRepository::with_state(stored_board()));
        let service = BoardService::new(SharedMemory(memory.clone()), BoardConfig::default());

        let state = service.load(true).await;

        assert_eq!(state.stickies.len(), 1);
        assert!(state.last_backup_date.is_none());
        assert!(!state.disable_backup_reminders);
        assert!(state.used_colors.contains(&"#0a0b0c".to_string()));
        assert_eq!(memory.snapshot(), Some(state));
    }

    #[tokio::test]
    async fn test_persist_through_fallback() {
        let memory = Rc::new(MemoryRepository::new());
        let chain = FallbackRepository::new()
            .with_backend(BrokenRepository)
            .with_backend(SharedMemory(memory.clone()));
        let service = BoardService::new(chain, BoardConfig::default());

        let state = stored_board();
        assert!(service.persist(&state, "add_sticky").await);
        assert_eq!(memory.snapshot(), Some(state));
    }

    #[test]
    fn test_reminder_uses_configured_interval() {
        let config = BoardConfig {
            backup_reminder_days: 30,
            ..Default::default()
        };
        let service = BoardService::new(MemoryRepository::new(), config);
        let now = Utc::now();

        let mut state = BoardState::default();
        state.mark_backed_up(now - Duration::days(10));
        assert!(!service.needs_backup_reminder(&state, now));

        state.mark_backed_up(now - Duration::days(31));
        assert!(service.needs_backup_reminder(&state, now));
    }
}
