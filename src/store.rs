//! Global Board Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The board held
//! here is what the UI renders; every mutation is published to the store
//! first and then mirrored to browser storage in the background.

use std::rc::Rc;

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use kanban_core::{
    deliver_backup, import_backup, BoardService, BoardState, Column, DomainError, DomainResult, Placement, StickyPatch,
};

/// How long a status message stays visible
const STATUS_CLEAR_MS: u32 = 4_000;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct KanbanState {
    /// The board as the user sees it
    pub board: BoardState,
    /// Set once the stored board has been loaded
    pub loaded: bool,
    /// Backup reminder banner is showing
    pub reminder_visible: bool,
    /// Short-lived feedback message (export/import results)
    pub status: Option<String>,
}

/// Board store plus the service that persists it
#[derive(Clone, Copy)]
pub struct KanbanStore {
    state: Store<KanbanState>,
    service: StoredValue<Rc<BoardService>, LocalStorage>,
}

/// Get the board store from context
pub fn use_kanban_store() -> KanbanStore {
    expect_context::<KanbanStore>()
}

impl KanbanStore {
    pub fn new(service: BoardService) -> Self {
        let initial = KanbanState {
            board: service.initial_state(),
            ..Default::default()
        };
        Self {
            state: Store::new(initial),
            service: StoredValue::new_local(Rc::new(service)),
        }
    }

    // ========================
    // Reads (tracked)
    // ========================

    pub fn with_board<R>(&self, f: impl FnOnce(&BoardState) -> R) -> R {
        self.state.board().with(f)
    }

    pub fn used_colors(&self) -> Vec<String> {
        self.with_board(|board| board.used_colors.clone())
    }

    pub fn sticky_count(&self) -> usize {
        self.with_board(|board| board.stickies.len())
    }

    pub fn loaded(&self) -> bool {
        self.state.loaded().get()
    }

    pub fn reminder_visible(&self) -> bool {
        self.state.reminder_visible().get()
    }

    pub fn status(&self) -> Option<String> {
        self.state.status().get()
    }

    // ========================
    // Lifecycle
    // ========================

    /// Load the stored board and decide whether to show the backup reminder
    pub fn load(&self, reset_requested: bool) {
        let state = self.state;
        let service = self.service.get_value();
        spawn_local(async move {
            let board = service.load(reset_requested).await;
            let remind = service.needs_backup_reminder(&board, Utc::now());
            state.board().set(board);
            state.reminder_visible().set(remind);
            state.loaded().set(true);
        });
    }

    fn persist(&self, snapshot: BoardState, action: &'static str) {
        let service = self.service.get_value();
        spawn_local(async move {
            service.persist(&snapshot, action).await;
        });
    }

    /// Until the stored board is in, the board held here is a placeholder
    /// and must not be edited or saved over the stored one.
    fn ensure_loaded(&self, action: &'static str) -> DomainResult<()> {
        if self.state.loaded().get_untracked() {
            return Ok(());
        }
        log::warn!("event=board_mutation status=rejected action={} reason=not_loaded", action);
        Err(DomainError::InvalidInput("Board is still loading".to_string()))
    }

    /// Apply `f` to a copy of the board; publish and persist it on success.
    /// A rejected mutation leaves the store untouched.
    fn mutate<R>(&self, action: &'static str, f: impl FnOnce(&mut BoardState) -> DomainResult<R>) -> DomainResult<R> {
        self.ensure_loaded(action)?;
        let mut board = self.state.board().get_untracked();
        let result = f(&mut board).inspect_err(|err| {
            log::warn!("event=board_mutation status=rejected action={} error={}", action, err);
        })?;
        self.state.board().set(board.clone());
        self.persist(board, action);
        Ok(result)
    }

    // ========================
    // Sticky operations
    // ========================

    pub fn add_sticky(&self, text: &str, color: &str, column: Column) -> DomainResult<String> {
        self.mutate("add_sticky", |board| board.add_sticky(text, color, column, Utc::now()))
    }

    pub fn update_sticky(&self, id: &str, patch: StickyPatch) -> DomainResult<()> {
        self.mutate("update_sticky", |board| board.update_sticky(id, patch))
    }

    pub fn delete_sticky(&self, id: &str) -> DomainResult<()> {
        self.mutate("delete_sticky", |board| board.delete_sticky(id).map(|_| ()))
    }

    pub fn move_sticky(&self, id: &str, column: Column) -> DomainResult<()> {
        self.mutate("move_sticky", |board| board.move_sticky(id, column))
    }

    /// Drop `dragged` next to `target`, in whichever column `target` is
    pub fn relocate_sticky(&self, dragged: &str, target: &str, placement: Placement) -> DomainResult<bool> {
        self.mutate("relocate_sticky", |board| board.relocate_sticky(dragged, target, placement))
    }

    pub fn reorder_column(&self, column: Column, ordered_ids: &[String]) -> DomainResult<()> {
        self.mutate("reorder_column", |board| board.reorder_column(column, ordered_ids))
    }

    /// Reorder a column by creation time, oldest on top
    pub fn sort_column_oldest_first(&self, column: Column) -> DomainResult<()> {
        let ordered_ids = self.state.board().with_untracked(|board| {
            let mut stickies: Vec<_> = board.stickies_in(column).collect();
            stickies.sort_by_key(|s| s.created_at);
            stickies.into_iter().map(|s| s.id.clone()).collect::<Vec<_>>()
        });
        self.reorder_column(column, &ordered_ids)
    }

    pub fn delete_done_stickies(&self) -> usize {
        self.mutate("delete_done_stickies", |board| Ok(board.delete_done_stickies()))
            .unwrap_or_default()
    }

    // ========================
    // Backups and reminders
    // ========================

    /// Export the board through `deliver(file_name, json)`. The board only
    /// counts as backed up once `deliver` succeeds. Returns the file name.
    pub fn export_backup(&self, deliver: impl FnOnce(&str, &str) -> Result<(), String>) -> DomainResult<String> {
        let file_name = self.mutate("export_backup", |board| deliver_backup(board, Utc::now(), deliver))?;
        self.state.reminder_visible().set(false);
        Ok(file_name)
    }

    /// Replace the whole board with a backup file's content.
    /// Returns the number of imported stickies.
    pub fn import_backup(&self, content: &str) -> DomainResult<usize> {
        self.ensure_loaded("import_backup")?;
        let imported = import_backup(content, Utc::now()).inspect_err(|err| {
            log::warn!("event=backup_import status=rejected error={}", err);
        })?;
        let count = imported.stickies.len();
        self.state.board().set(imported.clone());
        self.state.reminder_visible().set(false);
        self.persist(imported, "import_backup");
        log::info!("event=backup_import status=ok stickies={}", count);
        Ok(count)
    }

    /// Hide the reminder for this session only
    pub fn dismiss_reminder(&self) {
        self.state.reminder_visible().set(false);
    }

    pub fn disable_backup_reminders(&self) {
        let _ = self.mutate("disable_backup_reminders", |board| {
            board.disable_backup_reminders();
            Ok(())
        });
        self.state.reminder_visible().set(false);
    }

    /// Show a status message that clears itself after a few seconds
    pub fn flash_status(&self, message: String) {
        let state = self.state;
        state.status().set(Some(message.clone()));
        spawn_local(async move {
            TimeoutFuture::new(STATUS_CLEAR_MS).await;
            // A newer message may have replaced ours
            if state.status().with_untracked(|current| current.as_deref() == Some(message.as_str())) {
                state.status().set(None);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kanban_core::{BoardConfig, MemoryRepository};

    fn new_store() -> KanbanStore {
        KanbanStore::new(BoardService::new(MemoryRepository::new(), BoardConfig::default()))
    }

    #[test]
    fn test_edits_rejected_before_board_loaded() {
        let store = new_store();
        let backup = serde_json::to_string(&BoardState::default()).unwrap();

        assert!(matches!(
            store.add_sticky("too early", "#4c90e1", Column::Backlog),
            Err(DomainError::InvalidInput(_))
        ));
        assert!(store.export_backup(|_, _| Ok(())).is_err());
        assert!(store.import_backup(&backup).is_err());

        let board = store.state.board().get_untracked();
        assert!(board.stickies.is_empty());
        assert!(board.last_backup_date.is_none());
    }

    #[test]
    fn test_failed_download_keeps_board_and_reminder() {
        let store = new_store();
        store.state.loaded().set(true);
        store.state.reminder_visible().set(true);

        let result = store.export_backup(|_, _| Err("no document".to_string()));

        assert!(matches!(result, Err(DomainError::Internal(_))));
        assert!(store.state.board().get_untracked().last_backup_date.is_none());
        assert!(store.state.reminder_visible().get_untracked());
    }
}
