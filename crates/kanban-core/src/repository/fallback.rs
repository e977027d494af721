//! Fallback Repository
//!
//! Chains several backends. Each operation is tried in order until one
//! backend answers; failures are logged and skipped.

use async_trait::async_trait;

use crate::domain::{BoardState, DomainError, DomainResult};

use super::traits::StateRepository;

pub struct FallbackRepository {
    backends: Vec<Box<dyn StateRepository>>,
}

impl FallbackRepository {
    pub fn new() -> Self {
        Self { backends: Vec::new() }
    }

    /// Append a backend, lower priority than those already added
    pub fn with_backend(mut self, backend: impl StateRepository + 'static) -> Self {
        self.backends.push(Box::new(backend));
        self
    }

    pub fn backend_names(&self) -> Vec<&str> {
        self.backends.iter().map(|b| b.name()).collect()
    }

    fn exhausted(last_error: Option<DomainError>) -> DomainError {
        match last_error {
            Some(err) => DomainError::Storage(format!("all storage backends failed, last error: {}", err)),
            None => DomainError::Storage("no storage backend configured".to_string()),
        }
    }
}

impl Default for FallbackRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl StateRepository for FallbackRepository {
    fn name(&self) -> &str {
        "fallback"
    }

    /// The first backend that answers wins, even when it has nothing stored
    async fn load(&self) -> DomainResult<Option<BoardState>> {
        let mut last_error = None;
        for backend in &self.backends {
            match backend.load().await {
                Ok(state) => {
                    log::debug!(
                        "event=storage_load status=ok backend={} found={}",
                        backend.name(),
                        state.is_some()
                    );
                    return Ok(state);
                }
                Err(err) => {
                    log::warn!("event=storage_load status=error backend={} error={}", backend.name(), err);
                    last_error = Some(err);
                }
            }
        }
        Err(Self::exhausted(last_error))
    }

    async fn save(&self, state: &BoardState) -> DomainResult<()> {
        let mut last_error = None;
        for backend in &self.backends {
            match backend.save(state).await {
                Ok(()) => {
                    log::debug!("event=storage_save status=ok backend={}", backend.name());
                    return Ok(());
                }
                Err(err) => {
                    log::warn!("event=storage_save status=error backend={} error={}", backend.name(), err);
                    last_error = Some(err);
                }
            }
        }
        Err(Self::exhausted(last_error))
    }
}
