//! Local Storage Backend
//!
//! Board serialized as JSON under a single key.

use async_trait::async_trait;

use kanban_core::{BoardState, DomainError, DomainResult, StateRepository};

use super::js_error;

pub struct LocalStorageRepository {
    key: String,
}

impl LocalStorageRepository {
    pub fn new(key: &str) -> Self {
        Self { key: key.to_string() }
    }

    fn storage() -> DomainResult<web_sys::Storage> {
        web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("local storage is not available".to_string()))
    }
}

#[async_trait(?Send)]
impl StateRepository for LocalStorageRepository {
    fn name(&self) -> &str {
        "localstorage"
    }

    async fn load(&self) -> DomainResult<Option<BoardState>> {
        let Some(saved) = Self::storage()?.get_item(&self.key).map_err(js_error)? else {
            return Ok(None);
        };
        serde_json::from_str(&saved)
            .map(Some)
            .map_err(|e| DomainError::Storage(format!("failed to parse saved state: {}", e)))
    }

    async fn save(&self, state: &BoardState) -> DomainResult<()> {
        let json = serde_json::to_string(state).map_err(|e| DomainError::Internal(e.to_string()))?;
        Self::storage()?.set_item(&self.key, &json).map_err(js_error)
    }
}
