//! Browser Storage Backends
//!
//! IndexedDB first, local storage second, mirroring the board chain.

mod indexed_db;
mod local_storage;

use kanban_core::{DomainError, FallbackRepository, StorageConfig};
use wasm_bindgen::JsValue;

pub use indexed_db::IndexedDbRepository;
pub use local_storage::LocalStorageRepository;

/// Repository chain used by the app
pub fn browser_repository(config: &StorageConfig) -> FallbackRepository {
    let repository = FallbackRepository::new()
        .with_backend(IndexedDbRepository::new(config.clone()))
        .with_backend(LocalStorageRepository::new(&config.local_storage_key));
    log::info!("event=storage_init backends={}", repository.backend_names().join(","));
    repository
}

/// Map a JS exception into a storage error
fn js_error(err: JsValue) -> DomainError {
    let message = err
        .as_string()
        .or_else(|| js_sys::Reflect::get(&err, &JsValue::from_str("message")).ok().and_then(|m| m.as_string()))
        .unwrap_or_else(|| format!("{:?}", err));
    DomainError::Storage(message)
}
