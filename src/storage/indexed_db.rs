//! IndexedDB Backend
//!
//! Stores the board as one structured-clone record. The database is opened
//! per operation and closed once the transaction has finished. A save only
//! counts once its transaction has committed.

use async_trait::async_trait;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{IdbDatabase, IdbRequest, IdbTransaction, IdbTransactionMode};

use kanban_core::{BoardState, DomainError, DomainResult, StateRepository, StorageConfig};

use super::js_error;

pub struct IndexedDbRepository {
    config: StorageConfig,
}

impl IndexedDbRepository {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    async fn open(&self) -> DomainResult<IdbDatabase> {
        let factory = web_sys::window()
            .ok_or_else(|| DomainError::Storage("no window".to_string()))?
            .indexed_db()
            .map_err(js_error)?
            .ok_or_else(|| DomainError::Storage("IndexedDB is not supported in this browser".to_string()))?;

        let request = factory
            .open_with_u32(&self.config.database_name, self.config.database_version)
            .map_err(js_error)?;

        // Create the object store on first open
        let store_name = self.config.store_name.clone();
        let upgrade_request = request.clone();
        let on_upgrade = Closure::<dyn FnMut(web_sys::IdbVersionChangeEvent)>::new(move |_ev: web_sys::IdbVersionChangeEvent| {
            let Ok(result) = upgrade_request.result() else { return; };
            let db: IdbDatabase = result.unchecked_into();
            if !db.object_store_names().contains(&store_name) {
                if let Err(err) = db.create_object_store(&store_name) {
                    log::error!("event=idb_upgrade status=error error={:?}", err);
                }
            }
        });
        request.set_onupgradeneeded(Some(on_upgrade.as_ref().unchecked_ref()));

        let opened = await_request(&request).await;
        request.set_onupgradeneeded(None);
        drop(on_upgrade);

        Ok(opened?.unchecked_into())
    }

    async fn read(&self, db: &IdbDatabase) -> DomainResult<Option<BoardState>> {
        let transaction = db
            .transaction_with_str_and_mode(&self.config.store_name, IdbTransactionMode::Readonly)
            .map_err(js_error)?;
        let store = transaction.object_store(&self.config.store_name).map_err(js_error)?;
        let request = store.get(&JsValue::from_str(&self.config.state_key)).map_err(js_error)?;

        let value = await_request(&request).await?;
        if value.is_undefined() || value.is_null() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(value)
            .map(Some)
            .map_err(|e| DomainError::Storage(format!("stored board is unreadable: {}", e)))
    }

    async fn write(&self, db: &IdbDatabase, state: &BoardState) -> DomainResult<()> {
        let value = state
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        let transaction = db
            .transaction_with_str_and_mode(&self.config.store_name, IdbTransactionMode::Readwrite)
            .map_err(js_error)?;
        let store = transaction.object_store(&self.config.store_name).map_err(js_error)?;
        store
            .put_with_key(&value, &JsValue::from_str(&self.config.state_key))
            .map_err(js_error)?;

        // A failed put surfaces as a transaction error or abort
        await_transaction(&transaction).await
    }
}

#[async_trait(?Send)]
impl StateRepository for IndexedDbRepository {
    fn name(&self) -> &str {
        "indexeddb"
    }

    async fn load(&self) -> DomainResult<Option<BoardState>> {
        let db = self.open().await?;
        let result = self.read(&db).await;
        db.close();
        result
    }

    async fn save(&self, state: &BoardState) -> DomainResult<()> {
        let db = self.open().await?;
        let result = self.write(&db, state).await;
        db.close();
        result
    }
}

/// Resolve once an IDB request fires `success`, with its result.
///
/// Both handlers are detached and dropped once the request settles.
async fn await_request(request: &IdbRequest) -> DomainResult<JsValue> {
    let mut handlers = None;
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let success_request = request.clone();
        let on_success = Closure::once(move |_ev: web_sys::Event| {
            let value = success_request.result().unwrap_or(JsValue::UNDEFINED);
            let _ = resolve.call1(&JsValue::NULL, &value);
        });

        let error_request = request.clone();
        let on_error = Closure::once(move |_ev: web_sys::Event| {
            let error = match error_request.error() {
                Ok(Some(err)) => JsValue::from(err),
                _ => JsValue::from_str("IndexedDB request failed"),
            };
            let _ = reject.call1(&JsValue::NULL, &error);
        });

        request.set_onsuccess(Some(on_success.as_ref().unchecked_ref()));
        request.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        handlers = Some((on_success, on_error));
    });

    let result = JsFuture::from(promise).await;
    request.set_onsuccess(None);
    request.set_onerror(None);
    drop(handlers);
    result.map_err(js_error)
}

/// Resolve once a transaction fires `complete`; `error` or `abort` reject.
///
/// All three handlers are detached and dropped once the transaction settles.
async fn await_transaction(transaction: &IdbTransaction) -> DomainResult<()> {
    let mut handlers = None;
    let promise = js_sys::Promise::new(&mut |resolve: js_sys::Function, reject: js_sys::Function| {
        let on_complete = Closure::once(move |_ev: web_sys::Event| {
            let _ = resolve.call0(&JsValue::NULL);
        });

        let error_transaction = transaction.clone();
        let reject_on_error = reject.clone();
        let on_error = Closure::once(move |_ev: web_sys::Event| {
            let _ = reject_on_error.call1(&JsValue::NULL, &transaction_error(&error_transaction));
        });

        let abort_transaction = transaction.clone();
        let on_abort = Closure::once(move |_ev: web_sys::Event| {
            let _ = reject.call1(&JsValue::NULL, &transaction_error(&abort_transaction));
        });

        transaction.set_oncomplete(Some(on_complete.as_ref().unchecked_ref()));
        transaction.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        transaction.set_onabort(Some(on_abort.as_ref().unchecked_ref()));
        handlers = Some((on_complete, on_error, on_abort));
    });

    let result = JsFuture::from(promise).await;
    transaction.set_oncomplete(None);
    transaction.set_onerror(None);
    transaction.set_onabort(None);
    drop(handlers);
    result.map(|_| ()).map_err(js_error)
}

fn transaction_error(transaction: &IdbTransaction) -> JsValue {
    match transaction.error() {
        Some(err) => JsValue::from(err),
        None => JsValue::from_str("IndexedDB transaction aborted"),
    }
}
