//! Repository Layer - Core Traits
//!
//! Abstract interface for wherever the board is persisted.
//! Browser backends live in the UI crate; this crate ships in-memory and
//! fallback implementations.

use async_trait::async_trait;

use crate::domain::{BoardState, DomainResult};

/// Persistence for the single board record.
///
/// Futures are not `Send`: browser storage handles are bound to the JS thread.
#[async_trait(?Send)]
pub trait StateRepository {
    /// Short backend name for logs
    fn name(&self) -> &str;

    /// Load the stored board. `Ok(None)` means nothing has been saved yet.
    async fn load(&self) -> DomainResult<Option<BoardState>>;

    /// Overwrite the stored board
    async fn save(&self, state: &BoardState) -> DomainResult<()>;
}
