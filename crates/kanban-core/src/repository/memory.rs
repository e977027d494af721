//! In-Memory Repository
//!
//! Keeps the board in process memory. Used in tests and as the last link of
//! a fallback chain when the browser offers no storage at all.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::domain::{BoardState, DomainResult};

use super::traits::StateRepository;

#[derive(Debug, Default)]
pub struct MemoryRepository {
    state: RefCell<Option<BoardState>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository pre-filled with a saved board
    pub fn with_state(state: BoardState) -> Self {
        Self {
            state: RefCell::new(Some(state)),
        }
    }

    /// Copy of whatever was saved last
    pub fn snapshot(&self) -> Option<BoardState> {
        self.state.borrow().clone()
    }
}

#[async_trait(?Send)]
impl StateRepository for MemoryRepository {
    fn name(&self) -> &str {
        "memory"
    }

    async fn load(&self) -> DomainResult<Option<BoardState>> {
        Ok(self.state.borrow().clone())
    }

    async fn save(&self, state: &BoardState) -> DomainResult<()> {
        *self.state.borrow_mut() = Some(state.clone());
        Ok(())
    }
}
