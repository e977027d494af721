//! Domain Layer
//!
//! Board entities, the column set and every mutation the UI can apply.
//! Nothing here touches storage or the browser.

mod error;
mod column;
mod color;
mod sticky;
mod board;

pub use error::{DomainError, DomainResult};
pub use column::Column;
pub use color::{normalize_color, DEFAULT_PALETTE};
pub use sticky::{Sticky, StickyPatch};
pub use board::{BoardState, Placement};
