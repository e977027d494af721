//! Repository Layer
//!
//! Storage abstraction and backend-independent implementations.

mod traits;
mod memory;
mod fallback;


pub use traits::StateRepository;
pub use memory::MemoryRepository;
pub use fallback::FallbackRepository;
