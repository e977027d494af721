//! Sticky Kanban Core
//!
//! Layered like the app that uses it:
//! - domain: board entities, mutations and invariants
//! - repository: storage abstraction and fallback chain
//! - service: load/persist orchestration used by the UI store
//! - backup: export/import file format

pub mod backup;
pub mod config;
pub mod domain;
pub mod repository;
pub mod service;

pub use backup::{backup_file_name, deliver_backup, export_backup, import_backup};
pub use config::{BoardConfig, StorageConfig};
pub use domain::{normalize_color, BoardState, Column, DomainError, DomainResult, Placement, Sticky, StickyPatch};
pub use repository::{FallbackRepository, MemoryRepository, StateRepository};
pub use service::BoardService;
