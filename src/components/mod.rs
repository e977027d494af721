//! UI Components
//!
//! Leptos components of the board.

mod backup_bar;
mod backup_reminder;
mod board_column;
mod color_swatches;
mod delete_confirm_button;
mod log_panel;
mod new_sticky_form;
mod sticky_card;

pub use backup_bar::BackupBar;
pub use backup_reminder::BackupReminder;
pub use board_column::BoardColumn;
pub use color_swatches::ColorSwatches;
pub use delete_confirm_button::DeleteConfirmButton;
pub use log_panel::LogPanel;
pub use new_sticky_form::NewStickyForm;
pub use sticky_card::StickyCard;
