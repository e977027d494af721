//! Application Context
//!
//! UI-only state shared via Leptos Context API.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;

use kanban_core::Column;

/// Drag state: stickies are dragged by id, columns are the drop zones
pub type BoardDnd = DndSignals<String, Column>;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Sticky whose text is being edited - read
    pub editing_sticky: ReadSignal<Option<String>>,
    /// Sticky whose text is being edited - write
    set_editing_sticky: WriteSignal<Option<String>>,
    /// Drag-and-drop signals for the board
    pub dnd: BoardDnd,
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}

impl AppContext {
    pub fn new(editing_sticky: (ReadSignal<Option<String>>, WriteSignal<Option<String>>), dnd: BoardDnd) -> Self {
        Self {
            editing_sticky: editing_sticky.0,
            set_editing_sticky: editing_sticky.1,
            dnd,
        }
    }

    pub fn start_editing(&self, id: String) {
        self.set_editing_sticky.set(Some(id));
    }

    pub fn stop_editing(&self) {
        self.set_editing_sticky.set(None);
    }

    pub fn is_editing(&self, id: &str) -> bool {
        self.editing_sticky.with(|editing| editing.as_deref() == Some(id))
    }
}
