//! Leptos DragDrop Utilities
//!
//! Simple drag-and-drop for Leptos using mouse events.
//! Uses movement threshold to distinguish click from drag.
//!
//! Generic over the dragged item id (`Id`) and the key of drop zones (`Z`),
//! e.g. card ids and the lanes of a board.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Which half of the hovered item the pointer is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    Before,
    After,
}

/// Drop target types
#[derive(Clone, Debug, PartialEq)]
pub enum DropTarget<Id, Z> {
    /// Drop next to another item
    Item(Id, Placement),
    /// Drop on a zone (e.g. empty space of a list)
    Zone(Z),
}

/// DnD state signals
pub struct DndSignals<Id: 'static, Z: 'static> {
    pub dragging_id_read: ReadSignal<Option<Id>>,
    pub dragging_id_write: WriteSignal<Option<Id>>,
    pub drop_target_read: ReadSignal<Option<DropTarget<Id, Z>>>,
    pub drop_target_write: WriteSignal<Option<DropTarget<Id, Z>>>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<Id>>,
    pub pending_id_write: WriteSignal<Option<Id>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

impl<Id: 'static, Z: 'static> Clone for DndSignals<Id, Z> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<Id: 'static, Z: 'static> Copy for DndSignals<Id, Z> {}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

/// Whether a pointer at `pointer_y` is in the upper or lower half of a box
pub fn placement_for(pointer_y: f64, top: f64, height: f64) -> Placement {
    if pointer_y < top + height / 2.0 {
        Placement::Before
    } else {
        Placement::After
    }
}

/// Whether the pointer moved far enough from the mousedown point to drag
pub fn exceeds_threshold(start: (i32, i32), current: (i32, i32)) -> bool {
    let dx = (current.0 - start.0).abs();
    let dy = (current.1 - start.1).abs();
    dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX
}

pub fn create_dnd_signals<Id, Z>() -> DndSignals<Id, Z>
where
    Id: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    let (dragging_id_read, dragging_id_write) = signal(None::<Id>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget<Id, Z>>);
    let (pending_id_read, pending_id_write) = signal(None::<Id>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// End drag operation
pub fn end_drag<Id, Z>(dnd: &DndSignals<Id, Z>)
where
    Id: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown<Id, Z>(dnd: DndSignals<Id, Z>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is a form control
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlTextAreaElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove<Id, Z>(dnd: DndSignals<Id, Z>)
where
    Id: Clone + Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.with_untracked(|d| d.is_none()) {
            let start = (dnd.start_x_read.get_untracked(), dnd.start_y_read.get_untracked());
            if exceeds_threshold(start, (ev.client_x(), ev.client_y())) {
                dnd.dragging_id_write.set(pending);
            }
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mousemove handler for items: target becomes "next to this item",
/// before or after depending on which half the pointer is over.
///
/// Stops propagation so an enclosing zone does not overwrite the target.
pub fn make_on_item_mousemove<Id, Z>(dnd: DndSignals<Id, Z>, item_id: Id) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Z: Clone + PartialEq + Send + Sync + 'static,
{
    move |ev: web_sys::MouseEvent| {
        let Some(dragging) = dnd.dragging_id_read.get_untracked() else { return; };
        ev.stop_propagation();
        // Don't allow dropping on self
        if dragging == item_id {
            dnd.drop_target_write.set(None);
            return;
        }
        let placement = ev
            .current_target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .map(|el| {
                let rect = el.get_bounding_client_rect();
                placement_for(ev.client_y() as f64, rect.top(), rect.height())
            })
            .unwrap_or(Placement::After);
        let target = DropTarget::Item(item_id.clone(), placement);
        if dnd.drop_target_read.with_untracked(|t| t.as_ref() != Some(&target)) {
            dnd.drop_target_write.set(Some(target));
        }
    }
}

/// Create mousemove handler for zones
pub fn make_on_zone_mousemove<Id, Z>(dnd: DndSignals<Id, Z>, zone: Z) -> impl Fn(web_sys::MouseEvent) + Clone + 'static
where
    Id: Clone + PartialEq + Send + Sync + 'static,
    Z: Clone + PartialEq + Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(|d| d.is_some()) {
            let target = DropTarget::Zone(zone.clone());
            if dnd.drop_target_read.with_untracked(|t| t.as_ref() != Some(&target)) {
                dnd.drop_target_write.set(Some(target));
            }
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave<Id, Z>(dnd: DndSignals<Id, Z>) -> impl Fn(web_sys::MouseEvent) + Copy + 'static
where
    Id: Send + Sync + 'static,
    Z: Send + Sync + 'static,
{
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.with_untracked(|d| d.is_some()) {
            dnd.drop_target_write.set(None);
        }
    }
}

/// Bind global mouseup handler for drop detection
pub fn bind_global_mouseup<Id, Z, F>(dnd: DndSignals<Id, Z>, on_drop: F)
where
    Id: Clone + Send + Sync + 'static,
    Z: Clone + Send + Sync + 'static,
    F: Fn(Id, DropTarget<Id, Z>) + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();

        end_drag(&dnd);

        // Only a real drag (not a click) over a target counts as a drop
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            on_drop(dragged, target);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();

    // Also bind global mousemove
    bind_global_mousemove(dnd);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placement_upper_half_is_before() {
        assert_eq!(placement_for(105.0, 100.0, 40.0), Placement::Before);
        assert_eq!(placement_for(119.9, 100.0, 40.0), Placement::Before);
    }

    #[test]
    fn test_placement_lower_half_is_after() {
        assert_eq!(placement_for(120.0, 100.0, 40.0), Placement::After);
        assert_eq!(placement_for(180.0, 100.0, 40.0), Placement::After);
    }

    #[test]
    fn test_threshold() {
        assert!(!exceeds_threshold((10, 10), (15, 15)));
        assert!(exceeds_threshold((10, 10), (16, 10)));
        assert!(exceeds_threshold((10, 10), (10, 4)));
    }

    #[test]
    fn test_end_drag_clears_all_drag_state() {
        let dnd = create_dnd_signals::<String, &'static str>();
        dnd.pending_id_write.set(Some("a".to_string()));
        dnd.dragging_id_write.set(Some("a".to_string()));
        dnd.drop_target_write.set(Some(DropTarget::Zone("Done")));

        end_drag(&dnd);

        assert_eq!(dnd.pending_id_read.get_untracked(), None);
        assert_eq!(dnd.dragging_id_read.get_untracked(), None);
        assert_eq!(dnd.drop_target_read.get_untracked(), None);
    }

    #[test]
    fn test_drop_target_equality() {
        let a: DropTarget<String, &str> = DropTarget::Item("x".to_string(), Placement::Before);
        assert_eq!(a, DropTarget::Item("x".to_string(), Placement::Before));
        assert_ne!(a, DropTarget::Item("x".to_string(), Placement::After));
        assert_ne!(a, DropTarget::Zone("Done"));
    }
}
