//! Sticky Card Component
//!
//! One card on the board: drag source, drop target, inline text editor,
//! recolor palette and column move buttons.

use leptos::html::Textarea;
use leptos::prelude::*;
use leptos_dragdrop::{make_on_item_mousemove, make_on_mousedown, DropTarget, Placement};

use kanban_core::{Column, Sticky, StickyPatch};

use super::{ColorSwatches, DeleteConfirmButton};
use crate::context::use_app_context;
use crate::store::use_kanban_store;

/// Inline textarea for editing a sticky's text.
/// Enter or blur saves, Shift+Enter inserts a newline, Escape cancels.
#[component]
fn StickyEditor(id: String, text: String) -> impl IntoView {
    let store = use_kanban_store();
    let ctx = use_app_context();
    let textarea_ref = NodeRef::<Textarea>::new();
    let id = StoredValue::new(id);

    Effect::new(move |_| {
        if let Some(el) = textarea_ref.get() {
            let _ = el.focus();
            el.select();
        }
    });

    let save = move || {
        // Escape or an earlier save already closed the editor
        if !id.with_value(|id| ctx.editing_sticky.get_untracked().as_deref() == Some(id.as_str())) {
            return;
        }
        ctx.stop_editing();
        let Some(el) = textarea_ref.get_untracked() else { return; };
        let _ = id.with_value(|id| store.update_sticky(id, StickyPatch::text(el.value())));
    };

    view! {
        <textarea
            class="sticky-editor"
            node_ref=textarea_ref
            prop:value=text
            on:mousedown=move |ev| ev.stop_propagation()
            on:keydown=move |ev: web_sys::KeyboardEvent| {
                match ev.key().as_str() {
                    "Enter" if !ev.shift_key() => {
                        ev.prevent_default();
                        save();
                    }
                    "Escape" => {
                        ev.prevent_default();
                        ctx.stop_editing();
                    }
                    _ => {}
                }
            }
            on:blur=move |_| save()
        ></textarea>
    }
}

#[component]
pub fn StickyCard(sticky: Sticky) -> impl IntoView {
    let store = use_kanban_store();
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let id = sticky.id.clone();
    let column = sticky.column;
    let (show_palette, set_show_palette) = signal(false);

    let on_mousedown = make_on_mousedown(dnd, id.clone());
    let on_mousemove = make_on_item_mousemove(dnd, id.clone());

    let card_class = {
        let id = id.clone();
        move || {
            let mut class = String::from("sticky-card");
            if dnd.dragging_id_read.with(|d| d.as_deref() == Some(id.as_str())) {
                class.push_str(" dragging");
            }
            match dnd.drop_target_read.get() {
                Some(DropTarget::Item(target, Placement::Before)) if target == id => class.push_str(" drop-before"),
                Some(DropTarget::Item(target, Placement::After)) if target == id => class.push_str(" drop-after"),
                _ => {}
            }
            class
        }
    };

    let is_editing = {
        let id = id.clone();
        move || ctx.is_editing(&id)
    };

    let on_dblclick = {
        let id = id.clone();
        move |_| ctx.start_editing(id.clone())
    };

    let recolor = {
        let id = id.clone();
        move |color: String| {
            if store.update_sticky(&id, StickyPatch::color(color)).is_ok() {
                set_show_palette.set(false);
            }
        }
    };

    let move_to = {
        let id = id.clone();
        move |target: Column| {
            let _ = store.move_sticky(&id, target);
        }
    };
    let move_back = move_to.clone();

    let delete = {
        let id = id.clone();
        move |_: ()| {
            let _ = store.delete_sticky(&id);
        }
    };

    let color = sticky.color.clone();
    let text = sticky.text.clone();
    let created = sticky.created_at.format("%Y-%m-%d").to_string();

    view! {
        <div
            class=card_class
            style=format!("background-color: {};", sticky.color)
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:dblclick=on_dblclick
        >
            {
                let id = id.clone();
                let text = text.clone();
                move || if is_editing() {
                    view! { <StickyEditor id=id.clone() text=text.clone() /> }.into_any()
                } else {
                    view! { <p class="sticky-text">{text.clone()}</p> }.into_any()
                }
            }

            <div class="sticky-footer">
                <span class="sticky-date">{created}</span>
                <span class="sticky-actions">
                    {column.previous().map(|prev| {
                        let move_back = move_back.clone();
                        view! {
                            <button class="sticky-move-btn" title=format!("Move to {}", prev) on:click=move |_| move_back(prev)>
                                "◀"
                            </button>
                        }
                    })}
                    {column.next().map(|next| {
                        let move_to = move_to.clone();
                        view! {
                            <button class="sticky-move-btn" title=format!("Move to {}", next) on:click=move |_| move_to(next)>
                                "▶"
                            </button>
                        }
                    })}
                    <button
                        class="sticky-color-btn"
                        title="Change color"
                        on:click=move |_| set_show_palette.update(|v| *v = !*v)
                    >
                        "●"
                    </button>
                    <DeleteConfirmButton button_class="sticky-delete-btn" on_confirm=delete />
                </span>
            </div>

            <Show when=move || show_palette.get()>
                <ColorSwatches selected=Signal::stored(color.clone()) on_select=recolor.clone() />
            </Show>
        </div>
    }
}
