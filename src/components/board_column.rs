//! Board Column Component
//!
//! One lane of the board. The column body is a drop zone; its stickies are
//! drop targets of their own.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mouseleave, make_on_zone_mousemove, DropTarget};

use kanban_core::{Column, Sticky};

use super::{DeleteConfirmButton, StickyCard};
use crate::context::use_app_context;
use crate::store::use_kanban_store;

#[component]
pub fn BoardColumn(column: Column) -> impl IntoView {
    let store = use_kanban_store();
    let ctx = use_app_context();
    let dnd = ctx.dnd;

    let stickies = move || store.with_board(|board| board.stickies_in(column).cloned().collect::<Vec<Sticky>>());
    let count = move || store.with_board(|board| board.count_in(column));

    let on_zone_mousemove = make_on_zone_mousemove(dnd, column);
    let on_mouseleave = make_on_mouseleave(dnd);

    let body_class = move || {
        let hovered = dnd.drop_target_read.with(|t| matches!(t, Some(DropTarget::Zone(z)) if *z == column));
        if hovered { "column-body drop-zone-active" } else { "column-body" }
    };

    let sort_oldest_first = move |_| {
        let _ = store.sort_column_oldest_first(column);
    };

    let clear_done = move |_: ()| {
        let removed = store.delete_done_stickies();
        store.flash_status(format!("Removed {} done stickies", removed));
    };

    view! {
        <section class="board-column" data-column=column.as_str()>
            <header class="column-header">
                <h2>{column.as_str()}</h2>
                <span class="column-count">{count}</span>
                <button class="column-sort-btn" title="Sort oldest first" on:click=sort_oldest_first>
                    "⇅"
                </button>
                {(column == Column::Done).then(|| view! {
                    <DeleteConfirmButton
                        button_class="column-clear-btn"
                        label="Clear"
                        prompt="Clear all done?"
                        on_confirm=clear_done
                    />
                })}
            </header>

            <div class=body_class on:mousemove=on_zone_mousemove on:mouseleave=on_mouseleave>
                <For
                    each=stickies
                    key=|sticky| (sticky.id.clone(), sticky.text.clone(), sticky.color.clone())
                    children=move |sticky| view! { <StickyCard sticky=sticky /> }
                />
                <Show when=move || count() == 0>
                    <p class="column-empty">"Drop stickies here"</p>
                </Show>
            </div>
        </section>
    }
}
