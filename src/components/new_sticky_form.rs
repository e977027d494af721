//! New Sticky Form Component
//!
//! Form for creating stickies with color and column selectors.

use leptos::prelude::*;

use kanban_core::Column;

use super::ColorSwatches;
use crate::store::use_kanban_store;

#[component]
pub fn NewStickyForm() -> impl IntoView {
    let store = use_kanban_store();

    let (new_text, set_new_text) = signal(String::new());
    let (color, set_color) = signal(store.used_colors().first().cloned().unwrap_or_else(|| "#4c90e1".to_string()));
    let (column, set_column) = signal(Column::default());
    let (error, set_error) = signal(None::<String>);

    let create_sticky = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }
        match store.add_sticky(&text, &color.get(), column.get()) {
            Ok(_) => {
                set_new_text.set(String::new());
                set_error.set(None);
            }
            Err(err) => set_error.set(Some(err.to_string())),
        }
    };

    view! {
        <form class="new-sticky-form" on:submit=create_sticky>
            <div class="new-sticky-row">
                <input
                    type="text"
                    placeholder="Add a sticky..."
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>

            <ColorSwatches
                selected=color
                on_select=move |picked: String| set_color.set(picked)
            />

            <div class="column-selector-row">
                {Column::ALL.iter().map(|&col| {
                    let is_selected = move || column.get() == col;
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "column-btn selected" } else { "column-btn" }
                            on:click=move |_| set_column.set(col)
                        >
                            {col.as_str()}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
        </form>
    }
}
