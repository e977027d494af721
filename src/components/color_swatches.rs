//! Color Swatches Component
//!
//! Palette of previously used colors plus a custom color picker.

use leptos::prelude::*;

use crate::store::use_kanban_store;

#[component]
pub fn ColorSwatches(
    #[prop(into)] selected: Signal<String>,
    #[prop(into)] on_select: Callback<String>,
) -> impl IntoView {
    let store = use_kanban_store();

    view! {
        <div class="color-swatches">
            <For
                each=move || store.used_colors()
                key=|color| color.clone()
                children=move |color| {
                    let swatch = color.clone();
                    let is_selected = move || selected.get() == swatch;
                    let picked = color.clone();
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "swatch selected" } else { "swatch" }
                            style=format!("background-color: {};", color)
                            title=color.clone()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_select.run(picked.clone());
                            }
                        ></button>
                    }
                }
            />
            <input
                type="color"
                class="swatch-custom"
                title="Custom color"
                prop:value=move || selected.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            />
        </div>
    }
}
