//! Log Panel Component
//!
//! Collapsible view of the most recent log lines.

use leptos::prelude::*;

#[component]
pub fn LogPanel() -> impl IntoView {
    let (lines, set_lines) = signal(Vec::<String>::new());

    let refresh = move |_| {
        set_lines.set(rolling_logger::recent_lines().iter().map(ToString::to_string).collect());
    };

    view! {
        <details class="log-panel">
            <summary on:click=refresh>"Diagnostics"</summary>
            <pre class="log-lines">
                {move || lines.get().join("\n")}
            </pre>
        </details>
    }
}
