//! Backup Bar Component
//!
//! Export the board as a JSON download and import it back from a file.

use leptos::html::Input;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser;
use crate::store::{use_kanban_store, KanbanStore};

/// Export the board and hand the file to the browser
pub fn export_to_file(store: KanbanStore) {
    match store.export_backup(browser::download_json) {
        Ok(file_name) => {
            log::info!("event=backup_export status=ok file={}", file_name);
            store.flash_status(format!("Saved {}", file_name));
        }
        Err(err) => {
            log::error!("event=backup_export status=error error={}", err);
            store.flash_status(format!("Export failed: {}", err));
        }
    }
}

#[component]
pub fn BackupBar() -> impl IntoView {
    let store = use_kanban_store();
    let file_input = NodeRef::<Input>::new();

    let on_file_picked = move |_| {
        let Some(input) = file_input.get_untracked() else { return; };
        let Some(file) = input.files().and_then(|files| files.get(0)) else { return; };
        // Same file can be picked again later
        input.set_value("");

        if !browser::confirm("Importing replaces every sticky on the board. Continue?") {
            return;
        }
        spawn_local(async move {
            let message = match browser::read_file_text(file).await {
                Ok(content) => match store.import_backup(&content) {
                    Ok(count) => format!("Imported {} stickies", count),
                    Err(err) => err.to_string(),
                },
                Err(err) => {
                    log::error!("event=backup_import status=error stage=read error={}", err);
                    format!("Could not read file: {}", err)
                }
            };
            store.flash_status(message);
        });
    };

    view! {
        <div class="backup-bar">
            <button
                class="backup-btn"
                disabled=move || !store.loaded()
                on:click=move |_| export_to_file(store)
            >
                "Export"
            </button>
            <button
                class="backup-btn"
                disabled=move || !store.loaded()
                on:click=move |_| {
                    if let Some(input) = file_input.get_untracked() {
                        input.click();
                    }
                }
            >
                "Import"
            </button>
            <input
                type="file"
                accept="application/json,.json"
                class="hidden-file-input"
                node_ref=file_input
                on:change=on_file_picked
            />
            {move || store.status().map(|msg| view! { <span class="backup-status">{msg}</span> })}
        </div>
    }
}
