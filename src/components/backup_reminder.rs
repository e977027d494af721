//! Backup Reminder Component

use leptos::prelude::*;

use super::backup_bar::export_to_file;
use crate::store::use_kanban_store;

#[component]
pub fn BackupReminder() -> impl IntoView {
    let store = use_kanban_store();

    view! {
        <Show when=move || store.reminder_visible()>
            <div class="backup-reminder">
                <span>"It has been a while since your last backup."</span>
                <button on:click=move |_| export_to_file(store)>"Back up now"</button>
                <button on:click=move |_| store.dismiss_reminder()>"Later"</button>
                <button on:click=move |_| store.disable_backup_reminders()>"Don't remind me"</button>
            </div>
        </Show>
    }
}
