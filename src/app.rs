//! Sticky Kanban Frontend App
//!
//! Board layout: header with backup controls, new-sticky form, one column per lane.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_mouseup, create_dnd_signals, DropTarget, Placement as DropPlacement};

use kanban_core::{BoardConfig, BoardService, Column, Placement};

use crate::browser;
use crate::components::{BackupBar, BackupReminder, BoardColumn, LogPanel, NewStickyForm};
use crate::context::{AppContext, BoardDnd};
use crate::storage::browser_repository;
use crate::store::KanbanStore;

fn placement(placement: DropPlacement) -> Placement {
    match placement {
        DropPlacement::Before => Placement::Before,
        DropPlacement::After => Placement::After,
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = BoardConfig::default();
    let reset_requested = browser::take_query_flag(&config.reset_query_param);
    let repository = browser_repository(&config.storage);
    let service = BoardService::new(repository, config);

    let store = KanbanStore::new(service);
    let dnd: BoardDnd = create_dnd_signals();

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(signal(None::<String>), dnd));

    bind_global_mouseup(dnd, move |dragged: String, target: DropTarget<String, Column>| {
        let result = match target {
            DropTarget::Item(target_id, at) => store.relocate_sticky(&dragged, &target_id, placement(at)).map(|_| ()),
            DropTarget::Zone(column) => store.move_sticky(&dragged, column),
        };
        if let Err(err) = result {
            log::warn!("event=sticky_drop status=error sticky={} error={}", dragged, err);
        }
    });

    store.load(reset_requested);

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Sticky Kanban"</h1>
                <BackupBar />
            </header>

            <BackupReminder />

            <Show
                when=move || store.loaded()
                fallback=|| view! { <p class="loading">"Loading board..."</p> }
            >
                <NewStickyForm />
                <main class="board">
                    {Column::ALL.iter().map(|&column| view! { <BoardColumn column=column /> }).collect_view()}
                </main>
            </Show>

            <footer class="app-footer">
                <p class="sticky-count">{move || format!("{} stickies", store.sticky_count())}</p>
                <LogPanel />
            </footer>
        </div>
    }
}
