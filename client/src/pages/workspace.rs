//! Records workspace route, `/workspace` and `/workspace/:tab`.

#[cfg(test)]
#[path = "workspace_test.rs"]
mod workspace_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::filter_bar::FilterBar;
use crate::components::record_table::RecordTable;
use crate::components::tab_bar::TabBar;
use crate::state::workspace::WorkspaceTab;

/// Tab for the `:tab` route parameter. A missing parameter opens bids.
pub fn resolve_tab(slug: Option<&str>) -> Option<WorkspaceTab> {
    match slug {
        None | Some("") => Some(WorkspaceTab::default()),
        Some(slug) => WorkspaceTab::from_slug(slug),
    }
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let params = use_params_map();
    let tab = Memo::new(move |_| resolve_tab(params.read().get("tab").as_deref()));

    move || match tab.get() {
        Some(tab) => view! {
            <main class="workspace">
                <header class="workspace__header">
                    <a class="workspace__home" href="/">
                        "Dashboard"
                    </a>
                    <h1>{tab.label()}</h1>
                </header>
                <TabBar active=tab/>
                <FilterBar tab=tab/>
                <RecordTable tab=tab/>
            </main>
        }
        .into_any(),
        None => view! {
            <main class="not-found">
                <h1>"Unknown workspace tab"</h1>
                <a class="btn" href="/workspace">
                    "Open workspace"
                </a>
            </main>
        }
        .into_any(),
    }
}
