//! Search box and status filter for one workspace tab.

use leptos::prelude::*;

use crate::state::workspace::{WorkspaceState, WorkspaceTab};

#[component]
pub fn FilterBar(tab: WorkspaceTab) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    let search = move || workspace.with(|ws| ws.tab(tab).query.search.clone());
    let status = move || workspace.with(|ws| ws.tab(tab).query.status.as_key().to_owned());
    let has_filters = move || {
        workspace.with(|ws| {
            let query = &ws.tab(tab).query;
            !query.search.is_empty() || query.status.as_key() != "all"
        })
    };

    view! {
        <div class="filter-bar">
            <input
                class="filter-bar__search"
                type="search"
                placeholder="Search name, client or location"
                aria-label="Search"
                prop:value=search
                on:input=move |ev| workspace.update(|ws| ws.set_search(tab, event_target_value(&ev)))
            />
            <select
                class="filter-bar__status"
                aria-label="Status"
                prop:value=status
                on:change=move |ev| workspace.update(|ws| ws.set_status(tab, &event_target_value(&ev)))
            >
                <option value="all">"All statuses"</option>
                {tab
                    .status_options()
                    .into_iter()
                    .map(|(key, label)| view! { <option value=key>{label}</option> })
                    .collect_view()}
            </select>
            <Show when=has_filters>
                <button class="btn filter-bar__clear" on:click=move |_| workspace.update(|ws| ws.clear_filters(tab))>
                    "Clear"
                </button>
            </Show>
        </div>
    }
}
