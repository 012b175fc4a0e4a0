//! Workspace tab strip.

use leptos::prelude::*;

use crate::state::workspace::{WorkspaceState, WorkspaceTab};

/// Route for a workspace tab.
pub fn tab_href(tab: WorkspaceTab) -> String {
    format!("/workspace/{}", tab.slug())
}

#[component]
pub fn TabBar(active: WorkspaceTab) -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();

    view! {
        <nav class="tab-bar" role="tablist">
            {WorkspaceTab::ALL
                .into_iter()
                .map(|tab| {
                    let count = move || workspace.with(|ws| ws.total(tab));
                    view! {
                        <a
                            class="tab-bar__tab"
                            class:tab-bar__tab--active=tab == active
                            role="tab"
                            aria-selected=if tab == active { "true" } else { "false" }
                            href=tab_href(tab)
                        >
                            <span class="tab-bar__label">{tab.label()}</span>
                            <span class="tab-bar__count">{count}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}
