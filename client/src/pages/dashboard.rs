//! Dashboard page: headline numbers across the workspace and tour shortcuts.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. Every number is derived from the shared
//! `WorkspaceState`, so inline edits made in the tables show up here on the
//! next visit without a reload.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use records::format::currency;
use records::{DashboardSummary, dates};

use crate::components::stat_card::StatCard;
use crate::components::tab_bar::tab_href;
use crate::pages::tours::tour_href;
use crate::state::workspace::{WorkspaceState, WorkspaceTab};
use crate::tours::TourKind;

/// Tours featured on the dashboard, in display order.
pub const FEATURED_TOURS: [TourKind; 4] =
    [TourKind::ExecutivePitch, TourKind::PreConstruction, TourKind::FieldManagement, TourKind::Financial];

/// Caption for the due-soon card.
pub fn due_soon_hint(summary: &DashboardSummary) -> String {
    match summary.bids_due_soon {
        0 => "Nothing due in the next two weeks".to_owned(),
        1 => "1 bid due in the next two weeks".to_owned(),
        n => format!("{n} bids due in the next two weeks"),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let workspace = expect_context::<RwSignal<WorkspaceState>>();
    let summary = Memo::new(move |_| workspace.with(WorkspaceState::summary));
    let today = move || workspace.with(|ws| dates::display(ws.today));

    view! {
        <main class="dashboard">
            <header class="dashboard__header">
                <h1>"Project Overview"</h1>
                <span class="dashboard__today">{today}</span>
            </header>

            {move || {
                let summary = summary.get();
                view! {
                    <section class="dashboard__stats">
                        <StatCard
                            label="Active bids"
                            value=summary.active_bids.to_string()
                            hint=format!("{} pipeline", currency(summary.pipeline_value))
                            href=tab_href(WorkspaceTab::Bids)
                        />
                        <StatCard
                            label="Due soon"
                            value=summary.bids_due_soon.to_string()
                            hint=due_soon_hint(&summary)
                            href=tab_href(WorkspaceTab::Bids)
                            alert={summary.bids_due_soon > 0}
                        />
                        <StatCard
                            label="In transit"
                            value=summary.deliveries_in_transit.to_string()
                            hint=format!("{} delayed", summary.delayed_deliveries)
                            href=tab_href(WorkspaceTab::Deliveries)
                            alert={summary.delayed_deliveries > 0}
                        />
                        <StatCard
                            label="Stages in progress"
                            value=summary.stages_in_progress.to_string()
                            href=tab_href(WorkspaceTab::Stages)
                        />
                        <StatCard
                            label="Approved estimates"
                            value=currency(summary.approved_estimate_value)
                            href=tab_href(WorkspaceTab::Estimates)
                        />
                    </section>
                }
            }}

            <section class="dashboard__tours">
                <h2>"Product tours"</h2>
                <ul class="dashboard__tour-list">
                    {FEATURED_TOURS
                        .into_iter()
                        .map(|tour| {
                            view! {
                                <li>
                                    <a class="tour-link" href=tour_href(tour)>
                                        {tour.title()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
                <a class="btn" href=crate::tours::EXIT_ROUTE>
                    "Browse all tours"
                </a>
            </section>
        </main>
    }
}
