//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};
use records::{DateFormat, seed};

use crate::pages::{
    dashboard::DashboardPage, tour::TourPage, tours::ToursPage, workspace::WorkspacePage,
};
use crate::state::workspace::WorkspaceState;
use crate::util::clock;
use time::{Date, UtcOffset};

/// "Today" as the host decides it, provided while rendering on the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostToday(pub Date);

/// Name of the shell `<meta>` that carries the host's "today" to the browser.
pub const TODAY_META: &str = "sitedeck-today";

/// The host's date when known, otherwise the date at `offset`.
#[must_use]
pub fn resolve_today(host: Option<Date>, now_ms: u64, offset: UtcOffset) -> Date {
    host.unwrap_or_else(|| clock::today_from_ms(now_ms, offset))
}

#[must_use]
pub fn parse_today_meta(raw: &str) -> Option<Date> {
    match DateFormat::Iso.parse(raw) {
        Ok(date) => Some(date),
        Err(_) => None,
    }
}

/// Workspace "today": the host's date on the server and, after hydration,
/// the same date read back from the shell. The browser clock is a fallback.
pub fn initial_today() -> Date {
    let host = use_context::<HostToday>().map(|HostToday(date)| date).or_else(today_from_document);
    resolve_today(host, clock::now_ms(), clock::local_offset())
}

#[cfg(feature = "hydrate")]
fn today_from_document() -> Option<Date> {
    let selector = format!("meta[name=\"{TODAY_META}\"]");
    let meta = match document().query_selector(&selector) {
        Ok(meta) => meta?,
        Err(err) => {
            leptos::logging::warn!("today meta lookup failed: {err:?}");
            return None;
        }
    };
    parse_today_meta(&meta.get_attribute("content")?)
}

#[cfg(not(feature = "hydrate"))]
fn today_from_document() -> Option<Date> {
    None
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let today = DateFormat::Iso.format(initial_today());
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=TODAY_META content=today/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Loads the demo dataset into the workspace context. Edits live in that
/// signal until the page reloads.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let workspace = RwSignal::new(WorkspaceState::new(seed::demo(), DateFormat::Iso, initial_today()));
    provide_context(workspace);

    view! {
        <Stylesheet id="leptos" href="/pkg/sitedeck.css"/>
        <Title text="SiteDeck"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route path=StaticSegment("workspace") view=WorkspacePage/>
                <Route path=(StaticSegment("workspace"), ParamSegment("tab")) view=WorkspacePage/>
                <Route path=StaticSegment("tours") view=ToursPage/>
                <Route path=(StaticSegment("tour"), ParamSegment("slug")) view=TourPage/>
            </Routes>
        </Router>
    }
}
