//! Colored pill for a record status.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

/// CSS classes for a status key, e.g. `in_transit` -> `badge badge--in-transit`.
pub fn badge_class(status: &str) -> String {
    format!("badge badge--{}", status.replace('_', "-"))
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String, #[prop(into)] label: String) -> impl IntoView {
    view! { <span class=badge_class(&status)>{label}</span> }
}
