//! Dashboard metric card.

use leptos::prelude::*;

/// A single headline number with a caption. Renders as a link when `href`
/// is given.
#[component]
pub fn StatCard(
    #[prop(into)] label: String,
    #[prop(into)] value: String,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] href: Option<String>,
    #[prop(optional)] alert: bool,
) -> impl IntoView {
    let body = view! {
        <span class="stat-card__value">{value}</span>
        <span class="stat-card__label">{label}</span>
        {hint.map(|hint| view! { <span class="stat-card__hint">{hint}</span> })}
    };
    match href {
        Some(href) => view! {
            <a class="stat-card stat-card--link" class:stat-card--alert=alert href=href>
                {body}
            </a>
        }
        .into_any(),
        None => view! {
            <div class="stat-card" class:stat-card--alert=alert>
                {body}
            </div>
        }
        .into_any(),
    }
}
