//! Tour library: every product tour with its length.

#[cfg(test)]
#[path = "tours_test.rs"]
mod tours_test;

use leptos::prelude::*;

use crate::tours::TourKind;

/// Route of a tour.
pub fn tour_href(tour: TourKind) -> String {
    format!("/tour/{}", tour.slug())
}

pub fn slide_count_label(count: usize) -> String {
    if count == 1 { "1 slide".to_owned() } else { format!("{count} slides") }
}

#[component]
pub fn ToursPage() -> impl IntoView {
    view! {
        <main class="tours">
            <header class="tours__header">
                <h1>"Product tours"</h1>
                <a class="btn" href="/">
                    "Back to dashboard"
                </a>
            </header>
            <ul class="tours__grid">
                {TourKind::ALL
                    .into_iter()
                    .map(|tour| {
                        let autoplay = tour.config().autoplay;
                        view! {
                            <li class="tours__item">
                                <a class="tour-card" href=tour_href(tour) style=tour.background().style()>
                                    <span class="tour-card__title">{tour.title()}</span>
                                    <span class="tour-card__meta">{slide_count_label(tour.slide_count())}</span>
                                    <Show when=move || autoplay>
                                        <span class="tour-card__tag">"Autoplay"</span>
                                    </Show>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}
