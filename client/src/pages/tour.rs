//! Full-screen tour route, `/tour/:slug`.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::tour_carousel::TourCarousel;
use crate::tours::{EXIT_ROUTE, TourKind};

#[component]
pub fn TourPage() -> impl IntoView {
    let params = use_params_map();
    let tour = Memo::new(move |_| params.read().get("slug").and_then(|slug| TourKind::from_slug(&slug)));

    move || match tour.get() {
        Some(tour) => {
            let on_complete = Callback::new(move |()| {
                leptos::logging::log!("tour completed: {}", tour.slug());
            });
            view! {
                <TourCarousel
                    slides=tour.slides()
                    config=tour.config()
                    exit_to=EXIT_ROUTE
                    destination=tour.destination()
                    on_complete=on_complete
                    complete_label=tour.complete_label()
                />
            }
            .into_any()
        }
        None => view! {
            <main class="not-found">
                <h1>"Tour not found"</h1>
                <a class="btn" href=EXIT_ROUTE>
                    "Browse tours"
                </a>
            </main>
        }
        .into_any(),
    }
}
