//! Full-screen tour carousel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders a [`CarouselSession`] held in a signal. User input goes straight
//! into the session. In the browser a poll loop feeds it clock readings and
//! a document keydown listener feeds it keys; both stop on cleanup, where
//! the session is also unmounted. Exit and completion navigation run after
//! the session reports them, outside any signal update.

#[cfg(test)]
#[path = "tour_carousel_test.rs"]
mod tour_carousel_test;

use carousel::{Background, CarouselConfig, CarouselSession, Slide};
use leptos::prelude::*;

use crate::tours::content::SlideBody;
use crate::util::clock;

/// Poll period for autoplay and exit timers.
#[cfg(feature = "hydrate")]
const POLL_INTERVAL_MS: u64 = 100;

/// Exit hooks backed by the router.
#[cfg(feature = "hydrate")]
struct RouteExit<N> {
    navigate: N,
    exit_to: String,
    destination: String,
    on_complete: Option<Callback<()>>,
}

#[cfg(feature = "hydrate")]
impl<N: Fn(&str, leptos_router::NavigateOptions)> carousel::ExitHandler for RouteExit<N> {
    fn on_complete(&mut self) {
        if let Some(callback) = self.on_complete {
            callback.run(());
        }
    }

    fn navigate_away(&mut self) {
        (self.navigate)(&self.exit_to, leptos_router::NavigateOptions::default());
    }

    fn navigate_to_destination(&mut self) {
        (self.navigate)(&self.destination, leptos_router::NavigateOptions::default());
    }
}

/// CSS classes for the carousel root.
pub fn root_class(config: &CarouselConfig, exiting: bool) -> String {
    let mut class = String::from("carousel");
    if let Some(extra) = config.class_name.as_deref().filter(|extra| !extra.is_empty()) {
        class.push(' ');
        class.push_str(extra);
    }
    if exiting {
        class.push_str(" carousel--exiting");
    }
    class
}

/// Inline width for the progress bar.
pub fn progress_style(progress: f64) -> String {
    format!("width: {:.1}%;", (progress * 100.0).clamp(0.0, 100.0))
}

/// Sequential slide presentation with exit and completion routes.
#[component]
pub fn TourCarousel(
    slides: Vec<Slide<SlideBody>>,
    #[prop(optional)] config: CarouselConfig,
    /// Route for `exit()`.
    #[prop(into)]
    exit_to: String,
    /// Route for `complete()`.
    #[prop(into)]
    destination: String,
    #[prop(optional)] on_complete: Option<Callback<()>>,
    /// Label of the completion button on the final slide.
    #[prop(into, default = "Get started".to_owned())]
    complete_label: String,
) -> impl IntoView {
    let session = match CarouselSession::mount(slides, config, clock::now_ms()) {
        Ok(session) => RwSignal::new(session),
        Err(err) => {
            return view! { <p class="carousel carousel--error">{format!("Tour unavailable: {err}")}</p> }
                .into_any();
        }
    };

    #[cfg(feature = "hydrate")]
    {
        use std::sync::Arc;
        use std::sync::atomic::{AtomicBool, Ordering};

        let alive = Arc::new(AtomicBool::new(true));
        let alive_task = alive.clone();
        let navigate = leptos_router::hooks::use_navigate();
        let mut exit = RouteExit { navigate, exit_to, destination, on_complete };
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(POLL_INTERVAL_MS)).await;
                if !alive_task.load(Ordering::Relaxed) {
                    break;
                }
                let now = clock::now_ms();
                let due = session
                    .try_with_untracked(|s| s.next_deadline().is_some_and(|deadline| deadline <= now))
                    .unwrap_or(false);
                if !due {
                    continue;
                }
                let Some(report) = session.try_update(|s| s.poll(now)) else {
                    break;
                };
                report.dispatch(&mut exit);
                if report.finished.is_some() {
                    break;
                }
            }
        });

        let keys = window_event_listener(leptos::ev::keydown, move |ev| {
            let context = crate::util::keys::context_of(&ev);
            let Some(command) = crate::util::keys::tour_command(&ev.key(), context) else {
                return;
            };
            let handled = session
                .try_update(|s| !s.run(command, clock::now_ms()).is_ignored())
                .unwrap_or(false);
            if handled {
                ev.prevent_default();
            }
        });

        on_cleanup(move || {
            alive.store(false, Ordering::Relaxed);
            keys.remove();
            session.try_update(CarouselSession::unmount);
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (exit_to, destination, on_complete);

    let class = move || session.with(|s| root_class(s.config(), s.carousel().is_exiting()));
    let progress = move || session.with(|s| progress_style(s.carousel().progress()));
    let position = move || session.with(|s| s.carousel().position_label());
    let exiting = move || session.with(|s| s.carousel().is_exiting());
    let is_first = move || session.with(|s| s.carousel().is_first());
    let can_complete = move || session.with(|s| s.carousel().can_complete());
    let has_autoplay = session.with_untracked(|s| s.config().autoplay);
    let slide_count = session.with_untracked(|s| s.carousel().len());

    let on_exit = move |_| {
        session.update(|s| {
            s.exit(clock::now_ms());
        });
    };
    let on_previous = move |_| {
        session.update(|s| {
            s.previous(clock::now_ms());
        });
    };
    let on_next = move |_| {
        session.update(|s| {
            if s.carousel().can_complete() {
                s.complete(clock::now_ms());
            } else {
                s.next(clock::now_ms());
            }
        });
    };
    let on_toggle_autoplay = move |_| {
        session.update(|s| {
            s.toggle_autoplay(clock::now_ms());
        });
    };

    view! {
        <div class=class role="region" aria-roledescription="carousel">
            <div class="carousel__progress" aria-hidden="true">
                <div class="carousel__progress-bar" style=progress></div>
            </div>

            <header class="carousel__chrome">
                <span class="carousel__position">{position}</span>
                <Show when=move || has_autoplay>
                    <button
                        class="btn carousel__autoplay"
                        on:click=on_toggle_autoplay
                        disabled=move || !session.with(CarouselSession::can_toggle_autoplay)
                    >
                        {move || if session.with(CarouselSession::is_autoplaying) { "Pause" } else { "Play" }}
                    </button>
                </Show>
                <button class="btn carousel__exit" on:click=on_exit disabled=exiting title="Exit (Esc)" aria-label="Exit tour">
                    "✕"
                </button>
            </header>

            {move || {
                session.with(|s| {
                    let carousel = s.carousel();
                    let slide = carousel.current_slide().clone();
                    view! { <SlideFace slide=slide enter_class=carousel.direction().enter_class()/> }
                })
            }}

            <nav class="carousel__nav">
                <button class="btn carousel__prev" on:click=on_previous disabled=move || is_first() || exiting()>
                    "← Back"
                </button>
                <ol class="carousel__dots">
                    {(0..slide_count)
                        .map(|i| {
                            let active = move || session.with(|s| s.carousel().index() == i);
                            view! {
                                <li>
                                    <button
                                        class="carousel__dot"
                                        class:carousel__dot--active=active
                                        aria-label=format!("Go to slide {}", i + 1)
                                        on:click=move |_| {
                                            session.update(|s| {
                                                s.select(i, clock::now_ms());
                                            });
                                        }
                                    ></button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
                <button
                    class="btn carousel__next"
                    class:btn--primary=can_complete
                    on:click=on_next
                    disabled=move || exiting() || session.with(|s| s.carousel().is_last() && !s.carousel().can_complete())
                >
                    {move || if can_complete() { complete_label.clone() } else { "Next →".to_owned() }}
                </button>
            </nav>
        </div>
    }
    .into_any()
}

#[component]
fn SlideFace(slide: Slide<SlideBody>, enter_class: &'static str) -> impl IntoView {
    let style = slide.background.as_ref().map(Background::style).unwrap_or_default();
    let body = slide.content;
    view! {
        <section class=format!("slide {enter_class}") style=style>
            <p class="slide__kicker">{body.kicker}</p>
            <h1 class="slide__title">{slide.title}</h1>
            <p class="slide__lead">{body.lead}</p>
            <Show when=move || !body.points.is_empty()>
                <ul class="slide__points">
                    {body.points.iter().map(|point| view! { <li>{*point}</li> }).collect_view()}
                </ul>
            </Show>
            {body.stat.map(|stat| {
                view! {
                    <div class="slide__stat">
                        <span class="slide__stat-value">{stat.value}</span>
                        <span class="slide__stat-caption">{stat.caption}</span>
                    </div>
                }
            })}
        </section>
    }
}
