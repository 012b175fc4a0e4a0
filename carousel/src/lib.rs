//! Slide carousel state for SiteDeck product tours.
//!
//! This crate is UI-framework agnostic. It owns everything a tour carousel
//! decides: which slide is showing, which way the transition runs, when
//! autoplay advances, and when an exit or completion hands control back to
//! the host. The Leptos client renders whatever this crate reports and feeds
//! it keyboard input and clock readings.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`slide`] | Slide descriptors and slide-list validation |
//! | [`controller`] | The navigation state machine ([`controller::Carousel`]) |
//! | [`timeline`] | Deterministic autoplay and exit-delay timers |
//! | [`session`] | Mounted carousel: controller + timeline + exit hooks |
//! | [`keys`] | Keyboard bindings to carousel commands |
//! | [`config`] | Construction-time options |
//! | [`error`] | Construction errors |

pub mod config;
pub mod controller;
pub mod error;
pub mod keys;
pub mod session;
pub mod slide;
pub mod timeline;

pub use config::CarouselConfig;
pub use controller::{Carousel, Direction, ExitKind, Outcome, Phase};
pub use error::CarouselError;
pub use keys::Command;
pub use session::{CarouselSession, ExitHandler, PollReport};
pub use slide::{Background, Slide};
