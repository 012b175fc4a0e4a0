//! A mounted carousel: controller, timers and exit hooks.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host creates a session when a tour mounts, forwards user input and
//! clock readings into it, and calls [`CarouselSession::unmount`] on
//! teardown. Exit and completion navigation are never performed here; a
//! [`PollReport`] names the terminal action and the host dispatches it to
//! its own [`ExitHandler`] outside any state borrow.
//!
//! LIFECYCLE
//! =========
//! `mount` -> (navigate | poll)* -> `unmount`. After unmount every method is
//! a no-op, so a stale timer callback that still reaches the session cannot
//! change state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::CarouselConfig;
use crate::controller::{Carousel, ExitKind, Outcome};
use crate::error::CarouselError;
use crate::keys::{Command, command_for_key};
use crate::slide::Slide;
use crate::timeline::{Due, Timeline};

/// Navigation hooks injected by the host.
pub trait ExitHandler {
    /// Runs before `navigate_to_destination` when a tour completes.
    fn on_complete(&mut self) {}
    /// Leave the tour early (back to the previous context).
    fn navigate_away(&mut self);
    /// Continue to the product area the tour introduced.
    fn navigate_to_destination(&mut self);
}

/// What a poll changed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PollReport {
    /// Autoplay advances applied during this poll.
    pub advanced: usize,
    /// Set exactly once per session, when the transition-out delay elapses.
    pub finished: Option<ExitKind>,
}

impl PollReport {
    /// Run the host hooks for a finished session.
    pub fn dispatch<H: ExitHandler + ?Sized>(&self, handler: &mut H) {
        match self.finished {
            Some(ExitKind::Complete) => {
                handler.on_complete();
                handler.navigate_to_destination();
            }
            Some(ExitKind::Exit) => handler.navigate_away(),
            None => {}
        }
    }
}

#[derive(Clone, Debug)]
pub struct CarouselSession<C> {
    carousel: Carousel<C>,
    timeline: Timeline,
    config: CarouselConfig,
    mounted: bool,
    finished: bool,
}

impl<C> CarouselSession<C> {
    /// Mount a carousel at `now_ms`.
    ///
    /// # Errors
    ///
    /// Propagates slide-list validation failures from [`Carousel::new`].
    pub fn mount(slides: Vec<Slide<C>>, config: CarouselConfig, now_ms: u64) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(slides, config.autoplay)?;
        let interval = config.autoplay.then(|| config.effective_interval_ms());
        let mut timeline = Timeline::new(interval, now_ms);
        if carousel.is_last() {
            timeline.stop_autoplay();
        }
        log::debug!("carousel mounted: slides={} autoplay={}", carousel.len(), config.autoplay);
        Ok(Self { carousel, timeline, config, mounted: true, finished: false })
    }

    #[must_use]
    pub fn carousel(&self) -> &Carousel<C> {
        &self.carousel
    }

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Autoplay is configured, not paused, and still has slides to show.
    #[must_use]
    pub fn is_autoplaying(&self) -> bool {
        self.timeline.autoplay_armed()
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.timeline.is_paused()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timeline.next_deadline()
    }

    // =========================================================================
    // USER INPUT
    // =========================================================================

    pub fn next(&mut self, now_ms: u64) -> Outcome {
        self.run(Command::Next, now_ms)
    }

    pub fn previous(&mut self, now_ms: u64) -> Outcome {
        self.run(Command::Previous, now_ms)
    }

    pub fn select(&mut self, index: usize, now_ms: u64) -> Outcome {
        if !self.mounted {
            return Outcome::Ignored;
        }
        let outcome = self.carousel.select(index);
        self.after_input(outcome, now_ms);
        outcome
    }

    pub fn exit(&mut self, now_ms: u64) -> Outcome {
        self.run(Command::Exit, now_ms)
    }

    pub fn complete(&mut self, now_ms: u64) -> Outcome {
        self.run(Command::Complete, now_ms)
    }

    /// Route a DOM key name through the bindings. `None` for unbound keys.
    pub fn handle_key(&mut self, key: &str, now_ms: u64) -> Option<Outcome> {
        command_for_key(key).map(|command| self.run(command, now_ms))
    }

    pub fn run(&mut self, command: Command, now_ms: u64) -> Outcome {
        if !self.mounted {
            return Outcome::Ignored;
        }
        let outcome = self.carousel.apply(command);
        self.after_input(outcome, now_ms);
        outcome
    }

    /// Whether the pause/play control does anything right now. False on the
    /// last slide unless paused, since autoplay has already stopped there.
    #[must_use]
    pub fn can_toggle_autoplay(&self) -> bool {
        self.mounted
            && self.config.autoplay
            && !self.carousel.is_exiting()
            && (self.timeline.is_paused() || self.timeline.autoplay_armed())
    }

    /// Pause or resume autoplay. Returns whether autoplay is running after
    /// the toggle.
    pub fn toggle_autoplay(&mut self, now_ms: u64) -> bool {
        if !self.can_toggle_autoplay() {
            return self.is_autoplaying();
        }
        if self.timeline.is_paused() {
            self.timeline.resume(now_ms);
            if self.carousel.is_last() {
                self.timeline.stop_autoplay();
            }
        } else {
            self.timeline.pause();
        }
        self.is_autoplaying()
    }

    // =========================================================================
    // TIME
    // =========================================================================

    /// Apply every timer due at `now_ms`.
    pub fn poll(&mut self, now_ms: u64) -> PollReport {
        let mut report = PollReport::default();
        if !self.mounted {
            return report;
        }
        while let Some(due) = self.timeline.take_due(now_ms) {
            match due {
                Due::Autoplay => {
                    if matches!(self.carousel.autoplay_tick(), Outcome::Moved { .. }) {
                        report.advanced += 1;
                    }
                    if self.carousel.is_last() || self.carousel.is_exiting() {
                        self.timeline.stop_autoplay();
                    }
                }
                Due::Exit(kind) => {
                    if !self.finished {
                        self.finished = true;
                        report.finished = Some(kind);
                        log::debug!("carousel finished: kind={kind:?}");
                    }
                }
            }
        }
        report
    }

    /// Tear down: cancel every timer and refuse further input.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;
        self.timeline.cancel();
        log::debug!("carousel unmounted at index {}", self.carousel.index());
    }

    fn after_input(&mut self, outcome: Outcome, now_ms: u64) {
        match outcome {
            Outcome::Moved { .. } => {
                if self.carousel.is_last() {
                    self.timeline.stop_autoplay();
                } else {
                    self.timeline.restart_autoplay(now_ms);
                }
            }
            Outcome::Exiting(kind) => {
                self.timeline.stop_autoplay();
                self.timeline
                    .schedule_exit(kind, now_ms, u64::from(self.config.transition_out_ms));
            }
            Outcome::Ignored => {}
        }
    }
}
