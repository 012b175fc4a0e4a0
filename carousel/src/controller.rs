//! Slide navigation state machine.
//!
//! DESIGN
//! ======
//! Two phases: `Idle` (navigable, with a current index) and `Exiting`
//! (terminal). Every trigger is guarded and reports what it did as an
//! [`Outcome`]; a failed guard is `Outcome::Ignored`, never an error.
//!
//! The controller has no notion of time. Autoplay periods and the
//! transition-out delay live in [`crate::timeline`] and are combined with
//! this state machine by [`crate::session`].

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::{Deserialize, Serialize};

use crate::error::CarouselError;
use crate::keys::Command;
use crate::slide::{Slide, validate};

/// Direction of travel of the last move. Only selects the entry animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    None,
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        match to.cmp(&from) {
            std::cmp::Ordering::Greater => Self::Forward,
            std::cmp::Ordering::Less => Self::Backward,
            std::cmp::Ordering::Equal => Self::None,
        }
    }

    /// CSS modifier class for the entering slide.
    #[must_use]
    pub fn enter_class(self) -> &'static str {
        match self {
            Self::None => "slide--enter-fade",
            Self::Forward => "slide--enter-right",
            Self::Backward => "slide--enter-left",
        }
    }
}

/// Which terminal action ended the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitKind {
    /// User left the tour early.
    Exit,
    /// User finished the tour from a final slide.
    Complete,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Exiting(ExitKind),
}

/// Result of a trigger.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved { from: usize, to: usize, direction: Direction },
    Exiting(ExitKind),
    Ignored,
}

impl Outcome {
    #[must_use]
    pub fn is_ignored(self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Navigable, non-empty sequence of slides.
#[derive(Clone, Debug)]
pub struct Carousel<C> {
    slides: Vec<Slide<C>>,
    index: usize,
    direction: Direction,
    phase: Phase,
    autoplay: bool,
}

impl<C> Carousel<C> {
    /// Build a carousel positioned on the first slide.
    ///
    /// # Errors
    ///
    /// Fails when `slides` is empty or repeats an id.
    pub fn new(slides: Vec<Slide<C>>, autoplay: bool) -> Result<Self, CarouselError> {
        validate(&slides)?;
        Ok(Self { slides, index: 0, direction: Direction::None, phase: Phase::Idle, autoplay })
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always `false`; construction rejects empty lists.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_exiting(&self) -> bool {
        matches!(self.phase, Phase::Exiting(_))
    }

    #[must_use]
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide<C>] {
        &self.slides
    }

    #[must_use]
    pub fn slide(&self, index: usize) -> Option<&Slide<C>> {
        self.slides.get(index)
    }

    #[must_use]
    pub fn current_slide(&self) -> &Slide<C> {
        &self.slides[self.index]
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.slides.len()
    }

    /// `complete()` would succeed right now.
    #[must_use]
    pub fn can_complete(&self) -> bool {
        !self.is_exiting() && self.current_slide().is_final
    }

    /// Fraction of the tour reached, in `(0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        (self.index + 1) as f64 / self.slides.len() as f64
    }

    /// One-based position, e.g. `"3 / 10"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.slides.len())
    }

    // =========================================================================
    // TRIGGERS
    // =========================================================================

    pub fn next(&mut self) -> Outcome {
        if self.is_last() {
            return Outcome::Ignored;
        }
        self.move_to(self.index + 1)
    }

    pub fn previous(&mut self) -> Outcome {
        if self.is_first() {
            return Outcome::Ignored;
        }
        self.move_to(self.index - 1)
    }

    /// Jump to `index`. Out-of-range and same-slide selections are ignored.
    pub fn select(&mut self, index: usize) -> Outcome {
        if index >= self.slides.len() {
            return Outcome::Ignored;
        }
        self.move_to(index)
    }

    pub fn first(&mut self) -> Outcome {
        self.move_to(0)
    }

    pub fn last(&mut self) -> Outcome {
        self.move_to(self.slides.len() - 1)
    }

    /// Timer-driven advance. Same as [`Self::next`] but only when autoplay
    /// was enabled at construction.
    pub fn autoplay_tick(&mut self) -> Outcome {
        if !self.autoplay {
            return Outcome::Ignored;
        }
        self.next()
    }

    pub fn exit(&mut self) -> Outcome {
        self.begin_exit(ExitKind::Exit)
    }

    /// Finish the tour. Only allowed on a final slide.
    pub fn complete(&mut self) -> Outcome {
        if !self.current_slide().is_final {
            return Outcome::Ignored;
        }
        self.begin_exit(ExitKind::Complete)
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Previous => self.previous(),
            Command::Next => self.next(),
            Command::First => self.first(),
            Command::Last => self.last(),
            Command::Exit => self.exit(),
            Command::Complete => self.complete(),
        }
    }

    fn move_to(&mut self, to: usize) -> Outcome {
        if self.is_exiting() || to == self.index {
            return Outcome::Ignored;
        }
        let from = self.index;
        let direction = Direction::between(from, to);
        self.index = to;
        self.direction = direction;
        Outcome::Moved { from, to, direction }
    }

    fn begin_exit(&mut self, kind: ExitKind) -> Outcome {
        if self.is_exiting() {
            return Outcome::Ignored;
        }
        log::debug!("carousel exiting: kind={kind:?} index={}", self.index);
        self.phase = Phase::Exiting(kind);
        Outcome::Exiting(kind)
    }
}
