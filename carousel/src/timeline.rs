//! Deterministic timers for a carousel session.
//!
//! DESIGN
//! ======
//! Timers are deadlines on a caller-supplied millisecond clock rather than
//! real callbacks. The host polls with the current time and receives the
//! events that came due, which keeps every timing rule testable without a
//! browser or a runtime.
//!
//! Two timers exist: the repeating autoplay period and the one-shot
//! transition-out delay that precedes exit/complete navigation. `cancel`
//! disarms both permanently.

#[cfg(test)]
#[path = "timeline_test.rs"]
mod timeline_test;

use crate::controller::ExitKind;

/// A timer that came due.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Due {
    Autoplay,
    Exit(ExitKind),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingExit {
    kind: ExitKind,
    due_ms: u64,
}

#[derive(Clone, Debug, Default)]
pub struct Timeline {
    /// Autoplay period, `None` when autoplay is not configured.
    interval_ms: Option<u64>,
    autoplay_due_ms: Option<u64>,
    paused: bool,
    exit: Option<PendingExit>,
    cancelled: bool,
}

impl Timeline {
    /// Arm autoplay (if `interval_ms` is set) relative to `now_ms`.
    #[must_use]
    pub fn new(interval_ms: Option<u64>, now_ms: u64) -> Self {
        let interval_ms = interval_ms.map(|ms| ms.max(1));
        Self {
            interval_ms,
            autoplay_due_ms: interval_ms.map(|ms| now_ms.saturating_add(ms)),
            paused: false,
            exit: None,
            cancelled: false,
        }
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn autoplay_armed(&self) -> bool {
        self.autoplay_due_ms.is_some()
    }

    #[must_use]
    pub fn exit_pending(&self) -> bool {
        self.exit.is_some()
    }

    /// Start a fresh autoplay period from `now_ms`. No-op when autoplay is
    /// not configured, paused, or cancelled.
    pub fn restart_autoplay(&mut self, now_ms: u64) {
        if self.cancelled || self.paused {
            return;
        }
        if let Some(interval) = self.interval_ms {
            self.autoplay_due_ms = Some(now_ms.saturating_add(interval));
        }
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay_due_ms = None;
    }

    pub fn pause(&mut self) {
        if self.interval_ms.is_none() {
            return;
        }
        self.paused = true;
        self.autoplay_due_ms = None;
    }

    pub fn resume(&mut self, now_ms: u64) {
        if !self.paused {
            return;
        }
        self.paused = false;
        self.restart_autoplay(now_ms);
    }

    /// Schedule the exit navigation. The first scheduled exit wins.
    pub fn schedule_exit(&mut self, kind: ExitKind, now_ms: u64, delay_ms: u64) {
        if self.cancelled || self.exit.is_some() {
            return;
        }
        self.exit = Some(PendingExit { kind, due_ms: now_ms.saturating_add(delay_ms) });
    }

    /// Earliest armed deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        match (self.autoplay_due_ms, self.exit.map(|e| e.due_ms)) {
            (Some(a), Some(e)) => Some(a.min(e)),
            (a, e) => a.or(e),
        }
    }

    /// Pop the earliest timer that is due at `now_ms`.
    ///
    /// An autoplay firing re-arms itself one period later, so calling this in
    /// a loop catches up on periods missed by a late poll.
    pub fn take_due(&mut self, now_ms: u64) -> Option<Due> {
        if self.cancelled {
            return None;
        }
        let exit_due = self.exit.filter(|e| e.due_ms <= now_ms);
        let autoplay_due = self.autoplay_due_ms.filter(|due| *due <= now_ms);

        match (autoplay_due, exit_due) {
            (Some(a), Some(e)) if a < e.due_ms => Some(self.fire_autoplay(a)),
            (_, Some(e)) => {
                self.exit = None;
                Some(Due::Exit(e.kind))
            }
            (Some(a), None) => Some(self.fire_autoplay(a)),
            (None, None) => None,
        }
    }

    /// Disarm every timer for good.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.autoplay_due_ms = None;
        self.exit = None;
    }

    fn fire_autoplay(&mut self, due_ms: u64) -> Due {
        self.autoplay_due_ms = self.interval_ms.map(|interval| due_ms.saturating_add(interval));
        Due::Autoplay
    }
}
