//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! dataset is immutable for the life of the process; edits made in the
//! browser stay in the browser.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::Arc;

use records::{DateFormat, Dataset};
use time::{Date, OffsetDateTime};

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    /// Layout of every date in `dataset`.
    pub dates: DateFormat,
    pub config: Config,
}

impl AppState {
    #[must_use]
    pub fn new(dataset: Dataset, dates: DateFormat, config: Config) -> Self {
        Self { dataset: Arc::new(dataset), dates, config }
    }

    /// Calendar date at the configured offset for `now`.
    #[must_use]
    pub fn today_at(&self, now: OffsetDateTime) -> Date {
        records::dates::today_at_offset(now, self.config.utc_offset)
    }

    #[must_use]
    pub fn today(&self) -> Date {
        self.today_at(OffsetDateTime::now_utc())
    }
}
