//! Explicit calendar-date parsing.
//!
//! DESIGN
//! ======
//! Record dates are plain strings from the data source. Every parse names
//! its format, and "today" is derived from an explicit UTC offset, so no
//! query or summary depends on the machine locale or time zone.

#[cfg(test)]
#[path = "dates_test.rs"]
mod dates_test;

use serde::{Deserialize, Serialize};
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::error::RecordsError;

/// Textual layout of record dates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateFormat {
    /// `2025-03-14`
    #[default]
    Iso,
    /// `03/14/2025`
    Us,
}

impl DateFormat {
    #[must_use]
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Iso => "YYYY-MM-DD",
            Self::Us => "MM/DD/YYYY",
        }
    }

    /// Parse a date string in this format. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`RecordsError::InvalidDate`] when the text does not match the
    /// format or names an impossible day.
    pub fn parse(self, raw: &str) -> Result<Date, RecordsError> {
        let trimmed = raw.trim();
        let parsed = match self {
            Self::Iso => Date::parse(trimmed, format_description!("[year]-[month]-[day]")),
            Self::Us => Date::parse(trimmed, format_description!("[month]/[day]/[year]")),
        };
        parsed.map_err(|_| RecordsError::InvalidDate { value: raw.to_owned(), expected: self.pattern() })
    }

    /// Render a date back into this format.
    #[must_use]
    pub fn format(self, date: Date) -> String {
        let formatted = match self {
            Self::Iso => date.format(format_description!("[year]-[month]-[day]")),
            Self::Us => date.format(format_description!("[month]/[day]/[year]")),
        };
        formatted.unwrap_or_else(|_| date.to_string())
    }
}

/// Human-readable form used in tables, e.g. `Mar 14, 2025`.
#[must_use]
pub fn display(date: Date) -> String {
    date.format(format_description!("[month repr:short] [day padding:none], [year]"))
        .unwrap_or_else(|_| date.to_string())
}

/// Display a raw record date, falling back to the raw text when it does not
/// parse.
#[must_use]
pub fn display_raw(raw: &str, format: DateFormat) -> String {
    format.parse(raw).map_or_else(|_| raw.to_owned(), display)
}

/// Calendar date at `offset` for the instant `now`.
#[must_use]
pub fn today_at_offset(now: OffsetDateTime, offset: UtcOffset) -> Date {
    now.to_offset(offset).date()
}

/// Whole days from `today` until `due`; negative when overdue.
#[must_use]
pub fn days_until(due: Date, today: Date) -> i64 {
    (due - today).whole_days()
}

/// Short label for a due date relative to `today`.
#[must_use]
pub fn due_label(days: i64) -> String {
    match days {
        0 => "Due today".to_owned(),
        1 => "Due tomorrow".to_owned(),
        d if d > 1 => format!("{d} days left"),
        -1 => "1 day overdue".to_owned(),
        d => format!("{} days overdue", d.unsigned_abs()),
    }
}
