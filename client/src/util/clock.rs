//! Wall-clock readings for carousel timers and the workspace "today".
//!
//! Only this module reads the clock or the browser time zone. Everything
//! downstream takes milliseconds, a `UtcOffset` or a `Date` as arguments.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use time::{Date, OffsetDateTime, UtcOffset};

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        ms_from_f64(js_sys::Date::now())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
    }
}

/// The browser's current UTC offset. UTC during server rendering.
pub fn local_offset() -> UtcOffset {
    #[cfg(feature = "hydrate")]
    {
        // getTimezoneOffset is minutes *behind* UTC.
        let minutes = js_sys::Date::new_0().get_timezone_offset();
        offset_from_js_minutes(minutes)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        UtcOffset::UTC
    }
}

/// Calendar date at `offset` for the instant `ms`.
#[must_use]
pub fn today_from_ms(ms: u64, offset: UtcOffset) -> Date {
    let instant = OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    records::dates::today_at_offset(instant, offset)
}

/// Convert a `getTimezoneOffset()` reading into a `UtcOffset`.
#[must_use]
pub fn offset_from_js_minutes(minutes: f64) -> UtcOffset {
    #[allow(clippy::cast_possible_truncation)]
    let seconds = (-minutes * 60.0).round() as i32;
    UtcOffset::from_whole_seconds(seconds).unwrap_or(UtcOffset::UTC)
}

#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ms_from_f64(ms: f64) -> u64 {
    if ms.is_finite() && ms > 0.0 { ms as u64 } else { 0 }
}
