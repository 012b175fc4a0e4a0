#![cfg(not(feature = "hydrate"))]

use super::*;
use time::macros::{date, offset};

// 2026-10-20T02:00:00Z
const LATE_EVENING_US: u64 = 1_792_461_600_000;

#[test]
fn host_date_wins_over_the_clock() {
    let today = resolve_today(Some(date!(2026 - 10 - 20)), LATE_EVENING_US, offset!(-5));
    assert_eq!(today, date!(2026 - 10 - 20));
}

#[test]
fn clock_fallback_uses_the_offset() {
    assert_eq!(resolve_today(None, LATE_EVENING_US, UtcOffset::UTC), date!(2026 - 10 - 20));
    assert_eq!(resolve_today(None, LATE_EVENING_US, offset!(-5)), date!(2026 - 10 - 19));
}

#[test]
fn today_meta_parses_iso_only() {
    assert_eq!(parse_today_meta("2026-10-20"), Some(date!(2026 - 10 - 20)));
    assert_eq!(parse_today_meta(" 2026-10-20 "), Some(date!(2026 - 10 - 20)));
    assert_eq!(parse_today_meta("10/20/2026"), None);
    assert_eq!(parse_today_meta(""), None);
}

#[test]
fn initial_today_reads_the_host_context() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(HostToday(date!(2031 - 01 - 02)));
        assert_eq!(initial_today(), date!(2031 - 01 - 02));
    });
}

#[test]
fn initial_today_without_host_falls_back_to_the_clock() {
    let owner = Owner::new();
    let today = owner.with(initial_today);
    let expected = clock::today_from_ms(clock::now_ms(), UtcOffset::UTC);
    // The day can roll over between the two readings.
    assert!(today == expected || today.next_day() == Some(expected));
}
