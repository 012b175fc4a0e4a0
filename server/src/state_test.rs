use super::*;
use time::UtcOffset;
use time::macros::{date, datetime};

#[test]
fn today_uses_configured_offset() {
    let config = Config { utc_offset: UtcOffset::from_hms(-5, 0, 0).unwrap(), ..Config::default() };
    let state = AppState::new(Dataset::default(), DateFormat::Iso, config);
    assert_eq!(state.today_at(datetime!(2025-03-15 02:30 UTC)), date!(2025 - 03 - 14));
}

#[test]
fn today_defaults_to_utc() {
    let state = AppState::new(Dataset::default(), DateFormat::Iso, Config::default());
    assert_eq!(state.today_at(datetime!(2025-03-15 02:30 UTC)), date!(2025 - 03 - 15));
}
