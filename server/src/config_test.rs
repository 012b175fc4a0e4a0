use super::*;

/// # Safety
/// Only `from_env_reads_defaults_then_overrides` touches these variables.
unsafe fn clear_config_env() {
    unsafe {
        std::env::remove_var("PORT");
        std::env::remove_var("SITEDECK_UTC_OFFSET_HOURS");
    }
}

#[test]
fn from_env_reads_defaults_then_overrides() {
    unsafe { clear_config_env() };
    assert_eq!(Config::from_env(), Ok(Config::default()));

    unsafe {
        std::env::set_var("PORT", "8080");
        std::env::set_var("SITEDECK_UTC_OFFSET_HOURS", "-5");
    }

    let cfg = Config::from_env().unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.utc_offset.whole_hours(), -5);

    unsafe { clear_config_env() };
}

#[test]
fn parse_port_rejects_garbage() {
    assert_eq!(parse_port(None), Ok(DEFAULT_PORT));
    assert_eq!(parse_port(Some(" 4000 ")), Ok(4000));
    assert_eq!(parse_port(Some("70000")), Err(ConfigError::InvalidPort("70000".into())));
}

#[test]
fn parse_offset_accepts_hours_and_minutes() {
    assert_eq!(parse_offset(Some("+1")).unwrap().whole_hours(), 1);
    let india = parse_offset(Some("5:30")).unwrap();
    assert_eq!(india.whole_seconds(), 5 * 3600 + 30 * 60);
    let newfoundland = parse_offset(Some("-3:30")).unwrap();
    assert_eq!(newfoundland.whole_seconds(), -(3 * 3600 + 30 * 60));
}

#[test]
fn parse_offset_rejects_out_of_range() {
    assert_eq!(parse_offset(Some("30")), Err(ConfigError::InvalidOffset("30".into())));
    assert_eq!(parse_offset(Some("2:75")), Err(ConfigError::InvalidOffset("2:75".into())));
    assert_eq!(parse_offset(Some("east")), Err(ConfigError::InvalidOffset("east".into())));
}
