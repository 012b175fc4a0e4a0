//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use time::UtcOffset;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("invalid SITEDECK_UTC_OFFSET_HOURS: {0:?} (expected e.g. -5 or +5:30)")]
    InvalidOffset(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    /// Offset used to decide "today" for due-date summaries.
    pub utc_offset: UtcOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, utc_offset: UtcOffset::UTC }
    }
}

impl Config {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITEDECK_UTC_OFFSET_HOURS`: `-5`, `+1`, `5:30`; default UTC
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = parse_port(std::env::var("PORT").ok().as_deref())?;
        let utc_offset = parse_offset(std::env::var("SITEDECK_UTC_OFFSET_HOURS").ok().as_deref())?;
        Ok(Self { port, utc_offset })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

fn parse_offset(raw: Option<&str>) -> Result<UtcOffset, ConfigError> {
    let value = match raw.map(str::trim) {
        None | Some("") => return Ok(UtcOffset::UTC),
        Some(value) => value,
    };
    let invalid = || ConfigError::InvalidOffset(value.to_owned());

    let (hours, minutes) = value.split_once(':').unwrap_or((value, "0"));
    let hours: i8 = hours.trim_start_matches('+').parse().map_err(|_| invalid())?;
    let minutes: i8 = minutes.parse().map_err(|_| invalid())?;
    if !(0..60).contains(&minutes) {
        return Err(invalid());
    }
    let minutes = if value.starts_with('-') { -minutes } else { minutes };
    UtcOffset::from_hms(hours, minutes, 0).map_err(|_| invalid())
}
