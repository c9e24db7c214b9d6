//! Typed client configuration.
//!
//! The web client reads these values from `<meta name="clarity-board:*">`
//! tags; anything absent keeps its default. Parsing goes through a plain key
//! lookup so the rules are testable without a document.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use log::LevelFilter;

pub const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_CLOCK_INTERVAL_SECS: u64 = 1;
pub const DEFAULT_MAX_NOTICES: usize = 5;

pub const KEY_API_BASE: &str = "api-base";
pub const KEY_SWEEP_SECS: &str = "sweep-secs";
pub const KEY_CLOCK_SECS: &str = "clock-secs";
pub const KEY_MAX_NOTICES: &str = "max-notices";
pub const KEY_LOG_LEVEL: &str = "log-level";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must be one of off/error/warn/info/debug/trace, got {value:?}")]
    InvalidLogLevel { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Prefix for every REST path. Empty means same origin.
    pub api_base: String,
    /// Interval between urgency sweeps.
    pub sweep_interval_secs: u64,
    /// Interval between clock ticks.
    pub clock_interval_secs: u64,
    /// Notices kept on screen before the oldest is dropped.
    pub max_notices: usize,
    pub log_level: LevelFilter,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            clock_interval_secs: DEFAULT_CLOCK_INTERVAL_SECS,
            max_notices: DEFAULT_MAX_NOTICES,
            log_level: LevelFilter::Info,
        }
    }
}

impl BoardConfig {
    /// Build config from a key lookup.
    ///
    /// Optional keys (all unprefixed):
    /// - `api-base`: REST prefix, trailing `/` removed (default empty)
    /// - `sweep-secs`: default 60
    /// - `clock-secs`: default 1
    /// - `max-notices`: default 5
    /// - `log-level`: default `info`
    ///
    /// # Errors
    ///
    /// Returns the first value that fails to parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let api_base = lookup(KEY_API_BASE)
            .map(|base| base.trim().trim_end_matches('/').to_owned())
            .unwrap_or(defaults.api_base);
        let sweep_interval_secs = parse_positive(KEY_SWEEP_SECS, lookup(KEY_SWEEP_SECS), defaults.sweep_interval_secs)?;
        let clock_interval_secs = parse_positive(KEY_CLOCK_SECS, lookup(KEY_CLOCK_SECS), defaults.clock_interval_secs)?;
        let max_notices = parse_positive(KEY_MAX_NOTICES, lookup(KEY_MAX_NOTICES), defaults.max_notices)?;
        let log_level = parse_log_level(lookup(KEY_LOG_LEVEL), defaults.log_level)?;
        Ok(Self { api_base, sweep_interval_secs, clock_interval_secs, max_notices, log_level })
    }
}

fn parse_positive<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => Ok(value),
        _ => Err(ConfigError::InvalidNumber { key, value: raw }),
    }
}

fn parse_log_level(raw: Option<String>, default: LevelFilter) -> Result<LevelFilter, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<LevelFilter>()
        .map_err(|_| ConfigError::InvalidLogLevel { key: KEY_LOG_LEVEL, value: raw })
}
