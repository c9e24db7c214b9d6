//! Client-local settings (the warning threshold).
//!
//! The threshold is stored as a string-encoded number under a fixed key so it
//! survives reloads. The browser backs [`SettingsStore`] with `localStorage`;
//! tests use [`MemorySettings`].

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key for the warning threshold.
pub const WARNING_HOURS_KEY: &str = "clarity_board_warning_hours";

/// Threshold used when nothing (or garbage) is stored.
pub const DEFAULT_WARNING_HOURS: f64 = 24.0;

/// String key/value persistence that outlives the session.
pub trait SettingsStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
}

/// In-memory [`SettingsStore`].
#[derive(Debug, Default)]
pub struct MemorySettings {
    values: RefCell<HashMap<String, String>>,
}

impl MemorySettings {
    #[must_use]
    pub fn with(key: &str, value: &str) -> Self {
        let settings = Self::default();
        settings.save(key, value);
        settings
    }
}

impl SettingsStore for MemorySettings {
    fn load(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("warning hours must be a number, got {0:?}")]
    NotANumber(String),
    #[error("warning hours must be zero or more, got {0}")]
    Negative(String),
}

/// Parse a user-entered threshold.
///
/// # Errors
///
/// Rejects non-numeric, non-finite, and negative values.
pub fn parse_warning_hours(raw: &str) -> Result<f64, SettingsError> {
    let trimmed = raw.trim();
    let hours: f64 = trimmed.parse().map_err(|_| SettingsError::NotANumber(trimmed.to_owned()))?;
    if !hours.is_finite() {
        return Err(SettingsError::NotANumber(trimmed.to_owned()));
    }
    if hours < 0.0 {
        return Err(SettingsError::Negative(trimmed.to_owned()));
    }
    Ok(hours)
}

/// Read the stored threshold, falling back to [`DEFAULT_WARNING_HOURS`].
pub fn load_warning_hours(store: &impl SettingsStore) -> f64 {
    match store.load(WARNING_HOURS_KEY) {
        Some(raw) => match parse_warning_hours(&raw) {
            Ok(hours) => hours,
            Err(err) => {
                log::warn!("ignoring stored warning hours: {err}");
                DEFAULT_WARNING_HOURS
            }
        },
        None => DEFAULT_WARNING_HOURS,
    }
}

/// Persist the threshold in its string-encoded form.
pub fn save_warning_hours(store: &impl SettingsStore, hours: f64) {
    store.save(WARNING_HOURS_KEY, &format_hours(hours));
}

/// Shortest decimal text for `hours` (`24`, not `24.0`).
#[must_use]
pub fn format_hours(hours: f64) -> String {
    if hours.fract() == 0.0 && hours.abs() < 1e15 {
        format!("{hours:.0}")
    } else {
        hours.to_string()
    }
}
