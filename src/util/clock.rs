//! Header clock formatting.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Label shown in the toolbar clock, e.g. `Sun 18 Oct 2026 · 09:05:03`.
pub fn clock_label<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    now.format("%a %d %b %Y · %H:%M:%S").to_string()
}

/// Current local time as a clock label.
pub fn local_clock_label() -> String {
    clock_label(&chrono::Local::now())
}
