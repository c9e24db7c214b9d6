//! Time-relative warning/overdue classification.
//!
//! Urgency is derived from the task and the current instant on every sweep
//! and never stored, so recomputing is idempotent for a fixed `now`.

#[cfg(test)]
#[path = "urgency_test.rs"]
mod urgency_test;

use chrono::{DateTime, Utc};

use crate::task::Task;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// Visual urgency of a note. `Warning` and `Overdue` are mutually exclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Urgency {
    #[default]
    None,
    Warning,
    Overdue,
}

impl Urgency {
    /// CSS modifier class for the note, if any.
    #[must_use]
    pub fn class_name(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Warning => Some("warning"),
            Self::Overdue => Some("overdue"),
        }
    }
}

/// Fractional hours from `now` until `deadline`; negative once it has passed.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hours_until(deadline: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (deadline - now).num_milliseconds() as f64 / MILLIS_PER_HOUR
}

/// Classify a task against `now` and the warning threshold in hours.
#[must_use]
pub fn classify(task: &Task, now: DateTime<Utc>, warning_hours: f64) -> Urgency {
    if task.is_completed {
        return Urgency::None;
    }
    let Some(deadline) = task.deadline else {
        return Urgency::None;
    };
    let remaining = hours_until(deadline, now);
    if remaining < 0.0 {
        Urgency::Overdue
    } else if remaining <= warning_hours {
        Urgency::Warning
    } else {
        Urgency::None
    }
}
