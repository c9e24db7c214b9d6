//! Conversion between UTC instants and `<input type="datetime-local">` values.
//!
//! SYSTEM CONTEXT
//! ==============
//! Deadlines travel as UTC but are edited as local wall-clock text. The
//! [`Clock`] seam supplies both the current instant and the local offset rules
//! so conversions are testable with a fixed zone.

#[cfg(test)]
#[path = "localtime_test.rs"]
mod localtime_test;

use chrono::{DateTime, FixedOffset, Local, NaiveDateTime, Offset, TimeZone, Utc};

/// Format produced for `datetime-local` inputs (minute precision).
pub const LOCAL_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Format used for the static deadline label on a note.
pub const LOCAL_LABEL_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Source of the current instant and the local time zone rules.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Local UTC offset in effect at `instant`.
    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset;

    /// Offset for a local wall-clock time, or `None` if that time does not
    /// exist locally (DST gap). Ambiguous times resolve to the earlier one.
    fn offset_for_local(&self, local: NaiveDateTime) -> Option<FixedOffset>;
}

/// Wall clock and time zone of the host (the browser when built for WASM).
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn offset_at(&self, instant: DateTime<Utc>) -> FixedOffset {
        Local.offset_from_utc_datetime(&instant.naive_utc()).fix()
    }

    fn offset_for_local(&self, local: NaiveDateTime) -> Option<FixedOffset> {
        Local.offset_from_local_datetime(&local).earliest().map(|offset| offset.fix())
    }
}

/// Clock frozen at one instant in one fixed-offset zone.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock {
    pub now: DateTime<Utc>,
    pub offset: FixedOffset,
}

impl FixedClock {
    #[must_use]
    pub fn utc(now: DateTime<Utc>) -> Self {
        Self { now, offset: Utc.fix() }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn offset_at(&self, _instant: DateTime<Utc>) -> FixedOffset {
        self.offset
    }

    fn offset_for_local(&self, _local: NaiveDateTime) -> Option<FixedOffset> {
        Some(self.offset)
    }
}

/// Error converting a local input value back to an instant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeadlineError {
    #[error("unrecognized date-time: {0}")]
    Malformed(String),
    #[error("{0} does not exist in the local time zone")]
    NonexistentLocalTime(String),
}

/// Render an instant as a `datetime-local` input value in local time.
pub fn to_local_input(instant: DateTime<Utc>, clock: &impl Clock) -> String {
    format_local(instant, clock, LOCAL_INPUT_FORMAT)
}

/// Render an instant as a human-readable local label.
pub fn to_local_label(instant: DateTime<Utc>, clock: &impl Clock) -> String {
    format_local(instant, clock, LOCAL_LABEL_FORMAT)
}

fn format_local(instant: DateTime<Utc>, clock: &impl Clock, fmt: &str) -> String {
    instant.with_timezone(&clock.offset_at(instant)).format(fmt).to_string()
}

/// Parse a `datetime-local` value into a UTC instant.
///
/// An empty (or whitespace) value means "no deadline".
///
/// # Errors
///
/// Returns [`DeadlineError::Malformed`] for text that is not a local
/// date-time and [`DeadlineError::NonexistentLocalTime`] for times skipped by
/// a DST transition.
pub fn from_local_input(raw: &str, clock: &impl Clock) -> Result<Option<DateTime<Utc>>, DeadlineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    let naive = parse_naive(raw).ok_or_else(|| DeadlineError::Malformed(raw.to_owned()))?;
    let offset = clock
        .offset_for_local(naive)
        .ok_or_else(|| DeadlineError::NonexistentLocalTime(raw.to_owned()))?;
    match offset.from_local_datetime(&naive).single() {
        Some(local) => Ok(Some(local.with_timezone(&Utc))),
        None => Err(DeadlineError::NonexistentLocalTime(raw.to_owned())),
    }
}

fn parse_naive(raw: &str) -> Option<NaiveDateTime> {
    for fmt in [LOCAL_INPUT_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(naive);
        }
    }
    None
}
