use chrono::{Duration, TimeZone};

use super::*;

fn clock_at(offset_hours: i32) -> FixedClock {
    FixedClock {
        now: Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap(),
        offset: FixedOffset::east_opt(offset_hours * 3600).unwrap(),
    }
}

/// Zone with a one-hour gap at 02:00 local on 2025-03-30 (like CET -> CEST).
struct GapClock;

impl Clock for GapClock {
    fn now(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 30, 0, 0, 0).unwrap()
    }

    fn offset_at(&self, _instant: DateTime<Utc>) -> FixedOffset {
        FixedOffset::east_opt(3600).unwrap()
    }

    fn offset_for_local(&self, local: NaiveDateTime) -> Option<FixedOffset> {
        let gap_start = NaiveDateTime::parse_from_str("2025-03-30T02:00", LOCAL_INPUT_FORMAT).unwrap();
        if local >= gap_start && local < gap_start + Duration::hours(1) {
            None
        } else {
            Some(FixedOffset::east_opt(3600).unwrap())
        }
    }
}

// =============================================================
// UTC -> local
// =============================================================

#[test]
fn local_input_shifts_by_offset() {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 22, 15, 0).unwrap();
    assert_eq!(to_local_input(at, &clock_at(0)), "2025-06-01T22:15");
    assert_eq!(to_local_input(at, &clock_at(3)), "2025-06-02T01:15");
    assert_eq!(to_local_input(at, &clock_at(-5)), "2025-06-01T17:15");
}

#[test]
fn local_input_truncates_seconds() {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 59).unwrap();
    assert_eq!(to_local_input(at, &clock_at(0)), "2025-06-01T08:30");
}

#[test]
fn local_label_uses_space_separator() {
    let at = Utc.with_ymd_and_hms(2025, 6, 1, 8, 30, 0).unwrap();
    assert_eq!(to_local_label(at, &clock_at(1)), "2025-06-01 09:30");
}

// =============================================================
// local -> UTC
// =============================================================

#[test]
fn empty_input_means_no_deadline() {
    assert_eq!(from_local_input("", &clock_at(2)), Ok(None));
    assert_eq!(from_local_input("   ", &clock_at(2)), Ok(None));
}

#[test]
fn local_input_converts_back_to_utc() {
    let parsed = from_local_input("2025-06-02T01:15", &clock_at(3)).unwrap();
    assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 6, 1, 22, 15, 0).unwrap()));
}

#[test]
fn local_input_with_seconds_is_accepted() {
    let parsed = from_local_input("2025-06-01T10:00:30", &clock_at(0)).unwrap();
    assert_eq!(parsed, Some(Utc.with_ymd_and_hms(2025, 6, 1, 10, 0, 30).unwrap()));
}

#[test]
fn round_trip_preserves_minute_precision_instant() {
    let clock = clock_at(-7);
    let at = Utc.with_ymd_and_hms(2025, 12, 31, 23, 59, 0).unwrap();
    let text = to_local_input(at, &clock);
    assert_eq!(from_local_input(&text, &clock), Ok(Some(at)));
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(
        from_local_input("tomorrow", &clock_at(0)),
        Err(DeadlineError::Malformed("tomorrow".to_owned()))
    );
}

#[test]
fn time_in_dst_gap_is_rejected() {
    assert_eq!(
        from_local_input("2025-03-30T02:30", &GapClock),
        Err(DeadlineError::NonexistentLocalTime("2025-03-30T02:30".to_owned()))
    );
    assert!(from_local_input("2025-03-30T03:30", &GapClock).unwrap().is_some());
}

#[test]
fn fixed_clock_reports_its_instant() {
    let clock = FixedClock::utc(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(clock.offset_at(clock.now()), Utc.fix());
}
