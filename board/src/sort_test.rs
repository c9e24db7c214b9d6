use chrono::{TimeZone, Utc};

use super::*;
use crate::task::TaskId;

fn task(id: i64, deadline_hour: Option<u32>) -> Task {
    Task {
        id: TaskId(id),
        content: format!("task {id}"),
        is_completed: false,
        deadline: deadline_hour.map(|h| Utc.with_ymd_and_hms(2025, 6, 1, h, 0, 0).unwrap()),
        position: Some(id),
    }
}

fn ids(tasks: &[Task]) -> Vec<i64> {
    tasks.iter().map(|t| t.id.0).collect()
}

#[test]
fn default_mode_is_manual() {
    assert_eq!(SortMode::default(), SortMode::Manual);
}

#[test]
fn query_values_match_backend_contract() {
    assert_eq!(SortMode::Manual.query_value(), "position");
    assert_eq!(SortMode::Deadline.query_value(), "deadline");
}

#[test]
fn only_manual_mode_allows_drag() {
    assert!(SortMode::Manual.allows_drag());
    assert!(!SortMode::Deadline.allows_drag());
}

#[test]
fn toggled_flips_mode() {
    assert_eq!(SortMode::Manual.toggled(), SortMode::Deadline);
    assert_eq!(SortMode::Deadline.toggled(), SortMode::Manual);
}

#[test]
fn manual_arrange_keeps_response_order() {
    let mut tasks = vec![task(3, Some(9)), task(1, None), task(2, Some(1))];
    SortMode::Manual.arrange(&mut tasks);
    assert_eq!(ids(&tasks), vec![3, 1, 2]);
}

#[test]
fn deadline_arrange_sorts_ascending_with_nulls_last() {
    let mut tasks = vec![task(1, None), task(2, Some(9)), task(3, Some(1)), task(4, None), task(5, Some(5))];
    SortMode::Deadline.arrange(&mut tasks);
    assert_eq!(ids(&tasks), vec![3, 5, 2, 1, 4]);
}

#[test]
fn deadline_arrange_is_stable_for_equal_deadlines() {
    let mut tasks = vec![task(7, Some(4)), task(2, Some(4)), task(5, Some(4))];
    SortMode::Deadline.arrange(&mut tasks);
    assert_eq!(ids(&tasks), vec![7, 2, 5]);
}
