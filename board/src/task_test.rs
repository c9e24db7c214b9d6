use chrono::TimeZone;
use serde_json::json;

use super::*;

// =============================================================
// Task deserialization
// =============================================================

#[test]
fn task_accepts_integer_completion_flag() {
    let task: Task = serde_json::from_value(json!({
        "id": 7,
        "content": "Buy milk",
        "is_completed": 1,
        "deadline": null,
        "position": 3
    }))
    .unwrap();
    assert_eq!(task.id, TaskId(7));
    assert!(task.is_completed);
    assert_eq!(task.deadline, None);
    assert_eq!(task.position, Some(3));
}

#[test]
fn task_accepts_boolean_completion_flag() {
    let task: Task = serde_json::from_value(json!({
        "id": 1,
        "content": "x",
        "is_completed": false
    }))
    .unwrap();
    assert!(!task.is_completed);
    assert_eq!(task.position, None);
}

#[test]
fn task_rejects_string_completion_flag() {
    let result: Result<Task, _> = serde_json::from_value(json!({
        "id": 1,
        "content": "x",
        "is_completed": "yes"
    }));
    assert!(result.is_err());
}

#[test]
fn task_parses_rfc3339_deadline() {
    let task: Task = serde_json::from_value(json!({
        "id": 2,
        "content": "x",
        "is_completed": 0,
        "deadline": "2025-03-01T12:30:00.000Z"
    }))
    .unwrap();
    assert_eq!(task.deadline, Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap()));
}

#[test]
fn task_normalizes_offset_deadline_to_utc() {
    let task: Task = serde_json::from_value(json!({
        "id": 2,
        "content": "x",
        "deadline": "2025-03-01T14:30:00+02:00"
    }))
    .unwrap();
    assert_eq!(task.deadline, Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap()));
}

#[test]
fn task_treats_naive_deadline_as_utc() {
    let task: Task = serde_json::from_value(json!({
        "id": 2,
        "content": "x",
        "deadline": "2025-03-01 12:30:00"
    }))
    .unwrap();
    assert_eq!(task.deadline, Some(Utc.with_ymd_and_hms(2025, 3, 1, 12, 30, 0).unwrap()));
}

#[test]
fn task_treats_empty_deadline_as_none() {
    let task: Task = serde_json::from_value(json!({ "id": 2, "content": "x", "deadline": "" })).unwrap();
    assert_eq!(task.deadline, None);
}

#[test]
fn task_rejects_garbage_deadline() {
    let result: Result<Task, _> = serde_json::from_value(json!({ "id": 2, "content": "x", "deadline": "soon" }));
    assert!(result.is_err());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_task_trims_content() {
    let task = NewTask::new("  Buy milk \n", None).unwrap();
    assert_eq!(task.content, "Buy milk");
}

#[test]
fn new_task_rejects_blank_content() {
    assert!(NewTask::new("   \t", None).is_none());
    assert!(NewTask::new("", None).is_none());
}

#[test]
fn new_task_serializes_null_deadline() {
    let body = serde_json::to_value(NewTask::new("a", None).unwrap()).unwrap();
    assert_eq!(body, json!({ "content": "a", "deadline": null }));
}

#[test]
fn completion_patch_sends_only_integer_flag() {
    let body = serde_json::to_value(TaskPatch::completion(true)).unwrap();
    assert_eq!(body, json!({ "is_completed": 1 }));
    let body = serde_json::to_value(TaskPatch::completion(false)).unwrap();
    assert_eq!(body, json!({ "is_completed": 0 }));
}

#[test]
fn deadline_patch_clears_with_explicit_null() {
    let body = serde_json::to_value(TaskPatch::deadline(None)).unwrap();
    assert_eq!(body, json!({ "deadline": null }));
}

#[test]
fn deadline_patch_sends_utc_instant() {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let body = serde_json::to_value(TaskPatch::deadline(Some(at))).unwrap();
    assert_eq!(body, json!({ "deadline": "2025-01-02T03:04:05Z" }));
}

#[test]
fn patch_apply_changes_only_present_fields() {
    let at = Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();
    let mut task = Task { id: TaskId(1), content: "x".into(), is_completed: false, deadline: Some(at), position: None };
    TaskPatch::completion(true).apply_to(&mut task);
    assert!(task.is_completed);
    assert_eq!(task.deadline, Some(at));
    TaskPatch::deadline(None).apply_to(&mut task);
    assert!(task.is_completed);
    assert_eq!(task.deadline, None);
}

#[test]
fn reorder_request_serializes_ids_in_order() {
    let body = serde_json::to_value(ReorderRequest { ordered_ids: vec![TaskId(3), TaskId(1), TaskId(2)] }).unwrap();
    assert_eq!(body, json!({ "ordered_ids": [3, 1, 2] }));
}

#[test]
fn task_id_parses_from_dataset_text() {
    assert_eq!(" 42 ".parse::<TaskId>().unwrap(), TaskId(42));
    assert!("abc".parse::<TaskId>().is_err());
    assert_eq!(TaskId(42).to_string(), "42");
}
