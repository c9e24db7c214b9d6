//! Task wire model shared with the REST backend.
//!
//! DESIGN
//! ======
//! The backend is lenient about representation (`is_completed` arrives as a
//! SQLite integer or a JSON boolean, deadlines may lack an offset), so the
//! deserializers here accept every shape the contract allows while the
//! serializers always emit the canonical form.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Backend-assigned task identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A task as returned by `GET /api/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    #[serde(default, deserialize_with = "deserialize_flag", serialize_with = "serialize_flag")]
    pub is_completed: bool,
    /// Absolute deadline; `None` means the task never becomes urgent.
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub deadline: Option<DateTime<Utc>>,
    /// Rank reported by the backend. Only meaningful in manual order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
}

/// Body of `POST /api/tasks`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewTask {
    pub content: String,
    pub deadline: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Build a create request, trimming `content`.
    ///
    /// Returns `None` when nothing but whitespace was entered.
    #[must_use]
    pub fn new(content: &str, deadline: Option<DateTime<Utc>>) -> Option<Self> {
        let content = content.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self { content: content.to_owned(), deadline })
    }
}

/// Body of `PUT /api/tasks/{id}`. Only the fields that changed are sent.
///
/// `deadline: Some(None)` serializes as an explicit `null` and clears the
/// deadline; `deadline: None` omits the field and leaves it unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "serialize_optional_flag")]
    pub is_completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<DateTime<Utc>>>,
}

impl TaskPatch {
    #[must_use]
    pub fn completion(done: bool) -> Self {
        Self { is_completed: Some(done), ..Self::default() }
    }

    #[must_use]
    pub fn deadline(deadline: Option<DateTime<Utc>>) -> Self {
        Self { deadline: Some(deadline), ..Self::default() }
    }

    /// Apply the changed fields to a cached task.
    #[cfg(test)]
    pub(crate) fn apply_to(&self, task: &mut Task) {
        if let Some(done) = self.is_completed {
            task.is_completed = done;
        }
        if let Some(deadline) = self.deadline {
            task.deadline = deadline;
        }
    }
}

/// Body of `POST /api/tasks/reorder`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderRequest {
    pub ordered_ids: Vec<TaskId>,
}

fn serialize_flag<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_u8(u8::from(*value))
}

#[allow(clippy::ref_option)]
fn serialize_optional_flag<S>(value: &Option<bool>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(flag) => serialize_flag(flag, serializer),
        None => serializer.serialize_none(),
    }
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::Null => Ok(false),
        serde_json::Value::Number(number) => match number.as_i64() {
            Some(int) => Ok(int != 0),
            None => Err(D::Error::custom("expected integer flag")),
        },
        _ => Err(D::Error::custom("expected boolean or 0/1")),
    }
}

fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => parse_wire_instant(text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid deadline: {text}"))),
    }
}

/// Parse an ISO-8601 instant from the wire. Values without an offset are UTC.
#[must_use]
pub fn parse_wire_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return Some(instant.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, fmt) {
            return Some(naive.and_utc());
        }
    }
    None
}
