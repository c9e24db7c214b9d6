//! REST contract consumed by the board.
//!
//! ARCHITECTURE
//! ============
//! Endpoint paths and error classification live here so they can be tested
//! natively; the web client implements [`TaskApi`] over `gloo-net`.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, non-2xx statuses, and undecodable bodies each map to
//! one [`ApiError`] variant. The controller turns them into notices instead
//! of propagating them to the UI layer.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use crate::sort::SortMode;
use crate::task::{NewTask, Task, TaskId, TaskPatch};
use crate::view::NoticeKind;

/// Errors produced by [`TaskApi`] calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network request failed: {0}")]
    Network(String),
    /// The backend answered 404 for a task.
    #[error("task {id} not found")]
    NotFound { id: TaskId },
    /// The backend answered with another non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// No HTTP transport in this build (native, non-browser).
    #[error("task API is only available in the browser")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-success HTTP status for a request about `id`.
    #[must_use]
    pub fn from_status(status: u16, id: Option<TaskId>) -> Self {
        match (status, id) {
            (404, Some(id)) => Self::NotFound { id },
            _ => Self::Status { status },
        }
    }

    /// Notice category shown to the user.
    #[must_use]
    pub fn notice_kind(&self) -> NoticeKind {
        match self {
            Self::NotFound { .. } => NoticeKind::NotFound,
            Self::Network(_) | Self::Status { .. } | Self::Decode(_) | Self::Unavailable => NoticeKind::NetworkFailure,
        }
    }
}

/// Backend operations the board needs.
#[async_trait(?Send)]
pub trait TaskApi {
    /// `GET /api/tasks?sort=...`
    async fn list(&self, sort: SortMode) -> Result<Vec<Task>, ApiError>;
    /// `POST /api/tasks`
    async fn create(&self, task: &NewTask) -> Result<Task, ApiError>;
    /// `PUT /api/tasks/{id}` with only the changed fields.
    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<(), ApiError>;
    /// `DELETE /api/tasks/{id}`
    async fn delete(&self, id: TaskId) -> Result<(), ApiError>;
    /// `POST /api/tasks/reorder` with every id in display order.
    async fn reorder(&self, ordered_ids: &[TaskId]) -> Result<(), ApiError>;
}

#[must_use]
pub fn tasks_endpoint(base: &str, sort: SortMode) -> String {
    format!("{base}/api/tasks?sort={}", sort.query_value())
}

#[must_use]
pub fn create_endpoint(base: &str) -> String {
    format!("{base}/api/tasks")
}

#[must_use]
pub fn task_endpoint(base: &str, id: TaskId) -> String {
    format!("{base}/api/tasks/{id}")
}

#[must_use]
pub fn reorder_endpoint(base: &str) -> String {
    format!("{base}/api/tasks/reorder")
}
