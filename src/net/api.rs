//! REST client for the task backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call returns [`ApiError::Unavailable`] so the
//! component tree still compiles and links for unit tests.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is mapped onto [`ApiError`]; nothing here logs or notifies.
//! The controller decides how a failure is reported.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;
use board::api::{ApiError, TaskApi};
use board::sort::SortMode;
use board::task::{NewTask, Task, TaskId, TaskPatch};

#[cfg(feature = "csr")]
use board::api::{create_endpoint, reorder_endpoint, task_endpoint, tasks_endpoint};
#[cfg(feature = "csr")]
use board::task::ReorderRequest;
#[cfg(feature = "csr")]
use gloo_net::http::{Request, Response};

/// [`TaskApi`] over HTTP against `{base}/api/tasks`.
#[derive(Clone, Debug, Default)]
pub struct HttpTaskApi {
    base: String,
}

impl HttpTaskApi {
    /// `base` is the origin/prefix without a trailing slash; empty means same origin.
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[cfg(test)]
    fn base(&self) -> &str {
        &self.base
    }
}

#[cfg(any(test, feature = "csr"))]
fn network_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Network(err.to_string())
}

#[cfg(any(test, feature = "csr"))]
fn decode_error(err: impl std::fmt::Display) -> ApiError {
    ApiError::Decode(err.to_string())
}

/// Turn a response status into `Ok` or the matching [`ApiError`].
#[cfg(any(test, feature = "csr"))]
fn check_status(ok: bool, status: u16, id: Option<TaskId>) -> Result<(), ApiError> {
    if ok { Ok(()) } else { Err(ApiError::from_status(status, id)) }
}

#[cfg(feature = "csr")]
async fn send(request: Result<Request, gloo_net::Error>, id: Option<TaskId>) -> Result<Response, ApiError> {
    let resp = request.map_err(network_error)?.send().await.map_err(network_error)?;
    check_status(resp.ok(), resp.status(), id)?;
    Ok(resp)
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn list(&self, sort: SortMode) -> Result<Vec<Task>, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(Request::get(&tasks_endpoint(&self.base, sort)).build(), None).await?;
            resp.json::<Vec<Task>>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = sort;
            Err(ApiError::Unavailable)
        }
    }

    async fn create(&self, task: &NewTask) -> Result<Task, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = send(Request::post(&create_endpoint(&self.base)).json(task), None).await?;
            resp.json::<Task>().await.map_err(decode_error)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = task;
            Err(ApiError::Unavailable)
        }
    }

    async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            send(Request::put(&task_endpoint(&self.base, id)).json(patch), Some(id)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, patch);
            Err(ApiError::Unavailable)
        }
    }

    async fn delete(&self, id: TaskId) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            send(Request::delete(&task_endpoint(&self.base, id)).build(), Some(id)).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            Err(ApiError::Unavailable)
        }
    }

    async fn reorder(&self, ordered_ids: &[TaskId]) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = ReorderRequest { ordered_ids: ordered_ids.to_vec() };
            send(Request::post(&reorder_endpoint(&self.base)).json(&body), None).await?;
            Ok(())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = ordered_ids;
            Err(ApiError::Unavailable)
        }
    }
}
