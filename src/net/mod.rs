//! Network layer for the task REST API.

pub mod api;
