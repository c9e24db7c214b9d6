//! Browser-independent core of the Clarity task board.
//!
//! This crate owns everything the board does that does not need a DOM: the
//! task wire model, urgency classification, drag insertion math, local
//! wall-clock conversion, settings, and the [`controller::BoardController`]
//! that sequences REST calls and re-renders. The web client supplies the
//! browser implementations of the seams declared here and wires DOM events to
//! the controller hooks.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`task`] | Task DTOs, ids, create/update/reorder request bodies |
//! | [`sort`] | Manual vs. deadline ordering |
//! | [`urgency`] | Warning/overdue classification |
//! | [`board`] | Ordered in-memory note collection |
//! | [`drag`] | Drag-over insertion target selection |
//! | [`localtime`] | UTC <-> local `datetime-local` input conversion and the [`localtime::Clock`] seam |
//! | [`settings`] | Warning threshold persistence and the [`settings::SettingsStore`] seam |
//! | [`config`] | Typed client configuration |
//! | [`api`] | REST endpoints, [`api::ApiError`], and the [`api::TaskApi`] seam |
//! | [`view`] | Render target seam and user-facing notices |
//! | [`controller`] | Board controller hooks |

pub mod api;
pub mod board;
pub mod config;
pub mod controller;
pub mod drag;
pub mod localtime;
pub mod settings;
pub mod sort;
pub mod task;
pub mod urgency;
pub mod view;
