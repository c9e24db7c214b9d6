//! Reactive state provided through Leptos context.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board` holds what the controller last rendered; `ui` holds page chrome
//! the controller does not know about (form drafts, modal visibility, clock).

pub mod board;
pub mod ui;
