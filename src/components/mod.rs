//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from Leptos context providers and forward
//! user actions to the board controller hooks.

pub mod note_card;
pub mod notice_tray;
pub mod settings_modal;
pub mod task_form;
pub mod toolbar;
