//! Top-level page components.

pub mod board;
