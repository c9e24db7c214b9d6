//! Browser glue and small pure helpers shared by components.

pub mod clock;
pub mod page_config;
pub mod storage;
