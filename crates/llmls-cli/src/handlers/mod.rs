//! Command handlers.

pub mod list;
pub mod providers;
