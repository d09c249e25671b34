//! I/O helpers for tracker commands.

pub mod config;
pub mod task_store;
