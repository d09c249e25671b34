//! Stable exit codes for the `todo` binary.
//!
//! Argument errors are reported by clap with its own usage exit code (2).

/// Command completed, including "task not found" outcomes.
pub const OK: i32 = 0;
/// Config or task store failure.
pub const FAILURE: i32 = 1;
