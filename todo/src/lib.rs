//! Command-line task tracker.
//!
//! Tasks live in a single JSON file that every command loads in full,
//! edits in memory, and writes back atomically. The crate keeps a strict
//! separation:
//!
//! - **[`core`]**: Pure logic (id assignment, edits, invariant checks).
//!   No I/O, fully testable in isolation.
//! - **[`io`]**: The task store and configuration file.
//!
//! [`ops`] combines the two into the `add`, `list`, `remove`, and `toggle`
//! commands; [`render`] turns their outcomes into the text the CLI prints.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod ops;
pub mod render;
pub mod task;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
