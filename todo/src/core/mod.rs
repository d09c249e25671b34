//! Deterministic, pure logic over the in-memory task list.
//!
//! Core modules must be free of I/O side effects. Operations in
//! [`crate::ops`] load the list, hand it to these helpers, and save the result.

pub mod edit;
pub mod ids;
pub mod invariants;
