//! Shared utilities for modorder.
//!
//! This crate provides cross-cutting concerns used by the other modorder
//! crates: the unified error type, filesystem helpers, and terminal status
//! output.

pub mod errors;
pub mod fs;
pub mod progress;
