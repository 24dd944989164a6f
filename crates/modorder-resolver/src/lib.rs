//! Dependency resolution engine: validates every package's dependencies,
//! detects cycles, and computes a deterministic load order.
//!
//! Resolution is synchronous and performs no I/O. Callers that must not
//! block can run [`resolver::resolve`] on a background thread.

pub mod graph;
pub mod index;
pub mod problem;
pub mod report;
pub mod resolver;
pub mod topo;
pub mod validator;
