//! Core data types for modorder.
//!
//! This crate defines what a package is before any resolution happens:
//! version values, the dependency-specification grammar, package manifests,
//! package metadata, discovery of packages on disk, and user settings.
//!
//! This crate is intentionally free of async code and network I/O.

pub mod catalog;
pub mod config;
pub mod dependency;
pub mod manifest;
pub mod package;
pub mod version;
