use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all modorder operations.
///
/// Per-package dependency problems are not errors; they are reported as data
/// by the resolver. Everything here aborts the call that produced it.
#[derive(Debug, Error, Diagnostic)]
pub enum ModError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A version string is not `<major>.<minor>[.<patch>]`.
    #[error("Version `{input}` does not conform to the format <major>.<minor>[.<patch>]")]
    #[diagnostic(help("Versions are two or three dot-separated non-negative integers"))]
    VersionFormat { input: String },

    /// A dependency specification does not follow `[?] name [op version]`.
    #[error("Invalid dependency specification `{spec}`: {reason}")]
    #[diagnostic(help("Expected `[?] <name> [(>|>=|=) <version>]`"))]
    DependencySpec { spec: String, reason: String },

    /// Invalid or malformed package manifest (e.g. info.json).
    #[error("Manifest error in `{origin}`: {message}")]
    #[diagnostic(help("Check the package manifest for missing or mistyped keys"))]
    Manifest { origin: String, message: String },

    /// The platform-provided base package could not be read.
    #[error("Base package unavailable: {message}")]
    #[diagnostic(help("Check that game-path points at a complete game installation"))]
    MissingBasePackage { message: String },

    /// A packaged (`.zip`) source could not be opened or read.
    #[error("Archive error in {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    /// Settings could not be loaded or are incomplete.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Pass --game-path/--mods-path or set them in modorder.toml"))]
    Config { message: String },

    /// An internal invariant of the resolver was violated.
    #[error("Internal consistency failure: {message}")]
    Consistency { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}

/// Convenience alias for `miette::Result<T>`.
pub type ModResult<T> = miette::Result<T>;
