//! Error types shared across the crate.
//!
//! The scroll synchronisation core itself never fails: unknown routes, missing anchors and a
//! missing scroll container all degrade by policy. Errors only arise at the edges, when a
//! section table is malformed or when the terminal, the clipboard or the filesystem refuse.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating a section table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// Two sections claim the same route path.
    #[error("duplicate section path: {0}")]
    DuplicatePath(String),

    /// Two sections claim the same anchor id.
    #[error("duplicate anchor id: {0}")]
    DuplicateAnchor(String),

    /// No section is registered for `/`, so unknown routes would have nowhere to fall back to.
    #[error("no section registered for the root path `/`")]
    MissingRoot,

    /// A path that does not start with `/`.
    #[error("section path must start with '/': {0}")]
    RelativePath(String),
}

/// Errors from reading or writing the persisted theme preference.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The preference file could not be read or written.
    #[error("I/O error on {path}: {error}")]
    Io {
        /// Location of the preference file.
        path: PathBuf,
        /// The underlying I/O error.
        error: std::io::Error,
    },

    /// The preference file does not hold valid JSON.
    #[error("malformed theme preference: {0}")]
    Json(#[from] serde_json::Error),

    /// A mode string other than `system`, `light` or `dark`.
    #[error("invalid theme mode: {0} (expected 'system', 'light' or 'dark')")]
    InvalidMode(String),
}

/// Top-level error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or filesystem failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Malformed section table.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Theme preference failure.
    #[error(transparent)]
    Theme(#[from] ThemeError),

    /// The system clipboard rejected an operation.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),

    /// The configuration file exists but could not be parsed.
    #[error("invalid configuration in {path}: {message}")]
    Config {
        /// Location of the configuration file.
        path: PathBuf,
        /// Parser diagnostic.
        message: String,
    },
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T, E = Error> = std::result::Result<T, E>;
