//! Error types for linecountlib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop a run before or while files are discovered.
///
/// Failures on individual files never show up here; they are logged by the
/// worker that hit them (see [`ScanError`]).
#[derive(Error, Debug)]
pub enum LinecountError {
    /// Failed to list a directory
    #[error("failed to read directory '{path}': {source}")]
    Enumeration {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern, or a path the glob could not read
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// An entry the recursive walk could not visit
    #[error("{message}: {path}")]
    Walk { path: PathBuf, message: String },

    /// The worker pool could not be started
    #[error("failed to start worker pool: {0}")]
    PoolConstruction(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a single file was skipped.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The file could not be opened
    #[error("open {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The content is not valid UTF-8
    #[error("file not UTF-8")]
    NotText {
        /// Newlines counted before the invalid sequence
        partial: u64,
    },

    /// A read failed part way through
    #[error("{source}")]
    Io {
        /// Newlines counted before the failure
        partial: u64,
        source: std::io::Error,
    },
}

impl ScanError {
    /// The count reached before the failure. Callers discard it.
    pub fn partial(&self) -> u64 {
        match self {
            ScanError::Open { .. } => 0,
            ScanError::NotText { partial } | ScanError::Io { partial, .. } => *partial,
        }
    }
}
