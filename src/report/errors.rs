/// Errors from the report domain layer.
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while merging tool version reports.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The invocation did not select inputs correctly.
    #[error("{message}")]
    Usage {
        /// What was wrong with the invocation.
        message: String,
    },

    /// An input report exists but could not be read.
    #[error("Failed to read '{}': {source}", path.display())]
    Read {
        /// The input path.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// The unified report could not be written.
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        /// The output path (or the directory being created).
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
}

impl ReportError {
    /// Shorthand for a `Usage` error.
    #[must_use]
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage { .. } | Self::Read { .. } | Self::Write { .. } => 1,
        }
    }

    /// Machine-readable error code (`snake_case`).
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usage { .. } => "usage",
            Self::Read { .. } => "read_failed",
            Self::Write { .. } => "write_failed",
        }
    }

    /// The file path involved, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Usage { .. } => None,
            Self::Read { path, .. } | Self::Write { path, .. } => Some(path.as_path()),
        }
    }
}
