//! Error types for the packer-core library.
//!
//! This module provides error handling using the `thiserror` crate,
//! with one variant per failure mode of a packing run.

use std::collections::TryReserveError;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which stream of a run a file belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamRole {
    /// The binary input
    Input,
    /// The array definition output
    Output,
    /// The optional declaration (header) output
    Declaration,
}

impl StreamRole {
    /// Returns the human-readable role name
    pub fn as_str(&self) -> &'static str {
        match self {
            StreamRole::Input => "input",
            StreamRole::Output => "output",
            StreamRole::Declaration => "declaration",
        }
    }
}

impl fmt::Display for StreamRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type for all packer operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A named file could not be opened for its role
    #[error("cannot open {role} file '{path}'")]
    Open {
        /// Role of the file in the run
        role: StreamRole,
        /// Path to the file that failed to open
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Reading the input stream failed before end of stream
    #[error("failed to read input")]
    Read(#[source] std::io::Error),

    /// Writing to an already-open sink failed
    #[error("failed to write output")]
    Write(#[source] std::io::Error),

    /// Allocating the include guard name failed
    #[error("out of memory while building include guard name")]
    GuardAllocation(#[from] TryReserveError),

    /// Configuration rejected before any stream was opened
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a new open error for the given stream role
    pub fn open(role: StreamRole, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            role,
            path: path.into(),
            source,
        }
    }

    /// Creates a new invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Returns true if a named file could not be opened
    pub fn is_open_error(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns the stream role of an open error
    pub fn role(&self) -> Option<StreamRole> {
        match self {
            Self::Open { role, .. } => Some(*role),
            _ => None,
        }
    }
}
