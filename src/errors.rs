//! Error types for rendering into external sinks
//!
//! Rendering a tree never fails on its own; the only failures come from the
//! sink being written to. [`UnparseError`] carries those failures out of
//! [`write_program`](crate::unparse::write_program).

use std::fmt;
use std::io;

/// Errors raised while writing rendered source to a sink
#[derive(Debug)]
pub enum UnparseError {
    /// Formatting failed without an underlying I/O error
    Format(fmt::Error),

    /// The underlying writer failed
    Io(io::Error),
}

impl fmt::Display for UnparseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnparseError::Format(_) => write!(f, "Failed to format program text"),
            UnparseError::Io(err) => write!(f, "Failed to write program text: {}", err),
        }
    }
}

impl std::error::Error for UnparseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            UnparseError::Format(err) => Some(err),
            UnparseError::Io(err) => Some(err),
        }
    }
}

impl From<fmt::Error> for UnparseError {
    fn from(err: fmt::Error) -> Self {
        UnparseError::Format(err)
    }
}

impl From<io::Error> for UnparseError {
    fn from(err: io::Error) -> Self {
        UnparseError::Io(err)
    }
}
