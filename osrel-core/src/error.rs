//! Error types for value unquoting and file aggregation.
//!
//! [`UnquoteError`] is a plain code enum: decoding a single value never
//! allocates for its error path. [`ReadError`] and [`LoadError`] wrap it
//! with the line and path context added by the aggregation layer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error codes for malformed assignment values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(u8)]
pub enum UnquoteError {
    /// Quoted value without escapes whose last character isn't the opening quote
    #[error("malformed assignment value: missing final quote")]
    MissingFinalQuote = 0,
    /// Quoted value with escapes that ends before its closing quote
    #[error("malformed assignment value: missing terminating quote")]
    MissingTerminatingQuote,
    /// Backslash as the very last character
    #[error("malformed assignment value: single backslash")]
    SingleBackslash,
    /// Backslash followed by anything outside the escapable set
    #[error("malformed assignment value: invalid escape")]
    InvalidEscape,
}

/// Errors while reading assignments from a stream.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The underlying reader failed before reaching EOF.
    #[error("failed to read os-release data: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Line `line` (1-based) is not valid UTF-8.
    #[error("line {line}: not valid UTF-8")]
    Utf8 { line: usize },

    /// The value assigned to `variable` on line `line` failed to decode.
    #[error("line {line}: {variable}: {source}")]
    Value {
        line: usize,
        variable: String,
        #[source]
        source: UnquoteError,
    },
}

impl ReadError {
    /// The decode error behind this failure, if it was a value error.
    pub fn unquote_error(&self) -> Option<UnquoteError> {
        match self {
            Self::Value { source, .. } => Some(*source),
            _ => None,
        }
    }
}

/// Errors while loading an os-release file from the filesystem.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file exists but could not be opened.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was opened but its contents were rejected.
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ReadError,
    },
}

impl LoadError {
    /// The path this error refers to.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Open { path, .. } | Self::Read { path, .. } => path,
        }
    }
}
