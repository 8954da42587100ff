//! Error types for document decoding and catalog loading.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Coarse error classification used by callers that only care whether a
/// failure came from the environment or from the asset itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A path could not be listed or read.
    Io,
    /// A document is not valid JSON or lacks a required field.
    MalformedDocument,
}

impl ErrorKind {
    /// Returns the string representation for reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Io => "io",
            ErrorKind::MalformedDocument => "malformed_document",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top-level error type for sprite-sheet operations.
#[derive(Debug, Error)]
pub enum SheetError {
    /// Reading or listing a path failed.
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path does not exist in the source tree.
    #[error("path not found: '{}'", .path.display())]
    NotFound { path: PathBuf },

    /// The path exists but is not a directory.
    #[error("not a directory: '{}'", .path.display())]
    NotADirectory { path: PathBuf },

    /// The document is syntactically invalid or misses a required field.
    #[error(
        "malformed document{}: {message}",
        describe_location(.path.as_deref(), .field.as_deref())
    )]
    MalformedDocument {
        /// File the document was read from, when known.
        path: Option<PathBuf>,
        /// JSON path of the offending field (e.g. `frames[2].frame.w`).
        field: Option<String>,
        message: String,
    },
}

fn describe_location(path: Option<&Path>, field: Option<&str>) -> String {
    match (path, field) {
        (Some(path), Some(field)) => format!(" '{}' (at {})", path.display(), field),
        (Some(path), None) => format!(" '{}'", path.display()),
        (None, Some(field)) => format!(" (at {})", field),
        (None, None) => String::new(),
    }
}

impl SheetError {
    /// Creates an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SheetError::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates a malformed-document error for a missing or invalid field.
    pub fn malformed_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        SheetError::MalformedDocument {
            path: None,
            field: Some(field.into()),
            message: message.into(),
        }
    }

    /// Creates a malformed-document error for a JSON syntax failure.
    pub fn invalid_json(err: serde_json::Error) -> Self {
        SheetError::MalformedDocument {
            path: None,
            field: None,
            message: err.to_string(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SheetError::Io { .. }
            | SheetError::NotFound { .. }
            | SheetError::NotADirectory { .. } => ErrorKind::Io,
            SheetError::MalformedDocument { .. } => ErrorKind::MalformedDocument,
        }
    }

    /// Attaches the source file path to a malformed-document error that has none.
    ///
    /// Other variants already carry their path and are returned unchanged.
    pub fn with_path(self, file: impl AsRef<Path>) -> Self {
        match self {
            SheetError::MalformedDocument {
                path: None,
                field,
                message,
            } => SheetError::MalformedDocument {
                path: Some(file.as_ref().to_path_buf()),
                field,
                message,
            },
            other => other,
        }
    }

    /// Returns the JSON field path for malformed-document errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            SheetError::MalformedDocument { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Returns the filesystem path associated with the error, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            SheetError::Io { path, .. }
            | SheetError::NotFound { path }
            | SheetError::NotADirectory { path } => Some(path),
            SheetError::MalformedDocument { path, .. } => path.as_deref(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SheetError>;
