//! Error Types
//!
//! One error enum for the whole library, classified into the three failure
//! families a caller cares about.

use std::path::PathBuf;

/// Broad failure family of a [`MetaError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Manifest missing or unreadable
    Io,
    /// Manifest is not valid JSON
    Parse,
    /// Manifest parsed but its contents are unusable
    Validation,
}

#[derive(Debug, thiserror::Error)]
pub enum MetaError {
    #[error("Failed to read manifest {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Manifest {path:?} must contain a JSON object at the top level")]
    NotAnObject { path: PathBuf },

    #[error("Manifest is missing required field: {0}")]
    MissingField(String),

    #[error("Manifest field '{field}' must be a {expected}")]
    FieldType { field: String, expected: &'static str },

    #[error("Invalid version: {0:?} (expected a leading major.minor.patch)")]
    InvalidVersion(String),
}

impl MetaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetaError::Io { .. } => ErrorKind::Io,
            MetaError::Parse { .. } => ErrorKind::Parse,
            MetaError::NotAnObject { .. }
            | MetaError::MissingField(_)
            | MetaError::FieldType { .. }
            | MetaError::InvalidVersion(_) => ErrorKind::Validation,
        }
    }
}

/// Library result type
pub type MetaResult<T> = Result<T, MetaError>;
