//! Error types for the unaozora library.

use std::io;
use thiserror::Error;

/// Result type alias for unaozora operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the unaozora library.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading or writing record streams.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A record line is not valid JSON, or a record failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required structural marker is missing from a record.
    #[error("structure error in record {id}: {message}")]
    Structure { id: String, message: String },

    /// A legacy character code does not decode to a character.
    #[error("undecodable character code: {code}")]
    Decode { code: String },
}

impl Error {
    /// Builds an [`Error::Structure`] for the record identified by `id`.
    pub(crate) fn structure(id: impl ToString, message: impl Into<String>) -> Self {
        Error::Structure {
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// True for errors scoped to a single record.
    ///
    /// Lenient batch processing may skip past these; stream-level I/O errors
    /// always abort the run.
    pub fn is_record_scoped(&self) -> bool {
        matches!(
            self,
            Error::Structure { .. } | Error::Decode { .. } | Error::Json(_)
        )
    }
}
