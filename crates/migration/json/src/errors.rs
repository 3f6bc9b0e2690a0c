//! Codec error types

use process_migration_types::MigrationError;

/// Errors that can occur while encoding or decoding a migration document
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("Malformed migration document JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Unrecognized activity mapping at index {index}: {reason}")]
    UnrecognizedMapping { index: usize, reason: String },

    #[error("Invalid activity mapping at index {index}: {source}")]
    InvalidMapping {
        index: usize,
        #[source]
        source: MigrationError,
    },

    #[error("Activity mapping at index {index} is missing '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Invalid(#[from] MigrationError),
}

impl CodecError {
    /// The validation failure behind this error, if any
    pub fn as_migration_error(&self) -> Option<&MigrationError> {
        match self {
            CodecError::Invalid(err) => Some(err),
            CodecError::InvalidMapping { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Result type alias for codec operations
pub type CodecResult<T> = Result<T, CodecError>;
