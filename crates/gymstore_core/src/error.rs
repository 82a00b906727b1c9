//! Error types for the GymStore core.

use crate::entity::EntityId;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations.
///
/// Only `NotFound` reaches callers of the repository. The other variants are
/// produced while bulk loading, where they are logged and the offending entry
/// (or the whole document) is skipped.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No record of this type exists under the requested id.
    #[error("{type_name} not found with id: {id}")]
    NotFound {
        /// Display name of the record type.
        type_name: &'static str,
        /// The identifier that was requested.
        id: EntityId,
    },

    /// A document entry could not be decoded into its target type.
    #[error("failed to decode entry `{key}`: {source}")]
    Decode {
        /// The document key of the entry.
        key: String,
        /// The underlying field error.
        source: DecodeError,
    },

    /// No decoder is registered for the entry's namespace.
    #[error("unknown entity type `{namespace}` for key `{key}`")]
    UnknownNamespace {
        /// The document key of the entry.
        key: String,
        /// The namespace part of the key.
        namespace: String,
    },

    /// A document key is not of the form `<namespace>:<id>`.
    #[error("invalid key `{key}`: {reason}")]
    InvalidKey {
        /// The offending key.
        key: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The bulk-load source could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    SourceUnavailable {
        /// Path of the document.
        path: PathBuf,
        /// The I/O failure.
        source: io::Error,
    },

    /// The bulk-load source was read but is not a usable document.
    #[error("invalid document: {message}")]
    InvalidDocument {
        /// Description of the problem.
        message: String,
    },
}

/// Why a document entry could not be turned into a record.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The entry body does not match the record's shape.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The entry names a field the record type does not declare.
    #[error("unknown field `{0}`")]
    UnknownField(String),

    /// The id inside the entry body disagrees with the id in its key.
    #[error("body id {body} does not match key id {key}")]
    IdMismatch {
        /// Id found in the body.
        body: EntityId,
        /// Id found in the key.
        key: EntityId,
    },
}

impl CoreError {
    /// Creates a not-found error for record type `T`.
    pub fn not_found<T: crate::Entity>(id: EntityId) -> Self {
        Self::NotFound {
            type_name: T::TYPE_NAME,
            id,
        }
    }

    /// Creates a decode error for a document entry.
    pub fn decode(key: impl Into<String>, source: impl Into<DecodeError>) -> Self {
        Self::Decode {
            key: key.into(),
            source: source.into(),
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(key: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidKey {
            key: key.into(),
            reason: reason.to_string(),
        }
    }

    /// Creates an invalid document error.
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Returns true for the caller-visible not-found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_type_and_id() {
        let err = CoreError::NotFound {
            type_name: "Trainee",
            id: EntityId::new(999),
        };
        let msg = err.to_string();
        assert!(msg.contains("Trainee"));
        assert!(msg.contains("999"));
        assert!(err.is_not_found());
    }

    #[test]
    fn decode_error_keeps_source() {
        let err = CoreError::decode("trainer:2", DecodeError::UnknownField("nickname".into()));
        assert_eq!(
            err.to_string(),
            "failed to decode entry `trainer:2`: unknown field `nickname`"
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(!err.is_not_found());
    }

    #[test]
    fn decode_error_wraps_serde_errors() {
        let source = serde_json::from_str::<u32>("\"sixty\"").unwrap_err();
        let err = CoreError::decode("training:1", source);
        assert!(matches!(
            err,
            CoreError::Decode {
                source: DecodeError::Json(_),
                ..
            }
        ));

        let mismatch = DecodeError::IdMismatch {
            body: EntityId::new(3),
            key: EntityId::new(4),
        };
        assert_eq!(mismatch.to_string(), "body id 3 does not match key id 4");
    }

    #[test]
    fn source_unavailable_shows_path() {
        let err = CoreError::SourceUnavailable {
            path: PathBuf::from("/nope/data.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("/nope/data.json"));
    }
}
