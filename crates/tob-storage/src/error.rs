//! Storage adapter error types for tob-storage.

use thiserror::Error;
use tob_core::errors::CoreError;

/// Errors from mapping between domain values and Datastore entities.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A key name did not start with a known `SDK_*` tag.
    #[error("Unknown SDK key tag: '{0}'")]
    UnknownSdkTag(String),

    /// An entity key carried a kind this adapter does not map.
    #[error("Unknown entity kind: '{0}'")]
    UnknownKind(String),

    /// A property required to decode a record was absent.
    #[error("Missing property '{property}' on {entity}")]
    MissingProperty {
        entity: &'static str,
        property: &'static str,
    },

    /// A property was present but held the wrong value type.
    #[error("Property '{property}' has the wrong type: expected {expected}")]
    PropertyType {
        property: String,
        expected: &'static str,
    },

    /// A key could not be represented or decoded.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Two records in one write plan derived the same key.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// No learning-path root entity was among the records to assemble.
    #[error("No learning path root entity found")]
    MissingRoot,

    /// Domain-level parse failure (unknown SDK or node type).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
