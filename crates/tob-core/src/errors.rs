//! Cross-cutting error types for the domain model.
//!
//! Storage-specific errors (`StorageError`) live in `tob-storage`, config
//! errors in `tob-config`. The CLI converges everything into `anyhow`.

use thiserror::Error;

/// Errors raised while building or parsing domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A string did not name one of the supported SDKs.
    #[error("Unknown SDK: '{0}'")]
    UnknownSdk(String),

    /// A stored node-type code did not match any `NodeType`.
    #[error("Unknown node type code: {0}")]
    UnknownNodeType(i64),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
