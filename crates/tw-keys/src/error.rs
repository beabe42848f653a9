//! Key management error types.

use thiserror::Error;

/// Errors constructing or loading key material.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Failed to decode hex: {0}")]
    HexDecode(#[from] hex::FromHexError),

    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors surfaced by a key-provider backend.
///
/// Each kind stays distinguishable so callers can tell "key absent" from
/// "provider unreachable". The core never retries provider failures itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    #[error("Key not found: {0}")]
    NotFound(String),

    #[error("Key backend unavailable: {0}")]
    Unavailable(String),

    #[error("Permission denied for key: {0}")]
    PermissionDenied(String),
}
