//! Signing error types.

use thiserror::Error;
use tw_keys::ProviderError;

#[derive(Debug, Error)]
pub enum SigningError {
    /// Malformed key or signature size. Caller bug, reported immediately.
    #[error("Invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    /// Key backend failure, surfaced with its distinguishing kind.
    #[error("Key provider: {0}")]
    Provider(#[from] ProviderError),
}

pub type SigningResult<T> = Result<T, SigningError>;
