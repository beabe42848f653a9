//! The key-provider capability trait.

use std::sync::Arc;

use crate::error::ProviderError;
use crate::key::SecretKey;

/// Capability interface over a key backend.
///
/// Exactly one provider is active per process; callers hold it behind
/// `Arc<dyn KeyProvider>` and never bypass it to touch raw key bytes once
/// an external backend is configured. Signing reads are treated as
/// read-only; `store_key`/`delete_key` mutations are serialized by the
/// provider implementation, not by callers.
pub trait KeyProvider: Send + Sync {
    /// Fetch the key stored under `id`.
    ///
    /// # Errors
    /// `ProviderError::NotFound` when no key exists under `id`;
    /// `ProviderError::Unavailable` / `ProviderError::PermissionDenied`
    /// when the backend itself fails.
    fn get_key(&self, id: &str) -> Result<SecretKey, ProviderError>;

    /// Store `key` under `id`, replacing any existing entry.
    ///
    /// # Errors
    /// Backend failures surface with their distinguishing kind.
    fn store_key(&self, id: &str, key: SecretKey) -> Result<(), ProviderError>;

    /// Delete the key stored under `id`.
    ///
    /// # Errors
    /// `ProviderError::NotFound` when no key exists under `id`.
    fn delete_key(&self, id: &str) -> Result<(), ProviderError>;
}

/// Shared handle to the process-wide key provider.
pub type DynKeyProvider = Arc<dyn KeyProvider>;
