//! Provider-backed signing service.

use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use tw_keys::{DynKeyProvider, ProviderError, SecretKey};
use tw_telemetry::Metrics;

use crate::error::SigningResult;
use crate::scheme::{HmacSha256Scheme, MacScheme};
use crate::signature::Signature;

/// Signing service over a pluggable key provider.
///
/// Pure and synchronous: safe to call concurrently from any number of
/// threads. The service never branches on the backend type; it only calls
/// the [`tw_keys::KeyProvider`] interface. Provider failures propagate with
/// their distinguishing kind and are never retried here; retries are a
/// caller concern.
pub struct SigningService {
    provider: DynKeyProvider,
    scheme: Box<dyn MacScheme>,
}

impl SigningService {
    /// Create a service over `provider` with the default HMAC scheme.
    #[must_use]
    pub fn new(provider: DynKeyProvider) -> Self {
        Self::with_scheme(provider, Box::new(HmacSha256Scheme))
    }

    /// Create a service with an explicit scheme.
    #[must_use]
    pub fn with_scheme(provider: DynKeyProvider, scheme: Box<dyn MacScheme>) -> Self {
        Self { provider, scheme }
    }

    /// Derive a key deterministically from `seed`.
    #[must_use]
    pub fn keygen(&self, seed: u64) -> SecretKey {
        let started = Instant::now();
        let key = self.scheme.derive_key(seed);
        Metrics::operation("keygen", "ok");
        Metrics::operation_latency("keygen", started.elapsed().as_micros() as f64);
        key
    }

    /// Derive a key from `seed` and store it under `id`.
    ///
    /// # Errors
    /// Provider failures surface with their kind.
    pub fn provision_key(&self, id: &str, seed: u64) -> Result<(), ProviderError> {
        let key = self.keygen(seed);
        self.provider.store_key(id, key)?;
        debug!(key_id = %id, "provisioned key from seed");
        Ok(())
    }

    /// Sign `payload` with an explicit key.
    #[must_use]
    pub fn sign(&self, key: &SecretKey, payload: &[u8]) -> Signature {
        let started = Instant::now();
        let sig = self.scheme.authenticate(key, payload);
        Metrics::operation("sign", "ok");
        Metrics::operation_latency("sign", started.elapsed().as_micros() as f64);
        sig
    }

    /// Verify `signature` over `payload` with an explicit key.
    #[must_use]
    pub fn verify(&self, key: &SecretKey, payload: &[u8], signature: &[u8]) -> bool {
        let started = Instant::now();
        let valid = self.scheme.verify(key, payload, signature);
        Metrics::operation("verify", if valid { "valid" } else { "invalid" });
        Metrics::operation_latency("verify", started.elapsed().as_micros() as f64);
        valid
    }

    /// Sign `payload` with the key stored under `id`.
    ///
    /// # Errors
    /// Provider failures surface with their kind.
    pub fn sign_with(&self, id: &str, payload: &[u8]) -> SigningResult<Signature> {
        let key = match self.provider.get_key(id) {
            Ok(key) => key,
            Err(e) => {
                Metrics::operation("sign", "provider_error");
                return Err(e.into());
            }
        };
        Ok(self.sign(&key, payload))
    }

    /// Verify `signature` over `payload` with the key stored under `id`.
    ///
    /// A verification mismatch is `Ok(false)`; only provider failures are
    /// errors.
    ///
    /// # Errors
    /// Provider failures surface with their kind.
    pub fn verify_with(&self, id: &str, payload: &[u8], signature: &[u8]) -> SigningResult<bool> {
        let key = match self.provider.get_key(id) {
            Ok(key) => key,
            Err(e) => {
                Metrics::operation("verify", "provider_error");
                return Err(e.into());
            }
        };
        Ok(self.verify(&key, payload, signature))
    }

    /// Fetch the key stored under `id`.
    ///
    /// # Errors
    /// Provider failures surface with their kind.
    pub fn get_key(&self, id: &str) -> Result<SecretKey, ProviderError> {
        self.provider.get_key(id)
    }

    /// Store `key` under `id`.
    ///
    /// # Errors
    /// Provider failures surface with their kind.
    pub fn store_key(&self, id: &str, key: SecretKey) -> Result<(), ProviderError> {
        self.provider.store_key(id, key)
    }

    /// Delete the key stored under `id`.
    ///
    /// # Errors
    /// Provider failures surface with their kind.
    pub fn delete_key(&self, id: &str) -> Result<(), ProviderError> {
        self.provider.delete_key(id)
    }

    /// Shared handle to the underlying provider.
    #[must_use]
    pub fn provider(&self) -> DynKeyProvider {
        Arc::clone(&self.provider)
    }
}
