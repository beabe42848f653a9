//! In-memory key provider (MVP backend).

use dashmap::DashMap;
use tracing::debug;

use crate::error::ProviderError;
use crate::key::SecretKey;
use crate::provider::KeyProvider;

/// Deterministic in-memory key store.
///
/// Mutations serialize on the map's shard locks; reads stay lock-light so
/// concurrent signing never contends with other readers. Dropped entries
/// zero their key material via `SecretKey`'s drop.
#[derive(Debug, Default)]
pub struct MemoryKeyProvider {
    keys: DashMap<String, SecretKey>,
}

impl MemoryKeyProvider {
    /// Create an empty provider.
    #[must_use]
    pub fn new() -> Self {
        Self {
            keys: DashMap::new(),
        }
    }

    /// Number of keys currently stored.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl KeyProvider for MemoryKeyProvider {
    fn get_key(&self, id: &str) -> Result<SecretKey, ProviderError> {
        self.keys
            .get(id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| ProviderError::NotFound(id.to_string()))
    }

    fn store_key(&self, id: &str, key: SecretKey) -> Result<(), ProviderError> {
        self.keys.insert(id.to_string(), key);
        debug!(key_id = %id, "stored key");
        Ok(())
    }

    fn delete_key(&self, id: &str) -> Result<(), ProviderError> {
        match self.keys.remove(id) {
            Some(_) => {
                debug!(key_id = %id, "deleted key");
                Ok(())
            }
            None => Err(ProviderError::NotFound(id.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KEY_SIZE;

    fn sample_key(fill: u8) -> SecretKey {
        SecretKey::from_bytes([fill; KEY_SIZE])
    }

    #[test]
    fn test_store_then_get_round_trip() {
        let provider = MemoryKeyProvider::new();
        provider.store_key("trading", sample_key(1)).unwrap();

        let fetched = provider.get_key("trading").unwrap();
        assert_eq!(fetched.as_bytes(), &[1u8; KEY_SIZE]);
    }

    #[test]
    fn test_get_missing_key_is_not_found() {
        let provider = MemoryKeyProvider::new();
        let err = provider.get_key("absent").unwrap_err();
        assert_eq!(err, ProviderError::NotFound("absent".to_string()));
    }

    #[test]
    fn test_store_replaces_existing() {
        let provider = MemoryKeyProvider::new();
        provider.store_key("trading", sample_key(1)).unwrap();
        provider.store_key("trading", sample_key(2)).unwrap();

        let fetched = provider.get_key("trading").unwrap();
        assert_eq!(fetched.as_bytes(), &[2u8; KEY_SIZE]);
        assert_eq!(provider.len(), 1);
    }

    #[test]
    fn test_delete_then_get_is_not_found() {
        let provider = MemoryKeyProvider::new();
        provider.store_key("trading", sample_key(1)).unwrap();
        provider.delete_key("trading").unwrap();

        assert!(provider.is_empty());
        assert!(matches!(
            provider.get_key("trading"),
            Err(ProviderError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_missing_key_is_not_found() {
        let provider = MemoryKeyProvider::new();
        let err = provider.delete_key("absent").unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let not_found = ProviderError::NotFound("k".into());
        let unavailable = ProviderError::Unavailable("backend down".into());
        let denied = ProviderError::PermissionDenied("k".into());

        assert_ne!(not_found, unavailable);
        assert_ne!(unavailable, denied);
        assert_ne!(not_found, denied);
    }
}
