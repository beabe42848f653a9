//! The cryptographic primitive seam.
//!
//! Everything algorithm-specific lives behind [`MacScheme`]: derive a key,
//! authenticate bytes, verify bytes. Swapping the placeholder HMAC scheme
//! for a post-quantum one later replaces the implementation here and
//! nothing else.

use hmac::{Hmac, Mac};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use sha2::Sha256;
use zeroize::Zeroize;

use tw_keys::{SecretKey, KEY_SIZE};

use crate::signature::{Signature, SIGNATURE_SIZE};

type HmacSha256 = Hmac<Sha256>;

/// Narrow interface over the signing primitive.
pub trait MacScheme: Send + Sync {
    /// Derive a key deterministically from a seed.
    fn derive_key(&self, seed: u64) -> SecretKey;

    /// Compute the authentication code for `payload` under `key`.
    ///
    /// Must not branch on secret data and must accept payloads of any size.
    fn authenticate(&self, key: &SecretKey, payload: &[u8]) -> Signature;

    /// Verify `signature` against `key` and `payload`.
    ///
    /// The comparison must run in constant time (no short-circuit on the
    /// first mismatched byte). Malformed input returns `false`.
    fn verify(&self, key: &SecretKey, payload: &[u8], signature: &[u8]) -> bool;
}

/// HMAC-SHA256 with ChaCha20-seeded key derivation.
///
/// Deterministic placeholder for the future post-quantum scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct HmacSha256Scheme;

impl HmacSha256Scheme {
    fn mac(key: &SecretKey) -> HmacSha256 {
        // Infallible: HMAC accepts keys of any length, and ours is fixed.
        HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length")
    }
}

impl MacScheme for HmacSha256Scheme {
    fn derive_key(&self, seed: u64) -> SecretKey {
        let mut rng = ChaCha20Rng::seed_from_u64(seed);
        let mut bytes = [0u8; KEY_SIZE];
        rng.fill_bytes(&mut bytes);
        let key = SecretKey::from_bytes(bytes);
        bytes.zeroize();
        key
    }

    fn authenticate(&self, key: &SecretKey, payload: &[u8]) -> Signature {
        let mut mac = Self::mac(key);
        mac.update(payload);
        let bytes: [u8; SIGNATURE_SIZE] = mac.finalize().into_bytes().into();
        Signature::from_bytes(bytes)
    }

    fn verify(&self, key: &SecretKey, payload: &[u8], signature: &[u8]) -> bool {
        if signature.len() != SIGNATURE_SIZE {
            return false;
        }
        let mut mac = Self::mac(key);
        mac.update(payload);
        // verify_slice compares in constant time.
        mac.verify_slice(signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_key_deterministic_across_instances() {
        let a = HmacSha256Scheme.derive_key(99);
        let b = HmacSha256Scheme::default().derive_key(99);
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_authenticate_deterministic() {
        let key = HmacSha256Scheme.derive_key(5);
        let sig1 = HmacSha256Scheme.authenticate(&key, b"hello");
        let sig2 = HmacSha256Scheme.authenticate(&key, b"hello");
        assert_eq!(sig1, sig2);
    }

    #[test]
    fn test_verify_wrong_length_is_false_not_panic() {
        let key = HmacSha256Scheme.derive_key(5);
        assert!(!HmacSha256Scheme.verify(&key, b"hello", &[0u8; 7]));
    }

    #[test]
    fn test_scheme_is_object_safe() {
        let scheme: Box<dyn MacScheme> = Box::new(HmacSha256Scheme);
        let key = scheme.derive_key(1);
        let sig = scheme.authenticate(&key, b"x");
        assert!(scheme.verify(&key, b"x", sig.as_bytes()));
    }
}
