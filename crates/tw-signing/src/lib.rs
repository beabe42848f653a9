//! Deterministic key derivation and message authentication.
//!
//! The MAC-based scheme here is explicitly a placeholder for a future
//! post-quantum signature scheme. The public contract (byte-in, byte-out,
//! boolean verify) stays stable across that swap: callers only see
//! [`keygen`], [`sign`], [`verify`] and the provider-backed
//! [`SigningService`]. The actual primitive lives behind the narrow
//! [`MacScheme`] seam so replacing it touches one module.
//!
//! # Security Warning
//! HMAC-SHA256 with a seeded-RNG key derivation is an MVP stand-in.
//! TODO(crypto-audit): swap in an audited PQC scheme behind `MacScheme`
//! once the external review completes.
//!
//! Determinism is load-bearing: the same seed must produce the same key on
//! every platform so golden vectors stay reusable across deployments.

pub mod error;
pub mod scheme;
pub mod service;
pub mod signature;

pub use error::{SigningError, SigningResult};
pub use scheme::{HmacSha256Scheme, MacScheme};
pub use service::SigningService;
pub use signature::{Signature, SIGNATURE_SIZE};

use tw_keys::SecretKey;

/// Derive a key deterministically from a 64-bit seed.
///
/// Same seed, same key, on every platform and in every process.
#[must_use]
pub fn keygen(seed: u64) -> SecretKey {
    HmacSha256Scheme.derive_key(seed)
}

/// Compute the authentication code binding `key` and `payload`.
///
/// Pure function: same inputs always produce the same signature. The
/// payload may be empty or arbitrarily large; nothing is truncated.
#[must_use]
pub fn sign(key: &SecretKey, payload: &[u8]) -> Signature {
    HmacSha256Scheme.authenticate(key, payload)
}

/// Check `signature` against `key` and `payload`.
///
/// Recomputes the expected code and compares in constant time. Malformed
/// or mismatched input yields `false`, never an error, so callers can
/// treat verification as a pure boolean decision.
#[must_use]
pub fn verify(key: &SecretKey, payload: &[u8], signature: &[u8]) -> bool {
    HmacSha256Scheme.verify(key, payload, signature)
}
