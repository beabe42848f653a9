//! Secret key material.

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::KeyError;

/// Key size in bytes (256-bit key).
pub const KEY_SIZE: usize = 32;

/// Fixed-length secret key, zeroed on drop.
///
/// Exclusively owned by whichever component generated or fetched it. There
/// is intentionally no `Display` impl and `Debug` is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey([u8; KEY_SIZE]);

impl SecretKey {
    /// Wrap exactly `KEY_SIZE` bytes of key material.
    #[must_use]
    pub fn from_bytes(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Construct from a byte slice.
    ///
    /// # Errors
    /// Returns `KeyError::InvalidLength` when the slice is not exactly
    /// `KEY_SIZE` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        let arr: [u8; KEY_SIZE] = bytes.try_into().map_err(|_| KeyError::InvalidLength {
            expected: KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }

    /// Construct from a hex string.
    ///
    /// Supports an optional `0x` prefix and surrounding whitespace, matching
    /// how keys arrive from environment variables and key files.
    ///
    /// # Errors
    /// Returns `KeyError::HexDecode` for malformed hex and
    /// `KeyError::InvalidLength` when the decoded material is not
    /// `KEY_SIZE` bytes.
    pub fn from_hex(hex_str: &str) -> Result<Self, KeyError> {
        let trimmed = hex_str.trim().trim_start_matches("0x");
        let decoded: Zeroizing<Vec<u8>> = Zeroizing::new(hex::decode(trimmed)?);
        Self::from_slice(&decoded)
    }

    /// Borrow the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Redacted: key material must never reach logs.
        write!(f, "SecretKey(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_exact_length() {
        let key = SecretKey::from_slice(&[7u8; KEY_SIZE]).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; KEY_SIZE]);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = SecretKey::from_slice(&[0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            KeyError::InvalidLength {
                expected: KEY_SIZE,
                actual: 16
            }
        ));
    }

    #[test]
    fn test_from_hex_with_prefix_and_whitespace() {
        let hex = format!("  0x{}\n", "ab".repeat(KEY_SIZE));
        let key = SecretKey::from_hex(&hex).unwrap();
        assert_eq!(key.as_bytes(), &[0xab; KEY_SIZE]);
    }

    #[test]
    fn test_from_hex_rejects_short_material() {
        let err = SecretKey::from_hex("0xabcd").unwrap_err();
        assert!(matches!(err, KeyError::InvalidLength { actual: 2, .. }));
    }

    #[test]
    fn test_from_hex_rejects_garbage() {
        let err = SecretKey::from_hex("zz").unwrap_err();
        assert!(matches!(err, KeyError::HexDecode(_)));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SecretKey::from_bytes([0x42; KEY_SIZE]);
        let debug = format!("{key:?}");
        assert_eq!(debug, "SecretKey(..)");
        assert!(!debug.contains("42"));
    }
}
