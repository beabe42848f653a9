//! Signature value type.

use std::fmt;

use crate::error::SigningError;

/// Signature size in bytes (256-bit HMAC output).
pub const SIGNATURE_SIZE: usize = 32;

/// Fixed-length authentication code over (key, payload).
///
/// A pure function of its inputs with no lifecycle of its own: created and
/// consumed per call. Signatures are not secret, so hex display is fine.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature([u8; SIGNATURE_SIZE]);

impl Signature {
    /// Wrap exactly `SIGNATURE_SIZE` bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Construct from a byte slice.
    ///
    /// # Errors
    /// Returns `SigningError::InvalidLength` when the slice is not exactly
    /// `SIGNATURE_SIZE` bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, SigningError> {
        let arr: [u8; SIGNATURE_SIZE] =
            bytes.try_into().map_err(|_| SigningError::InvalidLength {
                expected: SIGNATURE_SIZE,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Borrow the raw signature bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(self.0))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice_exact_length() {
        let sig = Signature::from_slice(&[9u8; SIGNATURE_SIZE]).unwrap();
        assert_eq!(sig.as_bytes(), &[9u8; SIGNATURE_SIZE]);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = Signature::from_slice(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            SigningError::InvalidLength {
                expected: SIGNATURE_SIZE,
                actual: 31
            }
        ));
    }

    #[test]
    fn test_display_is_hex() {
        let sig = Signature::from_bytes([0xab; SIGNATURE_SIZE]);
        assert_eq!(sig.to_string(), "ab".repeat(SIGNATURE_SIZE));
    }
}
