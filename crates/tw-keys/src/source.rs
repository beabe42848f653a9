//! Key loading from the process environment.

use std::path::PathBuf;

use crate::error::KeyError;
use crate::key::SecretKey;

/// Source of a hex-encoded key.
#[derive(Debug, Clone)]
pub enum KeySource {
    /// Load from environment variable (development).
    EnvVar { var_name: String },
    /// Load from file (production, recommend 0600 permissions).
    File { path: PathBuf },
}

impl KeySource {
    /// Load and decode the key from this source.
    ///
    /// Supports a `0x` prefix and whitespace trimming; intermediate buffers
    /// are zeroed after decoding.
    ///
    /// # Errors
    /// Returns `KeyError` if:
    /// - Environment variable not found
    /// - File read fails
    /// - Hex decoding fails
    /// - Decoded material is not exactly `KEY_SIZE` bytes
    pub fn load(&self) -> Result<SecretKey, KeyError> {
        match self {
            KeySource::EnvVar { var_name } => {
                let hex = std::env::var(var_name)
                    .map_err(|_| KeyError::EnvVarNotFound(var_name.clone()))?;
                SecretKey::from_hex(&hex)
            }
            KeySource::File { path } => {
                let content = std::fs::read_to_string(path)?;
                SecretKey::from_hex(&content)
            }
        }
    }
}
