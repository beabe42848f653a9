//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tw_exec::ExecConfig;
use tw_keys::KeySource;

use crate::error::{AppError, AppResult};

/// Signing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SigningConfig {
    /// Identifier the signing key is stored under. Default: "trading".
    #[serde(default = "default_key_id")]
    pub key_id: String,
    /// Environment variable holding a hex-encoded key (development).
    #[serde(default)]
    pub key_env: Option<String>,
    /// File holding a hex-encoded key (production, recommend 0600).
    #[serde(default)]
    pub key_file: Option<PathBuf>,
    /// Seed for deterministic derivation when no external key is supplied.
    #[serde(default)]
    pub keygen_seed: Option<u64>,
}

fn default_key_id() -> String {
    "trading".to_string()
}

impl Default for SigningConfig {
    fn default() -> Self {
        Self {
            key_id: default_key_id(),
            key_env: None,
            key_file: None,
            keygen_seed: None,
        }
    }
}

impl SigningConfig {
    /// Resolve the external key source, if one is configured.
    ///
    /// Environment variable takes precedence over the key file.
    #[must_use]
    pub fn key_source(&self) -> Option<KeySource> {
        if let Some(var_name) = &self.key_env {
            return Some(KeySource::EnvVar {
                var_name: var_name.clone(),
            });
        }
        self.key_file
            .as_ref()
            .map(|path| KeySource::File { path: path.clone() })
    }
}

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub signing: SigningConfig,
    #[serde(default)]
    pub exec: ExecConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| AppError::Config(format!("Failed to read config: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse config: {e}")))
    }
}
