//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Key error: {0}")]
    Key(#[from] tw_keys::KeyError),

    #[error("Key provider error: {0}")]
    Provider(#[from] tw_keys::ProviderError),

    #[error("Signing error: {0}")]
    Signing(#[from] tw_signing::SigningError),

    #[error("Execution error: {0}")]
    Exec(#[from] tw_exec::ExecError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] tw_telemetry::TelemetryError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
