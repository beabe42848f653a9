//! Application wiring.

use std::sync::Arc;

use tracing::{info, warn};

use tw_core::OrderAck;
use tw_exec::{ExecutionAdapter, LoopbackTransport, OrderSigner};
use tw_keys::MemoryKeyProvider;
use tw_signing::SigningService;

use crate::config::AppConfig;
use crate::error::AppResult;

/// The wired-up gateway: one key provider, one signing service, one
/// execution adapter.
pub struct Application {
    signing: Arc<SigningService>,
    adapter: ExecutionAdapter,
}

impl Application {
    /// Build the application from configuration.
    ///
    /// The signing key comes from the configured source (env var or file);
    /// absent that, it is derived deterministically from `keygen_seed`.
    ///
    /// # Errors
    /// Key loading and provider failures surface as `AppError`.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let provider = Arc::new(MemoryKeyProvider::new());
        let signing = Arc::new(SigningService::new(provider));

        let key_id = config.signing.key_id.clone();
        match config.signing.key_source() {
            Some(source) => {
                let key = source.load()?;
                signing.store_key(&key_id, key)?;
                info!(key_id = %key_id, "loaded signing key from configured source");
            }
            None => {
                let seed = match config.signing.keygen_seed {
                    Some(seed) => seed,
                    None => {
                        warn!("no signing key source configured; deriving development key");
                        0
                    }
                };
                signing.provision_key(&key_id, seed)?;
                info!(key_id = %key_id, "derived signing key from seed");
            }
        }

        let adapter = ExecutionAdapter::with_signer(
            config.exec,
            Arc::new(LoopbackTransport::new()),
            OrderSigner::new(Arc::clone(&signing), key_id),
        );

        Ok(Self { signing, adapter })
    }

    /// The signing service.
    #[must_use]
    pub fn signing(&self) -> &Arc<SigningService> {
        &self.signing
    }

    /// The execution adapter.
    #[must_use]
    pub fn adapter(&self) -> &ExecutionAdapter {
        &self.adapter
    }

    /// Submit one demo order through the full path and return its ack.
    ///
    /// # Errors
    /// Submission failures surface as `AppError`.
    pub async fn run_demo(&self) -> AppResult<OrderAck> {
        let order = serde_json::json!({
            "symbol": "BTC-PERP",
            "quantity": "0.25",
            "price": "50000",
            "side": "buy",
        });
        let payload = serde_json::to_vec(&order)?;

        let ack = self.adapter.send_order(&payload).await?;
        info!(
            order_id = %ack.order_id,
            accepted = ack.accepted,
            "demo order acknowledged"
        );
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_demo_round_trip_over_loopback() {
        let app = Application::new(AppConfig::default()).unwrap();
        let ack = app.run_demo().await.unwrap();

        assert!(ack.accepted);
        assert_eq!(ack.order_id.value(), 1);
    }

    #[tokio::test]
    async fn test_seeded_key_is_deterministic_across_instances() {
        let config = AppConfig {
            signing: crate::config::SigningConfig {
                keygen_seed: Some(42),
                ..Default::default()
            },
            ..Default::default()
        };

        let app1 = Application::new(config.clone()).unwrap();
        let app2 = Application::new(config).unwrap();

        let k1 = app1.signing().get_key("trading").unwrap();
        let k2 = app2.signing().get_key("trading").unwrap();
        assert_eq!(k1.as_bytes(), k2.as_bytes());
    }

    #[tokio::test]
    async fn test_adapter_rejects_empty_payload() {
        let app = Application::new(AppConfig::default()).unwrap();
        let err = app.adapter().send_order(b"").await.unwrap_err();
        assert!(matches!(err, tw_exec::ExecError::Validation(_)));
    }
}
