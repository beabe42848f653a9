//! Execution adapter configuration.

use std::time::Duration;

use rand::Rng;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Business risk limits supplied by the surrounding system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskLimits {
    /// Maximum quantity for a single order.
    #[serde(default = "default_max_order_quantity")]
    pub max_order_quantity: Decimal,
    /// Maximum notional (quantity * price) for a single order.
    #[serde(default = "default_max_notional")]
    pub max_notional: Decimal,
}

fn default_max_order_quantity() -> Decimal {
    Decimal::from(10_000u64)
}

fn default_max_notional() -> Decimal {
    Decimal::from(1_000_000u64)
}

impl Default for RiskLimits {
    fn default() -> Self {
        Self {
            max_order_quantity: default_max_order_quantity(),
            max_notional: default_max_notional(),
        }
    }
}

/// Execution adapter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecConfig {
    /// Maximum accepted order payload size in bytes. Default: 65536.
    #[serde(default = "default_max_payload_bytes")]
    pub max_payload_bytes: usize,
    /// Acknowledgement window for one logical submission (ms). Default: 5000.
    #[serde(default = "default_ack_timeout_ms")]
    pub ack_timeout_ms: u64,
    /// Maximum retries after a transient transport failure. Default: 3.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// Base delay for exponential backoff (ms). Default: 100.
    #[serde(default = "default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,
    /// Maximum backoff delay (ms). Default: 5000.
    #[serde(default = "default_retry_max_delay_ms")]
    pub retry_max_delay_ms: u64,
    /// Jitter applied to each backoff delay (fraction of the delay).
    /// Default: 0.3.
    #[serde(default = "default_retry_jitter_factor")]
    pub retry_jitter_factor: f64,
    /// Business risk limits.
    #[serde(default)]
    pub risk: RiskLimits,
}

fn default_max_payload_bytes() -> usize {
    65_536
}

fn default_ack_timeout_ms() -> u64 {
    5_000
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_base_delay_ms() -> u64 {
    100
}

fn default_retry_max_delay_ms() -> u64 {
    5_000
}

fn default_retry_jitter_factor() -> f64 {
    0.3
}

impl Default for ExecConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
            ack_timeout_ms: default_ack_timeout_ms(),
            max_retries: default_max_retries(),
            retry_base_delay_ms: default_retry_base_delay_ms(),
            retry_max_delay_ms: default_retry_max_delay_ms(),
            retry_jitter_factor: default_retry_jitter_factor(),
            risk: RiskLimits::default(),
        }
    }
}

impl ExecConfig {
    /// Acknowledgement window as a `Duration`.
    #[must_use]
    pub fn ack_timeout(&self) -> Duration {
        Duration::from_millis(self.ack_timeout_ms)
    }

    /// Calculate the backoff delay for a retry attempt (1-based), with
    /// exponential growth, a cap, and jitter.
    #[must_use]
    pub fn retry_delay(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(16);
        let base = self.retry_base_delay_ms as f64 * 2.0_f64.powi(exp as i32);
        let clamped = base.min(self.retry_max_delay_ms as f64);

        let jitter_range = clamped * self.retry_jitter_factor;
        let jitter: f64 = if jitter_range > 0.0 {
            rand::thread_rng().gen_range(-jitter_range..=jitter_range)
        } else {
            0.0
        };

        Duration::from_millis((clamped + jitter).max(0.0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExecConfig::default();
        assert_eq!(config.max_payload_bytes, 65_536);
        assert_eq!(config.ack_timeout(), Duration::from_millis(5_000));
        assert_eq!(config.max_retries, 3);
    }

    #[test]
    fn test_retry_delay_grows_and_caps() {
        let config = ExecConfig {
            retry_jitter_factor: 0.0,
            ..ExecConfig::default()
        };

        assert_eq!(config.retry_delay(1), Duration::from_millis(100));
        assert_eq!(config.retry_delay(2), Duration::from_millis(200));
        assert_eq!(config.retry_delay(3), Duration::from_millis(400));
        // Capped at retry_max_delay_ms.
        assert_eq!(config.retry_delay(10), Duration::from_millis(5_000));
    }

    #[test]
    fn test_retry_delay_jitter_stays_in_range() {
        let config = ExecConfig::default();
        for attempt in 1..=5 {
            let delay = config.retry_delay(attempt).as_millis() as f64;
            let nominal = (config.retry_base_delay_ms as f64
                * 2.0_f64.powi(attempt as i32 - 1))
            .min(config.retry_max_delay_ms as f64);
            assert!(delay <= nominal * (1.0 + config.retry_jitter_factor) + 1.0);
            assert!(delay >= (nominal * (1.0 - config.retry_jitter_factor) - 1.0).max(0.0));
        }
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: ExecConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.risk.max_order_quantity, Decimal::from(10_000u64));
    }
}
