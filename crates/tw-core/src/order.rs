//! Order identifiers, acknowledgements and the structured payload view.
//!
//! Order payloads are opaque bytes supplied by the caller. The core never
//! interprets them beyond what pre-trade checks require; when a payload is
//! JSON it can be parsed into [`OrderDetails`] for field-level validation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Process-unique order identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl OrderId {
    /// Raw identifier value.
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Acknowledgement for one submission attempt.
///
/// Created once per attempt, immutable after creation. The adapter returns
/// it to the caller and does not retain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAck {
    /// Identifier assigned to the order. Unique per process, never reused.
    pub order_id: OrderId,
    /// Whether the execution boundary accepted the order.
    pub accepted: bool,
    /// Human-readable reason when rejected.
    pub reason: Option<String>,
}

impl OrderAck {
    /// Acknowledgement for an accepted order.
    #[must_use]
    pub fn accepted(order_id: OrderId) -> Self {
        Self {
            order_id,
            accepted: true,
            reason: None,
        }
    }

    /// Acknowledgement for an order the boundary rejected.
    #[must_use]
    pub fn rejected(order_id: OrderId, reason: impl Into<String>) -> Self {
        Self {
            order_id,
            accepted: false,
            reason: Some(reason.into()),
        }
    }
}

/// Generates strictly increasing order identifiers.
///
/// # Guarantees
/// - Identifiers are unique within a process lifetime
/// - Identifiers are strictly increasing in issue order
/// - Identifiers are never reused, even after a rejection
/// - Thread-safe under concurrent submissions
#[derive(Debug)]
pub struct OrderIdGenerator {
    counter: AtomicU64,
}

impl OrderIdGenerator {
    /// Create a generator whose first issued id is 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(0),
        }
    }

    /// Issue the next identifier.
    pub fn next(&self) -> OrderId {
        OrderId(self.counter.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Last identifier issued, or 0 if none yet.
    #[must_use]
    pub fn last_issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }
}

impl Default for OrderIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Order side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    Buy,
    Sell,
}

/// Structured view of a JSON order payload.
///
/// Callers may submit either opaque bytes or a JSON document. Structured
/// payloads expose the fields pre-trade checks need; everything else in the
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderDetails {
    /// Instrument symbol.
    pub symbol: String,
    /// Order quantity.
    pub quantity: Decimal,
    /// Limit price, if any.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Order side, if present.
    #[serde(default)]
    pub side: Option<OrderSide>,
}

impl OrderDetails {
    /// Whether a payload looks like a JSON document.
    ///
    /// Leading ASCII whitespace is skipped before the check.
    #[must_use]
    pub fn looks_structured(payload: &[u8]) -> bool {
        payload
            .iter()
            .find(|b| !b.is_ascii_whitespace())
            .is_some_and(|b| *b == b'{')
    }

    /// Parse a JSON payload into its structured view.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidOrder` if the payload is not a valid JSON
    /// order document. The error message never echoes payload contents.
    pub fn parse(payload: &[u8]) -> Result<Self, CoreError> {
        serde_json::from_slice(payload)
            .map_err(|_| CoreError::InvalidOrder("payload is not a valid order document".into()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_id_generator_strictly_increasing() {
        let gen = OrderIdGenerator::new();
        let mut prev = 0u64;
        for _ in 0..1000 {
            let id = gen.next();
            assert!(id.value() > prev, "ids must be strictly increasing");
            prev = id.value();
        }
    }

    #[test]
    fn test_id_generator_concurrent_no_duplicates() {
        let gen = Arc::new(OrderIdGenerator::new());

        let num_threads = 8;
        let iterations_per_thread = 1000;

        let handles: Vec<_> = (0..num_threads)
            .map(|_| {
                let gen = Arc::clone(&gen);
                thread::spawn(move || {
                    let mut ids = Vec::with_capacity(iterations_per_thread);
                    for _ in 0..iterations_per_thread {
                        ids.push(gen.next().value());
                    }
                    ids
                })
            })
            .collect();

        let mut all_ids: Vec<u64> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        all_ids.sort_unstable();
        let original_len = all_ids.len();
        all_ids.dedup();

        assert_eq!(
            all_ids.len(),
            original_len,
            "all ids must be unique across threads"
        );
    }

    #[test]
    fn test_id_generator_starts_at_one() {
        let gen = OrderIdGenerator::new();
        assert_eq!(gen.last_issued(), 0);
        assert_eq!(gen.next(), OrderId(1));
        assert_eq!(gen.last_issued(), 1);
    }

    #[test]
    fn test_ack_constructors() {
        let ack = OrderAck::accepted(OrderId(7));
        assert!(ack.accepted);
        assert!(ack.reason.is_none());

        let nack = OrderAck::rejected(OrderId(8), "insufficient margin");
        assert!(!nack.accepted);
        assert_eq!(nack.reason.as_deref(), Some("insufficient margin"));
    }

    #[test]
    fn test_looks_structured() {
        assert!(OrderDetails::looks_structured(b"{\"symbol\":\"BTC\"}"));
        assert!(OrderDetails::looks_structured(b"  \n\t{\"symbol\":\"BTC\"}"));
        assert!(!OrderDetails::looks_structured(b"opaque payload"));
        assert!(!OrderDetails::looks_structured(b""));
    }

    #[test]
    fn test_parse_structured_payload() {
        let payload = br#"{"symbol":"BTC-PERP","quantity":"0.25","price":"50000","side":"buy"}"#;
        let details = OrderDetails::parse(payload).unwrap();

        assert_eq!(details.symbol, "BTC-PERP");
        assert_eq!(details.quantity, dec!(0.25));
        assert_eq!(details.price, Some(dec!(50000)));
        assert_eq!(details.side, Some(OrderSide::Buy));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = OrderDetails::parse(b"{not json").unwrap_err();
        assert!(matches!(err, CoreError::InvalidOrder(_)));
    }

    #[test]
    fn test_parse_optional_fields_default() {
        let payload = br#"{"symbol":"ETH-PERP","quantity":"1"}"#;
        let details = OrderDetails::parse(payload).unwrap();
        assert!(details.price.is_none());
        assert!(details.side.is_none());
    }
}
