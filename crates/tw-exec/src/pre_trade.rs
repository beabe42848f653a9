//! Pre-trade validation.

use rust_decimal::Decimal;
use tw_core::OrderDetails;

use crate::config::ExecConfig;
use crate::error::RejectionReason;

/// Validate an order payload before submission.
///
/// Structural constraints apply to every payload: non-empty, within the
/// configured size bound. Structured (JSON) payloads additionally get
/// field-level and risk-limit checks. Opaque payloads pass with structural
/// checks only; the execution boundary owns their interpretation.
///
/// Side-effect-free and performs no I/O, so it can run on every order
/// without contributing materially to the latency budget.
///
/// # Errors
/// Returns the first violated constraint as a [`RejectionReason`].
pub fn pre_trade_check(payload: &[u8], config: &ExecConfig) -> Result<(), RejectionReason> {
    if payload.is_empty() {
        return Err(RejectionReason::EmptyPayload);
    }
    if payload.len() > config.max_payload_bytes {
        return Err(RejectionReason::PayloadTooLarge {
            limit: config.max_payload_bytes,
            actual: payload.len(),
        });
    }

    if !OrderDetails::looks_structured(payload) {
        return Ok(());
    }

    let details = OrderDetails::parse(payload).map_err(|_| RejectionReason::MalformedOrder)?;

    if details.symbol.trim().is_empty() {
        return Err(RejectionReason::MissingSymbol);
    }
    if details.quantity <= Decimal::ZERO {
        return Err(RejectionReason::NonPositiveQuantity);
    }

    let limits = &config.risk;
    if details.quantity > limits.max_order_quantity {
        return Err(RejectionReason::MaxOrderQuantity {
            limit: limits.max_order_quantity,
        });
    }
    if let Some(price) = details.price {
        let notional = details.quantity * price;
        if notional > limits.max_notional {
            return Err(RejectionReason::MaxNotional {
                limit: limits.max_notional,
            });
        }
    }

    Ok(())
}
