//! Execution error taxonomy.
//!
//! Validation failures are deterministic for a given input and are never
//! retried. Transient connection failures are retried a bounded number of
//! times before surfacing. `Timeout` marks an ambiguous outcome (the order
//! state is unknown) and is never folded into plain rejection. Messages
//! stay generic: no payload bytes, no byte offsets, no key material.

use rust_decimal::Decimal;
use thiserror::Error;
use tw_signing::SigningError;

/// Reason an order failed pre-trade validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionReason {
    #[error("order payload is empty")]
    EmptyPayload,

    #[error("order payload of {actual} bytes exceeds the {limit}-byte limit")]
    PayloadTooLarge { limit: usize, actual: usize },

    #[error("structured order payload is not a valid order document")]
    MalformedOrder,

    #[error("structured order is missing a symbol")]
    MissingSymbol,

    #[error("order quantity must be positive")]
    NonPositiveQuantity,

    #[error("order quantity exceeds the configured limit of {limit}")]
    MaxOrderQuantity { limit: Decimal },

    #[error("order notional exceeds the configured limit of {limit}")]
    MaxNotional { limit: Decimal },
}

/// Errors surfaced by `send_order`.
#[derive(Debug, Error)]
pub enum ExecError {
    /// Pre-trade check failed. Terminal; never retried.
    #[error("Validation failed: {0}")]
    Validation(#[from] RejectionReason),

    /// Transport to the execution boundary unavailable after the configured
    /// retries. Terminal for this call.
    #[error("Connection error: {0}")]
    Connection(String),

    /// No acknowledgement within the configured window. The order state is
    /// unknown; callers must reconcile rather than blindly re-submit.
    #[error("No acknowledgement within the configured window")]
    Timeout,

    /// Caller cancelled the submission. Terminal.
    #[error("Submission cancelled by caller")]
    Cancelled,

    /// Signing the outgoing payload failed.
    #[error("Signing failed: {0}")]
    Signing(#[from] SigningError),
}

pub type ExecResult<T> = Result<T, ExecError>;
