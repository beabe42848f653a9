//! Pre-trade validation and asynchronous order submission.
//!
//! The adapter is the execution frontend for opaque order payloads:
//!
//! 1. `pre_trade_check` runs structural and risk-limit validation with no
//!    I/O, so it can run on every order without touching the latency budget.
//! 2. `send_order` dispatches the payload to the execution boundary behind
//!    the [`OrderTransport`] trait and awaits acknowledgement, with bounded
//!    retries on transient transport failures, a configurable
//!    acknowledgement timeout, and cooperative cancellation.
//!
//! Order lifecycle: Received -> PreTradeChecked -> Submitted ->
//! Acknowledged. A failed check exits early; submission is never attempted.
//! Each stage emits one structured telemetry event carrying the order id,
//! outcome and latency. Payload bytes never appear in events.

pub mod adapter;
pub mod config;
pub mod error;
pub mod pre_trade;
pub mod transport;

pub use adapter::{ExecutionAdapter, OrderSigner};
pub use config::{ExecConfig, RiskLimits};
pub use error::{ExecError, ExecResult, RejectionReason};
pub use pre_trade::pre_trade_check;
pub use transport::{
    BoxFuture, DynTransport, LoopbackTransport, MockTransport, OrderTransport, SubmitResult,
};
