//! The execution adapter.

use std::sync::Arc;
use std::time::Instant;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, trace, warn};

use tw_core::{OrderAck, OrderId, OrderIdGenerator};
use tw_signing::SigningService;
use tw_telemetry::Metrics;

use crate::config::ExecConfig;
use crate::error::{ExecError, ExecResult};
use crate::pre_trade::pre_trade_check;
use crate::transport::{DynTransport, SubmitResult};

/// Signing attachment for outgoing orders.
///
/// When present, the adapter authenticates each accepted payload with the
/// key stored under `key_id` and appends the signature to the wire bytes.
pub struct OrderSigner {
    service: Arc<SigningService>,
    key_id: String,
}

impl OrderSigner {
    /// Attach `service` using the key stored under `key_id`.
    #[must_use]
    pub fn new(service: Arc<SigningService>, key_id: impl Into<String>) -> Self {
        Self {
            service,
            key_id: key_id.into(),
        }
    }
}

/// Order submission frontend.
///
/// The order-identifier counter is the adapter's only mutable shared state;
/// everything else is read-only configuration and shared handles, so one
/// instance serves any number of concurrent callers.
pub struct ExecutionAdapter {
    config: ExecConfig,
    transport: DynTransport,
    order_ids: OrderIdGenerator,
    signer: Option<OrderSigner>,
}

impl ExecutionAdapter {
    /// Create an adapter over `transport`.
    #[must_use]
    pub fn new(config: ExecConfig, transport: DynTransport) -> Self {
        Self {
            config,
            transport,
            order_ids: OrderIdGenerator::new(),
            signer: None,
        }
    }

    /// Create an adapter that signs outgoing orders.
    #[must_use]
    pub fn with_signer(config: ExecConfig, transport: DynTransport, signer: OrderSigner) -> Self {
        Self {
            config,
            transport,
            order_ids: OrderIdGenerator::new(),
            signer: Some(signer),
        }
    }

    /// Adapter configuration.
    #[must_use]
    pub fn config(&self) -> &ExecConfig {
        &self.config
    }

    /// Last order identifier issued, or 0 if none yet.
    #[must_use]
    pub fn last_order_id(&self) -> u64 {
        self.order_ids.last_issued()
    }

    /// Run pre-trade validation without submitting.
    ///
    /// # Errors
    /// Returns the first violated constraint.
    pub fn pre_trade_check(&self, payload: &[u8]) -> Result<(), crate::error::RejectionReason> {
        pre_trade_check(payload, &self.config)
    }

    /// Submit one order and await its acknowledgement.
    ///
    /// Equivalent to [`Self::send_order_cancellable`] with a token nobody
    /// cancels.
    ///
    /// # Errors
    /// See [`ExecError`] for the taxonomy.
    pub async fn send_order(&self, payload: &[u8]) -> ExecResult<OrderAck> {
        let token = CancellationToken::new();
        self.send_order_cancellable(payload, &token).await
    }

    /// Submit one order with cooperative cancellation.
    ///
    /// The pre-trade check runs first and fails fast with no order id
    /// allocated. On pass the payload is (optionally) signed and dispatched;
    /// transient transport failures are retried with bounded exponential
    /// backoff, all inside one acknowledgement window. Retries are collapsed
    /// into this single logical call.
    ///
    /// Cancellation observed before dispatch means nothing was sent. After
    /// dispatch the in-flight wait is abandoned and `Cancelled` is returned;
    /// an acknowledgement is never delivered after cancellation.
    ///
    /// # Errors
    /// `Validation` (terminal, deterministic), `Connection` (after retries),
    /// `Timeout` (outcome unknown), `Cancelled`, `Signing`.
    pub async fn send_order_cancellable(
        &self,
        payload: &[u8],
        cancel: &CancellationToken,
    ) -> ExecResult<OrderAck> {
        let started = Instant::now();
        Metrics::order_stage("received");
        trace!(payload_len = payload.len(), "order received");

        if let Err(reason) = pre_trade_check(payload, &self.config) {
            let check_us = started.elapsed().as_micros() as f64;
            Metrics::order_stage("checked");
            Metrics::operation("pre_trade_check", "rejected");
            Metrics::operation_latency("pre_trade_check", check_us);
            Metrics::order_outcome("validation_failed");
            warn!(%reason, "pre-trade check rejected order");
            return Err(reason.into());
        }
        let check_us = started.elapsed().as_micros() as f64;
        Metrics::order_stage("checked");
        Metrics::operation("pre_trade_check", "ok");
        Metrics::operation_latency("pre_trade_check", check_us);

        let order_id = self.order_ids.next();
        debug!(%order_id, check_us, "pre-trade check passed");

        let signed;
        let wire: &[u8] = match &self.signer {
            Some(signer) => {
                let sig = match signer.service.sign_with(&signer.key_id, payload) {
                    Ok(sig) => sig,
                    Err(e) => {
                        Metrics::order_outcome("signing_failed");
                        warn!(%order_id, "failed to sign outgoing order");
                        return Err(e.into());
                    }
                };
                signed = [payload, sig.as_bytes().as_slice()].concat();
                &signed
            }
            None => payload,
        };

        let outcome = self.dispatch(order_id, wire, cancel).await;

        let elapsed_us = started.elapsed().as_micros() as f64;
        Metrics::operation_latency("send_order", elapsed_us);
        match &outcome {
            Ok(ack) if ack.accepted => {
                Metrics::operation("send_order", "ok");
                Metrics::order_outcome("accepted");
                info!(%order_id, elapsed_us, "order acknowledged: accepted");
            }
            Ok(_) => {
                Metrics::operation("send_order", "ok");
                Metrics::order_outcome("rejected");
                info!(%order_id, elapsed_us, "order acknowledged: rejected");
            }
            Err(ExecError::Timeout) => {
                Metrics::operation("send_order", "timeout");
                Metrics::order_outcome("timeout");
                warn!(%order_id, elapsed_us, "no acknowledgement within window");
            }
            Err(ExecError::Cancelled) => {
                Metrics::operation("send_order", "cancelled");
                Metrics::order_outcome("cancelled");
                debug!(%order_id, elapsed_us, "submission cancelled");
            }
            Err(_) => {
                Metrics::operation("send_order", "connection_failed");
                Metrics::order_outcome("connection_failed");
                warn!(%order_id, elapsed_us, "submission failed");
            }
        }

        outcome
    }

    /// Dispatch loop: bounded retries inside one acknowledgement window.
    async fn dispatch(
        &self,
        order_id: OrderId,
        wire: &[u8],
        cancel: &CancellationToken,
    ) -> ExecResult<OrderAck> {
        let deadline = tokio::time::Instant::now() + self.config.ack_timeout();
        let mut attempt: u32 = 0;

        loop {
            if cancel.is_cancelled() {
                return Err(ExecError::Cancelled);
            }

            Metrics::order_stage("submitted");
            trace!(%order_id, attempt, "dispatching order");

            let result = tokio::select! {
                () = cancel.cancelled() => return Err(ExecError::Cancelled),
                () = tokio::time::sleep_until(deadline) => return Err(ExecError::Timeout),
                result = self.transport.submit(order_id, wire) => result,
            };

            match result {
                SubmitResult::Accepted => {
                    Metrics::order_stage("acknowledged");
                    return Ok(OrderAck::accepted(order_id));
                }
                SubmitResult::Rejected(reason) => {
                    Metrics::order_stage("acknowledged");
                    return Ok(OrderAck::rejected(order_id, reason));
                }
                SubmitResult::Disconnected => {
                    if attempt >= self.config.max_retries {
                        return Err(ExecError::Connection(
                            "execution boundary unreachable after retries".into(),
                        ));
                    }
                    attempt += 1;
                    Metrics::send_retry();
                    let delay = self.config.retry_delay(attempt);
                    debug!(%order_id, attempt, ?delay, "transport disconnected, backing off");

                    // Nothing was dispatched, so expiring here is a
                    // connection failure, not an ambiguous timeout.
                    tokio::select! {
                        () = cancel.cancelled() => return Err(ExecError::Cancelled),
                        () = tokio::time::sleep_until(deadline) => {
                            return Err(ExecError::Connection(
                                "execution boundary unreachable within the acknowledgement window"
                                    .into(),
                            ))
                        }
                        () = tokio::time::sleep(delay) => {}
                    }
                }
                SubmitResult::Error(e) => return Err(ExecError::Connection(e)),
            }
        }
    }
}
