//! Transport trait for the execution boundary.
//!
//! Abstracts the hop to the external execution venue so the adapter can be
//! exercised against a mock in tests and bound to a real transport in
//! production without changing the submission logic.

use std::collections::VecDeque;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tw_core::OrderId;

/// Boxed future for dyn-compatible async trait methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn std::future::Future<Output = T> + Send + 'a>>;

/// Result of one submission attempt at the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitResult {
    /// The execution boundary accepted the order.
    Accepted,
    /// The execution boundary rejected the order.
    Rejected(String),
    /// Transport is disconnected; nothing was dispatched.
    Disconnected,
    /// Transport-level failure. Not retryable.
    Error(String),
}

impl SubmitResult {
    /// Whether the boundary acknowledged the order (either way).
    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, SubmitResult::Accepted | SubmitResult::Rejected(_))
    }

    /// Whether the failure is worth retrying.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, SubmitResult::Disconnected)
    }
}

/// Trait for dispatching orders to the execution boundary.
pub trait OrderTransport: Send + Sync {
    /// Dispatch one order and await the boundary's response.
    ///
    /// Suspension happens inside the returned future; the caller decides
    /// how long to wait and when to give up.
    fn submit<'a>(&'a self, order_id: OrderId, payload: &'a [u8]) -> BoxFuture<'a, SubmitResult>;

    /// Whether the transport is currently able to dispatch.
    fn is_ready(&self) -> bool;
}

/// Arc wrapper for transport trait objects.
pub type DynTransport = Arc<dyn OrderTransport>;

/// Transport that accepts every order locally.
///
/// Stands in for the execution boundary when no venue is wired up; useful
/// for demos and end-to-end smoke runs.
#[derive(Debug, Default)]
pub struct LoopbackTransport;

impl LoopbackTransport {
    /// Create a loopback transport.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl OrderTransport for LoopbackTransport {
    fn submit<'a>(&'a self, _order_id: OrderId, _payload: &'a [u8]) -> BoxFuture<'a, SubmitResult> {
        Box::pin(async { SubmitResult::Accepted })
    }

    fn is_ready(&self) -> bool {
        true
    }
}

/// Mock transport for testing.
#[derive(Debug)]
pub struct MockTransport {
    /// Recorded submissions for verification.
    sends: parking_lot::Mutex<Vec<(OrderId, Vec<u8>)>>,
    /// Scripted results, consumed front to back; empty means `Accepted`.
    script: parking_lot::Mutex<VecDeque<SubmitResult>>,
    /// Artificial response delay.
    delay: parking_lot::Mutex<Option<Duration>>,
    /// Whether the mock reports ready.
    ready: AtomicBool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    /// Create a mock that accepts everything immediately.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sends: parking_lot::Mutex::new(Vec::new()),
            script: parking_lot::Mutex::new(VecDeque::new()),
            delay: parking_lot::Mutex::new(None),
            ready: AtomicBool::new(true),
        }
    }

    /// Queue a result to return for the next submission.
    pub fn enqueue_result(&self, result: SubmitResult) {
        self.script.lock().push_back(result);
    }

    /// Delay every response by `delay` (e.g. to exercise timeouts).
    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    /// Set whether the mock reports ready.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Recorded submissions.
    #[must_use]
    pub fn sends(&self) -> Vec<(OrderId, Vec<u8>)> {
        self.sends.lock().clone()
    }

    /// Number of recorded submissions.
    #[must_use]
    pub fn send_count(&self) -> usize {
        self.sends.lock().len()
    }

    /// Clear recorded submissions.
    pub fn clear_sends(&self) {
        self.sends.lock().clear();
    }
}

impl OrderTransport for MockTransport {
    fn submit<'a>(&'a self, order_id: OrderId, payload: &'a [u8]) -> BoxFuture<'a, SubmitResult> {
        let payload = payload.to_vec();
        Box::pin(async move {
            // Record at dispatch time, before the (possibly cancelled) wait
            // for the acknowledgement.
            self.sends.lock().push((order_id, payload));
            let delay = *self.delay.lock();
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }
            self.script
                .lock()
                .pop_front()
                .unwrap_or(SubmitResult::Accepted)
        })
    }

    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_result_properties() {
        assert!(SubmitResult::Accepted.is_acknowledged());
        assert!(SubmitResult::Rejected("margin".into()).is_acknowledged());
        assert!(!SubmitResult::Disconnected.is_acknowledged());

        assert!(SubmitResult::Disconnected.is_retryable());
        assert!(!SubmitResult::Accepted.is_retryable());
        assert!(!SubmitResult::Error("boom".into()).is_retryable());
    }

    #[tokio::test]
    async fn test_mock_records_sends() {
        let transport = MockTransport::new();
        let result = transport.submit(OrderId(1), b"payload").await;

        assert_eq!(result, SubmitResult::Accepted);
        assert_eq!(transport.send_count(), 1);
        assert_eq!(transport.sends()[0], (OrderId(1), b"payload".to_vec()));
    }

    #[tokio::test]
    async fn test_mock_scripted_results_in_order() {
        let transport = MockTransport::new();
        transport.enqueue_result(SubmitResult::Disconnected);
        transport.enqueue_result(SubmitResult::Rejected("margin".into()));

        assert_eq!(
            transport.submit(OrderId(1), b"a").await,
            SubmitResult::Disconnected
        );
        assert_eq!(
            transport.submit(OrderId(2), b"b").await,
            SubmitResult::Rejected("margin".into())
        );
        // Script exhausted: back to accepting.
        assert_eq!(
            transport.submit(OrderId(3), b"c").await,
            SubmitResult::Accepted
        );
    }

    #[tokio::test]
    async fn test_loopback_accepts_everything() {
        let transport = LoopbackTransport::new();
        assert!(transport.is_ready());
        assert_eq!(
            transport.submit(OrderId(1), b"anything").await,
            SubmitResult::Accepted
        );
    }
}
