//! Per-call options.
//!
//! Every facade method takes a [`CallOptions`] value carrying the concerns
//! that vary call-to-call: extra headers, an optional deadline, and an
//! optional [`AbortHandle`]. Options are consumed by one call and never
//! shared between calls.

use std::time::Duration;

use tokio::sync::watch;

/// Handle for aborting one in-flight call.
///
/// Clone the handle to keep one half at the call site; triggering
/// [`AbortHandle::abort`] makes the call fail with
/// [`quill_core::Error::Cancelled`] instead of producing a response.
/// Aborting is sticky and idempotent. Unrelated calls are unaffected.
#[derive(Debug, Clone)]
pub struct AbortHandle {
    tx: watch::Sender<bool>,
}

impl AbortHandle {
    /// Create a new, un-triggered handle.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx }
    }

    /// Abandon the call this handle was passed to.
    pub fn abort(&self) {
        self.tx.send_replace(true);
    }

    /// Returns `true` once [`AbortHandle::abort`] has been called.
    #[must_use]
    pub fn is_aborted(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once the handle is triggered; never resolves otherwise.
    pub(crate) async fn aborted(&self) {
        let mut rx = self.tx.subscribe();
        if rx.wait_for(|aborted| *aborted).await.is_err() {
            // Sender gone without an abort: stay pending.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for AbortHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Options applied to a single call, overriding client-wide defaults.
#[derive(Debug, Clone, Default)]
pub struct CallOptions {
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) deadline: Option<Duration>,
    pub(crate) abort: Option<AbortHandle>,
}

impl CallOptions {
    /// Create empty options: no extra headers, no deadline, not abortable.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a call-time header. Wins over client defaults and contract
    /// headers on name conflicts.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Fail the call with a timeout error if no response arrived within
    /// `deadline`. There is no default deadline.
    #[must_use]
    pub const fn deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Attach an abort handle to the call.
    #[must_use]
    pub fn abort_handle(mut self, handle: AbortHandle) -> Self {
        self.abort = Some(handle);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abort_handle_is_sticky() {
        let handle = AbortHandle::new();
        assert!(!handle.is_aborted());

        handle.abort();
        assert!(handle.is_aborted());

        // Idempotent
        handle.abort();
        assert!(handle.is_aborted());
    }

    #[test]
    fn abort_is_visible_through_clones() {
        let handle = AbortHandle::new();
        let clone = handle.clone();

        clone.abort();
        assert!(handle.is_aborted());
    }

    #[tokio::test]
    async fn aborted_resolves_after_trigger() {
        let handle = AbortHandle::new();
        handle.abort();
        // Triggered before awaiting: must still resolve immediately.
        handle.aborted().await;
    }

    #[test]
    fn options_accumulate_headers() {
        let options = CallOptions::new()
            .header("Authorization", "Bearer t")
            .header("X-Request-Id", "1");
        assert_eq!(options.headers.len(), 2);
        assert!(options.deadline.is_none());
        assert!(options.abort.is_none());
    }
}
