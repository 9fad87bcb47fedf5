use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};

use crate::core::ProbeError;

/// Why a [`CheckContext`] stopped waiting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// `cancel()` was called
    Cancelled,
    /// The batch deadline elapsed
    DeadlineExceeded,
}

impl From<CancelReason> for ProbeError {
    fn from(reason: CancelReason) -> Self {
        match reason {
            CancelReason::Cancelled => ProbeError::Cancelled,
            CancelReason::DeadlineExceeded => ProbeError::DeadlineExceeded,
        }
    }
}

/// Deadline and cancellation signal shared by every probe of one batch.
///
/// Clones share the same signal, so cancelling any clone cancels them all.
/// Probes observe it by racing their request against [`CheckContext::cancelled`];
/// the losing request future is dropped, which aborts it.
#[derive(Debug, Clone)]
pub struct CheckContext {
    deadline: Instant,
    cancel_tx: Arc<watch::Sender<bool>>,
}

impl CheckContext {
    /// Context whose deadline is `timeout` from now.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self {
            deadline,
            cancel_tx: Arc::new(cancel_tx),
        }
    }

    /// Cancel every probe still waiting on this context.
    pub fn cancel(&self) {
        self.cancel_tx.send_replace(true);
    }

    /// Returns the reason if the context is already done.
    pub fn cancel_reason(&self) -> Option<CancelReason> {
        if *self.cancel_tx.borrow() {
            Some(CancelReason::Cancelled)
        } else if Instant::now() >= self.deadline {
            Some(CancelReason::DeadlineExceeded)
        } else {
            None
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_reason().is_some()
    }

    /// Resolves once the context is cancelled or its deadline elapses.
    pub async fn cancelled(&self) -> CancelReason {
        let mut cancel_rx = self.cancel_tx.subscribe();
        tokio::select! {
            biased;
            _ = cancel_rx.wait_for(|cancelled| *cancelled) => CancelReason::Cancelled,
            _ = sleep_until(self.deadline) => CancelReason::DeadlineExceeded,
        }
    }
}
