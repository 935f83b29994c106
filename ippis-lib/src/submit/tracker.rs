//! Latest-request tracking for async form submissions.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use log::debug;

/// Identifies one request issued by a [`RequestTracker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

/// Tracks which of several overlapping requests is the latest one.
///
/// A form that submits, gets closed and reopened, then submits again must
/// not apply the first answer when it arrives late. Each submission takes a
/// token from [`begin`](Self::begin); only the newest token's result is
/// handed back by [`finish`](Self::finish).
///
/// Clones share the same state.
///
/// # Example
///
/// ```
/// use ippis_lib::submit::RequestTracker;
///
/// let tracker = RequestTracker::new();
/// let first = tracker.begin();
/// let second = tracker.begin();
///
/// assert_eq!(tracker.finish(first, "stale"), None);
/// assert_eq!(tracker.finish(second, "fresh"), Some("fresh"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    generation: Arc<AtomicU64>,
    pending: Arc<AtomicBool>,
}

impl RequestTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a request, superseding any request in flight.
    pub fn begin(&self) -> RequestToken {
        let token = RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        self.pending.store(true, Ordering::SeqCst);
        token
    }

    /// Starts a request unless one is already in flight.
    ///
    /// This is the double-submit guard for a form's submit button.
    pub fn try_begin(&self) -> Option<RequestToken> {
        self.pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;
        Some(RequestToken(self.generation.fetch_add(1, Ordering::SeqCst) + 1))
    }

    /// Returns `true` while the latest request has not finished.
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::SeqCst)
    }

    /// Returns `true` if `token` belongs to the latest request.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generation.load(Ordering::SeqCst) == token.0
    }

    /// Supersedes the request in flight without starting a new one.
    ///
    /// Called when the form is closed.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.pending.store(false, Ordering::SeqCst);
    }

    /// Completes the request for `token`.
    ///
    /// Returns the result if the token is still current, `None` otherwise.
    pub fn finish<R>(&self, token: RequestToken, result: R) -> Option<R> {
        if !self.is_current(token) {
            debug!("Discarding result of superseded request {:?}", token);
            return None;
        }
        self.pending.store(false, Ordering::SeqCst);
        Some(result)
    }

    /// Runs `future` as a new request and returns its output if no newer
    /// request was started meanwhile.
    pub async fn run<F>(&self, future: F) -> Option<F::Output>
    where
        F: Future,
    {
        let token = self.begin();
        let output = future.await;
        self.finish(token, output)
    }
}
