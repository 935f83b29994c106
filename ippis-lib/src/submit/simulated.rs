//! Simulated submission backend.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};

use super::{Submitter, with_deadline};
use crate::error::SubmitError;

/// A backend that waits, then accepts or fails every submission.
///
/// Used by forms before a real endpoint exists and by tests that need a
/// slow or failing backend. Accepted payloads are kept and numbered from 1.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use ippis_lib::error::SubmitError;
/// use ippis_lib::submit::{SimulatedSubmitter, Submitter};
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), SubmitError> {
/// let backend = SimulatedSubmitter::new().with_latency(Duration::from_millis(50));
/// let id = backend.submit("new asset".to_string()).await?;
/// assert_eq!(id, 1);
/// assert_eq!(backend.received(), vec!["new asset".to_string()]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct SimulatedSubmitter<D> {
    latency: Duration,
    deadline: Option<Duration>,
    failure: Option<SubmitError>,
    next_id: AtomicU64,
    received: Arc<Mutex<Vec<D>>>,
}

impl<D> SimulatedSubmitter<D> {
    /// Default artificial latency.
    pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

    pub fn new() -> Self {
        Self {
            latency: Self::DEFAULT_LATENCY,
            deadline: None,
            failure: None,
            next_id: AtomicU64::new(1),
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Sets how long each submission takes.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Fails submissions that take longer than `deadline`.
    pub fn with_timeout(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Makes every submission fail with `error` after the latency.
    pub fn failing(mut self, error: SubmitError) -> Self {
        self.failure = Some(error);
        self
    }

    fn payloads(&self) -> MutexGuard<'_, Vec<D>> {
        self.received.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of accepted submissions.
    pub fn accepted(&self) -> usize {
        self.payloads().len()
    }
}

impl<D: Clone> SimulatedSubmitter<D> {
    /// Returns the accepted payloads, oldest first.
    pub fn received(&self) -> Vec<D> {
        self.payloads().clone()
    }
}

impl<D> Default for SimulatedSubmitter<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: Send + 'static> SimulatedSubmitter<D> {
    async fn accept(&self, data: D) -> Result<u64, SubmitError> {
        tokio::time::sleep(self.latency).await;

        if let Some(error) = &self.failure {
            warn!("Simulated submission failed: {}", error);
            return Err(error.clone());
        }

        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.payloads().push(data);
        debug!("Simulated submission accepted as #{}", id);
        Ok(id)
    }
}

#[async_trait]
impl<D: Send + Sync + 'static> Submitter<D> for SimulatedSubmitter<D> {
    type Id = u64;

    async fn submit(&self, data: D) -> Result<u64, SubmitError> {
        match self.deadline {
            Some(deadline) => with_deadline(deadline, self.accept(data)).await,
            None => self.accept(data).await,
        }
    }
}
