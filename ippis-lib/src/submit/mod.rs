//! Form submissions
//!
//! Add and edit forms hand their data to a [`Submitter`]. The trait hides
//! whether the data ends up in an in-memory store, a simulated backend or a
//! real service, so screens and tests use the same code path.

mod simulated;
mod tracker;

pub use simulated::*;
pub use tracker::*;

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::SubmitError;
use crate::model::Row;
use crate::source::MemoryStore;

/// Trait for submission backends.
///
/// `D` is the form payload; `Id` is what the backend assigns or confirms
/// for the stored record.
#[async_trait]
pub trait Submitter<D: Send + 'static>: Send + Sync {
    /// Identifier of a stored submission.
    type Id: Send;

    /// Sends `data` to the backend.
    async fn submit(&self, data: D) -> Result<Self::Id, SubmitError>;
}

/// Submitting a row to a store upserts it.
#[async_trait]
impl<T: Row> Submitter<T> for MemoryStore<T> {
    type Id = T::Id;

    async fn submit(&self, data: T) -> Result<T::Id, SubmitError> {
        let id = data.id();
        self.upsert(data);
        Ok(id)
    }
}

/// Runs a submission, failing with [`SubmitError::Timeout`] if it takes
/// longer than `deadline`.
pub async fn with_deadline<T, F>(deadline: Duration, future: F) -> Result<T, SubmitError>
where
    F: Future<Output = Result<T, SubmitError>>,
{
    match tokio::time::timeout(deadline, future).await {
        Ok(result) => result,
        Err(_) => Err(SubmitError::Timeout(deadline)),
    }
}
