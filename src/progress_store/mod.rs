mod models;
mod rest_store;

pub use models::*;
pub use rest_store::RestProgressStore;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the records backend.
#[derive(Debug, Error)]
pub enum ProgressStoreError {
    /// Could not reach the backend at all (connect, timeout, bad body).
    #[error("records backend request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error, e.g. a malformed filter value.
    /// The message is the backend's own and is surfaced to the caller.
    #[error("{message}")]
    Query { status: u16, message: String },
}

/// Read access to the authoritative progress records.
///
/// Implementations forward the caller's credential verbatim; whatever
/// row-level policy the backend applies to that credential decides which
/// records come back. No authorization logic lives on this side.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// All records for one classroom that the credential may see.
    /// An empty vec is a normal outcome, not an error.
    async fn classroom_progress(
        &self,
        auth: &str,
        classroom_id: &str,
    ) -> Result<Vec<ProgressRecord>, ProgressStoreError>;

    /// Every record visible to the credential, across all classrooms.
    /// Feeds the diagnostic branch when a classroom lookup comes up empty.
    async fn all_progress(&self, auth: &str) -> Result<Vec<ProgressRecord>, ProgressStoreError>;

    /// The caller's own profile row, if the credential resolves to one.
    async fn caller_profile(&self, auth: &str) -> Result<Option<Profile>, ProgressStoreError>;
}
