mod http_store;
mod models;

pub use http_store::HttpAnalyticsStore;
pub use models::ClassroomAverage;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the analytics document store.
///
/// These never fail a request; the caller logs them and reports the write
/// as skipped.
#[derive(Debug, Error)]
pub enum AnalyticsStoreError {
    #[error("analytics store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("analytics store rejected write with status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// Write access to the derived class-average mirror.
///
/// The mirror is non-authoritative and only eventually consistent with the
/// records backend; a write that never happens just leaves it stale.
#[async_trait]
pub trait AnalyticsStore: Send + Sync {
    /// Insert or overwrite the average document keyed by classroom id.
    /// Last write wins, no versioning.
    async fn upsert_class_average(
        &self,
        average: &ClassroomAverage,
    ) -> Result<(), AnalyticsStoreError>;
}
