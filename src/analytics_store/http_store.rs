//! HTTP client for the analytics document store's data API.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;

use super::{AnalyticsStore, AnalyticsStoreError, ClassroomAverage};

const DATABASE: &str = "schoolAnalytics";
const COLLECTION: &str = "classAverages";

/// Analytics store client.
///
/// Unlike the records backend client this one does not hold a connection
/// pool: the HTTP client is built inside the upsert call and dropped on
/// every exit path, so the connection lives strictly within one request.
pub struct HttpAnalyticsStore {
    base_url: String,
    api_key: String,
    timeout_sec: u64,
}

impl HttpAnalyticsStore {
    /// # Arguments
    /// * `base_url` - Base URL of the data API endpoint
    /// * `api_key` - Write credential for the analytics store
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, api_key: String, timeout_sec: u64) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        Self {
            base_url,
            api_key,
            timeout_sec,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl AnalyticsStore for HttpAnalyticsStore {
    async fn upsert_class_average(
        &self,
        average: &ClassroomAverage,
    ) -> Result<(), AnalyticsStoreError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_sec))
            .build()?;

        let url = format!("{}/action/updateOne", self.base_url);
        let body = json!({
            "database": DATABASE,
            "collection": COLLECTION,
            "filter": { "classroom_id": average.classroom_id },
            "update": {
                "$set": {
                    "average_score": average.average_score,
                    "last_calculated": average.last_calculated.to_rfc3339(),
                }
            },
            "upsert": true,
        });

        let response = client
            .post(&url)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(AnalyticsStoreError::Rejected {
                status: status.as_u16(),
                message,
            })
        }
    }
}
