//! HTTP client for the PostgREST-style records backend.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use super::{Profile, ProgressRecord, ProgressStore, ProgressStoreError};

const PROGRESS_COLUMNS: &str = "id,subject,score,classroom_id,student_id,teacher_id";
const PROFILE_COLUMNS: &str = "id,role,full_name";

/// Error body shape of the records backend.
#[derive(Deserialize)]
struct BackendError {
    message: String,
}

/// Records backend client.
///
/// Every request carries two headers: the store's public API key, and the
/// caller's `Authorization` header forwarded verbatim so the backend's
/// row-level policies apply to the caller's identity rather than a service
/// identity.
pub struct RestProgressStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
}

impl RestProgressStore {
    /// # Arguments
    /// * `base_url` - Base URL of the records backend (e.g. "https://records.example.com")
    /// * `anon_key` - The backend's public API key
    /// * `timeout_sec` - Request timeout in seconds
    pub fn new(base_url: String, anon_key: String, timeout_sec: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_sec))
            .build()
            .expect("Failed to create HTTP client");

        let base_url = base_url.trim_end_matches('/').to_string();

        Self {
            client,
            base_url,
            anon_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_rows<T: serde::de::DeserializeOwned>(
        &self,
        auth: &str,
        url: String,
    ) -> Result<Vec<T>, ProgressStoreError> {
        let response = self
            .client
            .get(&url)
            .header("apikey", &self.anon_key)
            .header(reqwest::header::AUTHORIZATION, auth)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<BackendError>().await {
                Ok(body) => body.message,
                Err(_) => format!("records backend returned status {}", status),
            };
            return Err(ProgressStoreError::Query {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl ProgressStore for RestProgressStore {
    async fn classroom_progress(
        &self,
        auth: &str,
        classroom_id: &str,
    ) -> Result<Vec<ProgressRecord>, ProgressStoreError> {
        let url = format!(
            "{}/rest/v1/progress?select={}&classroom_id=eq.{}",
            self.base_url,
            PROGRESS_COLUMNS,
            urlencoding::encode(classroom_id)
        );
        self.get_rows(auth, url).await
    }

    async fn all_progress(&self, auth: &str) -> Result<Vec<ProgressRecord>, ProgressStoreError> {
        let url = format!(
            "{}/rest/v1/progress?select={}",
            self.base_url, PROGRESS_COLUMNS
        );
        self.get_rows(auth, url).await
    }

    async fn caller_profile(&self, auth: &str) -> Result<Option<Profile>, ProgressStoreError> {
        let url = format!(
            "{}/rest/v1/profile?select={}",
            self.base_url, PROFILE_COLUMNS
        );
        // Row-level policy restricts the table to the caller's own row.
        let mut rows: Vec<Profile> = self.get_rows(auth, url).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows.remove(0)))
        }
    }
}
