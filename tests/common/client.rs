//! HTTP client for end-to-end tests
//!
//! When API routes or request formats change, update only this file.

use super::constants::REQUEST_TIMEOUT_SECS;
use reqwest::Response;
use serde_json::json;
use std::time::Duration;

pub struct TestClient {
    /// The underlying reqwest client (public for custom requests in tests)
    pub client: reqwest::Client,
    /// The base URL of the test server
    pub base_url: String,
}

impl TestClient {
    pub fn new(base_url: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to build reqwest client");

        Self { client, base_url }
    }

    /// POST /class-average with a well-formed payload.
    pub async fn class_average(&self, classroom_id: &str, token: Option<&str>) -> Response {
        self.class_average_raw(json!({ "classroom_id": classroom_id }), token)
            .await
    }

    /// POST /class-average with an arbitrary JSON payload.
    pub async fn class_average_raw(
        &self,
        body: serde_json::Value,
        token: Option<&str>,
    ) -> Response {
        let mut request = self
            .client
            .post(format!("{}/class-average", self.base_url))
            .json(&body);
        if let Some(token) = token {
            request = request.header("Authorization", token);
        }
        request.send().await.expect("class-average request failed")
    }

    /// GET /me
    pub async fn me(&self, token: Option<&str>) -> Response {
        let mut request = self.client.get(format!("{}/me", self.base_url));
        if let Some(token) = token {
            request = request.header("Authorization", token);
        }
        request.send().await.expect("me request failed")
    }

    /// GET /
    pub async fn home(&self) -> Response {
        self.client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .expect("home request failed")
    }
}
