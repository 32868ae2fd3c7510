//! Test server lifecycle management
//!
//! Each test gets an isolated server wired to its own stub backends, all on
//! random ports.

use classboard_server::server::state::{OptionalAnalyticsStore, OptionalProgressStore};
use classboard_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use classboard_server::{HttpAnalyticsStore, RestProgressStore};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::backends::{unreachable_base_url, AnalyticsBackend, RecordsBackend};
use super::constants::*;

pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Stub records backend, for asserting on forwarded credentials
    pub records: RecordsBackend,

    /// Stub analytics store, for asserting on mirrored documents
    pub analytics: AnalyticsBackend,
}

impl TestServer {
    /// Spawns a server with both backends reachable.
    pub async fn spawn() -> Self {
        Self::spawn_inner(true).await
    }

    /// Spawns a server whose analytics store is unreachable.
    pub async fn spawn_with_unreachable_analytics() -> Self {
        Self::spawn_inner(false).await
    }

    async fn spawn_inner(analytics_reachable: bool) -> Self {
        let (records_url, records) = RecordsBackend::spawn().await;
        let (spawned_analytics_url, analytics) = AnalyticsBackend::spawn().await;

        let analytics_url = if analytics_reachable {
            spawned_analytics_url
        } else {
            unreachable_base_url().await
        };

        let progress_store: OptionalProgressStore = Some(Arc::new(RestProgressStore::new(
            records_url,
            RECORDS_ANON_KEY.to_string(),
            REQUEST_TIMEOUT_SECS,
        )));
        let analytics_store: OptionalAnalyticsStore = Some(Arc::new(HttpAnalyticsStore::new(
            analytics_url,
            ANALYTICS_API_KEY.to_string(),
            REQUEST_TIMEOUT_SECS,
        )));

        let config = ServerConfig {
            requests_logging_level: RequestsLoggingLevel::None,
            port: 0,
        };
        let app = make_app(config, progress_store, analytics_store);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener.local_addr().unwrap().port();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        TestServer {
            base_url: format!("http://127.0.0.1:{}", port),
            records,
            analytics,
        }
    }
}
