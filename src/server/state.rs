use axum::extract::FromRef;

use crate::analytics_store::AnalyticsStore;
use crate::progress_store::ProgressStore;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

// Stores are optional: the server starts without them and reports the
// missing configuration per request instead of silently no-opping.
pub type OptionalProgressStore = Option<Arc<dyn ProgressStore>>;
pub type OptionalAnalyticsStore = Option<Arc<dyn AnalyticsStore>>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub progress_store: OptionalProgressStore,
    pub analytics_store: OptionalAnalyticsStore,
    pub hash: String,
}

impl ServerState {
    pub fn new(
        config: ServerConfig,
        progress_store: OptionalProgressStore,
        analytics_store: OptionalAnalyticsStore,
    ) -> ServerState {
        ServerState {
            config,
            start_time: Instant::now(),
            progress_store,
            analytics_store,
            hash: env!("GIT_HASH").to_string(),
        }
    }
}

impl FromRef<ServerState> for OptionalProgressStore {
    fn from_ref(input: &ServerState) -> Self {
        input.progress_store.clone()
    }
}

impl FromRef<ServerState> for OptionalAnalyticsStore {
    fn from_ref(input: &ServerState) -> Self {
        input.analytics_store.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
