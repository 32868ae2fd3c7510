use anyhow::Result;
use std::time::Duration;

use tracing::info;

use axum::{
    extract::State,
    middleware,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde::Serialize;

use super::class_average::post_class_average;
use super::state::{OptionalAnalyticsStore, OptionalProgressStore, ServerState};
use super::{log_requests, ApiError, BearerAuth, ServerConfig};
use crate::roles::{Capability, Role};

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
    pub records_backend_configured: bool,
    pub analytics_store_configured: bool,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
        records_backend_configured: state.progress_store.is_some(),
        analytics_store_configured: state.analytics_store.is_some(),
    };
    Json(stats)
}

#[derive(Serialize)]
struct CallerProfileResponse {
    id: String,
    full_name: Option<String>,
    role: &'static str,
    capabilities: Vec<Capability>,
}

/// The caller's profile as the records backend sees it, plus the capability
/// set its role implies. The credential is forwarded, never verified here.
async fn get_me(
    State(state): State<ServerState>,
    auth: BearerAuth,
) -> Result<Json<CallerProfileResponse>, ApiError> {
    let progress_store = state
        .progress_store
        .clone()
        .ok_or(ApiError::StoreNotConfigured("records backend"))?;

    let profile = progress_store
        .caller_profile(&auth.0)
        .await?
        .ok_or(ApiError::ProfileNotFound)?;

    let role = Role::parse(&profile.role)
        .ok_or_else(|| ApiError::UpstreamQuery(format!("unrecognized role: {}", profile.role)))?;

    Ok(Json(CallerProfileResponse {
        id: profile.id,
        full_name: profile.full_name,
        role: role.as_str(),
        capabilities: role.capabilities().to_vec(),
    }))
}

pub fn make_app(
    config: ServerConfig,
    progress_store: OptionalProgressStore,
    analytics_store: OptionalAnalyticsStore,
) -> Router {
    let state = ServerState::new(config, progress_store, analytics_store);

    Router::new()
        .route("/", get(home))
        .route("/class-average", post(post_class_average))
        .route("/me", get(get_me))
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .with_state(state)
}

pub async fn run_server(
    config: ServerConfig,
    progress_store: OptionalProgressStore,
    analytics_store: OptionalAnalyticsStore,
) -> Result<()> {
    let port = config.port;
    let app = make_app(config, progress_store, analytics_store);

    let listener = tokio::net::TcpListener::bind(format!("127.0.0.1:{}", port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    Ok(axum::serve(listener, app).await?)
}
