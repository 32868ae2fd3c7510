use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::progress_store::ProgressStoreError;

/// Hard request failures. Each variant maps to one HTTP status and a
/// structured `{ "error": ... }` body; a failed analytics write is
/// deliberately not represented here because it never fails a request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("classroom_id is required")]
    MissingClassroomId,

    #[error("Missing authorization header")]
    MissingAuthorization,

    #[error("{0} is not configured on this server")]
    StoreNotConfigured(&'static str),

    #[error("no profile found for caller")]
    ProfileNotFound,

    #[error("{0}")]
    UpstreamQuery(String),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingClassroomId => StatusCode::BAD_REQUEST,
            ApiError::MissingAuthorization => StatusCode::UNAUTHORIZED,
            ApiError::StoreNotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ProfileNotFound => StatusCode::NOT_FOUND,
            ApiError::UpstreamQuery(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<ProgressStoreError> for ApiError {
    fn from(err: ProgressStoreError) -> Self {
        // Surface the backend's own message, as callers expect it.
        ApiError::UpstreamQuery(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}
