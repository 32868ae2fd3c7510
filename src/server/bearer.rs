use axum::{extract::FromRequestParts, http::header::HeaderMap, http::request::Parts};

use super::ApiError;

/// The caller's raw `Authorization` header value.
///
/// This server only checks presence; the value is forwarded verbatim to the
/// records backend, which is the sole authority on what it may see.
#[derive(Debug, Clone)]
pub struct BearerAuth(pub String);

pub(crate) fn bearer_from_headers(headers: &HeaderMap) -> Option<BearerAuth> {
    headers
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(|v| BearerAuth(v.to_string()))
}

impl<S: Send + Sync> FromRequestParts<S> for BearerAuth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        bearer_from_headers(&parts.headers).ok_or(ApiError::MissingAuthorization)
    }
}
