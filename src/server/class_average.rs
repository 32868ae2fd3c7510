//! The class-average endpoint.
//!
//! Linear flow: validate input, check the credential is present, read the
//! classroom's records with the forwarded credential, aggregate, then
//! mirror the result into the analytics store. The mirror write is
//! best-effort and only ever flips the `mongo_saved` flag.

use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::header::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::bearer::bearer_from_headers;
use super::state::ServerState;
use super::ApiError;
use crate::aggregate;
use crate::analytics_store::ClassroomAverage;

#[derive(Deserialize, Debug)]
pub struct ClassAverageBody {
    pub classroom_id: Option<String>,
}

// `mongo_saved` is the historical wire name of the replication flag;
// existing clients depend on it.
#[derive(Serialize)]
struct ClassAverageResponse {
    message: String,
    average: f64,
    mongo_saved: bool,
    records_count: usize,
}

#[derive(Serialize)]
struct EmptyClassroomResponse {
    message: String,
    average: f64,
    mongo_saved: bool,
    debug_info: DebugInfo,
}

/// Operator-facing detail attached to empty results. The classroom listing
/// is produced under the caller's own credential, so row-level policy bounds
/// what it can reveal.
#[derive(Serialize)]
struct DebugInfo {
    requested_classroom: String,
    total_records: usize,
    available_classrooms: Vec<String>,
}

pub async fn post_class_average(
    State(state): State<ServerState>,
    headers: HeaderMap,
    body: Result<Json<ClassAverageBody>, JsonRejection>,
) -> Result<Response, ApiError> {
    // Input validation comes before the credential check.
    let classroom_id = body
        .ok()
        .and_then(|Json(body)| body.classroom_id)
        .filter(|id| !id.is_empty())
        .ok_or(ApiError::MissingClassroomId)?;

    let auth = bearer_from_headers(&headers).ok_or(ApiError::MissingAuthorization)?;

    let progress_store = state
        .progress_store
        .clone()
        .ok_or(ApiError::StoreNotConfigured("records backend"))?;

    let records = progress_store
        .classroom_progress(&auth.0, &classroom_id)
        .await?;

    if records.is_empty() {
        // Not an error. Answer with enough detail for an operator to see
        // whether the classroom id is wrong or the caller just cannot see
        // its records. The listing itself is best-effort too: if it fails,
        // answer with zeroed detail rather than failing a request that has
        // already succeeded.
        let all_records = match progress_store.all_progress(&auth.0).await {
            Ok(records) => records,
            Err(err) => {
                warn!("Classroom listing for diagnostics failed (non-fatal): {}", err);
                Vec::new()
            }
        };

        let mut available_classrooms: Vec<String> = Vec::new();
        for record in &all_records {
            if !available_classrooms.contains(&record.classroom_id) {
                available_classrooms.push(record.classroom_id.clone());
            }
        }

        let response = EmptyClassroomResponse {
            message: format!(
                "No progress records found for classroom {}. Found {} total records in database.",
                classroom_id,
                all_records.len()
            ),
            average: 0.0,
            mongo_saved: false,
            debug_info: DebugInfo {
                requested_classroom: classroom_id,
                total_records: all_records.len(),
                available_classrooms,
            },
        };
        return Ok(Json(response).into_response());
    }

    let scores: Vec<f64> = records.iter().map(|r| r.score).collect();
    let average = aggregate::class_average(&scores);

    let analytics_store = state
        .analytics_store
        .clone()
        .ok_or(ApiError::StoreNotConfigured("analytics store"))?;

    let document = ClassroomAverage {
        classroom_id: classroom_id.clone(),
        average_score: average,
        last_calculated: Utc::now(),
    };

    let saved = match analytics_store.upsert_class_average(&document).await {
        Ok(()) => {
            info!(
                "Mirrored average {} for classroom {} to analytics store",
                average, classroom_id
            );
            true
        }
        Err(err) => {
            // Best-effort side channel: log and carry on.
            warn!("Analytics mirror write failed (non-fatal): {}", err);
            false
        }
    };

    let message = if saved {
        "Average calculated and saved to analytics store".to_string()
    } else {
        "Average calculated successfully (analytics store unavailable)".to_string()
    };

    Ok(Json(ClassAverageResponse {
        message,
        average,
        mongo_saved: saved,
        records_count: records.len(),
    })
    .into_response())
}
