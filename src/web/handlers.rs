//! HTTP request handlers.

use super::AppState;
use crate::ping::ping;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};

/// Error code reported to clients for every failed check.
pub const PING_ERROR_CODE: &str = "Ping Error";

// ============================================================================
// API: Ping
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PingQuery {
    pub host: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PingResponse {
    pub host: String,
    pub report: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

pub async fn handle_ping(
    State(state): State<AppState>,
    Query(query): Query<PingQuery>,
) -> impl IntoResponse {
    match ping(&query.host, &state.runner).await {
        Ok(report) => Json(PingResponse {
            host: query.host,
            report,
        })
        .into_response(),
        Err(e) => {
            let status = if e.is_invalid_host() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::BAD_GATEWAY
            };
            tracing::warn!("Ping for {:?} failed: {}", query.host, e);

            let body = ErrorResponse {
                code: PING_ERROR_CODE.to_string(),
                message: e.to_string(),
            };
            (status, Json(body)).into_response()
        }
    }
}

// ============================================================================
// Health
// ============================================================================

pub async fn handle_health() -> impl IntoResponse {
    "ok"
}
