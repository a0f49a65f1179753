//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers.
//!
//! Every request solves its own private copy of the input; handlers share
//! nothing mutable.
//!
//! Bodies that fail to deserialize keep axum's status code (400, 415 or 422)
//! but are answered in the endpoint's own `{success: false, error}` shape.

use super::{
    AppState,
    types::{GapResponse, HealthResponse, SolveResponse, ValuesRequest},
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use maxsub_core::{MaxSubError, largest_gap};

/// Map a core error to an HTTP status.
fn status_for(error: &MaxSubError) -> StatusCode {
    match error {
        MaxSubError::InvalidInput(_) | MaxSubError::ParseError(_) => StatusCode::BAD_REQUEST,
        MaxSubError::BudgetExhausted { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        MaxSubError::ConfigError(_) | MaxSubError::IoError(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::default())
}

// =============================================================================
// SOLVE HANDLER
// =============================================================================

/// Compute the maximum subarray sum.
pub async fn solve_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValuesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!("Solve body rejected: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(SolveResponse::error(rejection.body_text())),
            );
        }
    };

    let result = request
        .validated(state.max_input_length)
        .and_then(|values| state.solver.solve(values));

    match result {
        Ok(solution) => {
            tracing::debug!(
                "Solved {} values: sum={} runs={} merges={}",
                request.values.len(),
                solution.sum(),
                solution.initial_runs,
                solution.merges
            );
            (StatusCode::OK, Json(SolveResponse::success(&solution)))
        }
        Err(e) => {
            tracing::debug!("Solve rejected: {}", e);
            (status_for(&e), Json(SolveResponse::error(e.to_string())))
        }
    }
}

// =============================================================================
// GAP HANDLER
// =============================================================================

/// Compute the largest gap.
pub async fn gap_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValuesRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::debug!("Gap body rejected: {}", rejection.body_text());
            return (
                rejection.status(),
                Json(GapResponse::error(rejection.body_text())),
            );
        }
    };

    let result = request
        .validated(state.max_input_length)
        .and_then(largest_gap);

    match result {
        Ok(gap) => (StatusCode::OK, Json(GapResponse::success(gap))),
        Err(e) => (status_for(&e), Json(GapResponse::error(e.to_string()))),
    }
}

// =============================================================================
// TESTS
// =============================================================================
