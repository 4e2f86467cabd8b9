//! Axum route handlers for the two trigger sources.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::pipeline::RowOutcome;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Sent by the form-submit hook with the 1-based row the response landed in.
#[derive(Debug, Deserialize)]
pub struct SubmissionRequest {
    pub row: u32,
}

/// A user's selection in the sheet, 1-based and inclusive.
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub start_row: u32,
    pub end_row: u32,
}

#[derive(Debug, Serialize)]
pub struct SubmissionResponse {
    /// "processed", "skipped" or "failed".
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<RowOutcome>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/submissions
///
/// Automatic trigger. Always answers 200 so the submitting side is never
/// disturbed; failures are only logged.
pub async fn handle_submission(
    State(state): State<AppState>,
    Json(request): Json<SubmissionRequest>,
) -> Json<SubmissionResponse> {
    let response = match state.pipeline.handle_form_submission(request.row).await {
        Some(outcome) => SubmissionResponse {
            status: outcome.status.as_str().to_string(),
            outcome: Some(outcome),
        },
        None => SubmissionResponse {
            status: "failed".to_string(),
            outcome: None,
        },
    };
    Json(response)
}

/// POST /api/v1/selections
///
/// Manual trigger. Exactly one data row must be selected; errors are returned.
pub async fn handle_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<RowOutcome>, AppError> {
    let outcome = state
        .pipeline
        .handle_selection(request.start_row, request.end_row)
        .await?;
    Ok(Json(outcome))
}
