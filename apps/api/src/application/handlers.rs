//! Axum route handler for the simulated job application endpoint.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::{InputRejection, JsonOrForm, Submission};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyJobResponse {
    pub success: bool,
    pub message: String,
    pub application_id: String,
    pub submitted_at: DateTime<Utc>,
}

/// POST /api/apply-job
///
/// Submits the tailored resume through the configured applicant backend.
pub async fn handle_apply_job(
    State(state): State<AppState>,
    body: Result<JsonOrForm<Submission>, InputRejection>,
) -> Result<Json<ApplyJobResponse>, AppError> {
    let JsonOrForm(submission) = body.map_err(|e| AppError::Application(e.0))?;
    let (resume, job_description) = submission.require()?;

    let receipt = state
        .applicant
        .apply(&resume, &job_description)
        .await
        .map_err(AppError::Application)?;

    Ok(Json(ApplyJobResponse {
        success: true,
        message: "Application submitted successfully".to_string(),
        application_id: receipt.application_id,
        submitted_at: receipt.submitted_at,
    }))
}
