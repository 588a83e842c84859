//! Axum route handler for the resume tailoring endpoint.

use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::InputRejection;
use crate::tailoring::keywords::KeywordEntry;
use crate::tailoring::tailor::tailor_resume;
use crate::tailoring::upload::ResumeUpload;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResumeResponse {
    pub success: bool,
    pub edited_resume: String,
    pub keywords: Vec<KeywordEntry>,
}

/// POST /api/edit-resume
///
/// Tailors an uploaded resume to a pasted job description.
pub async fn handle_edit_resume(
    upload: Result<ResumeUpload, InputRejection>,
) -> Result<Json<EditResumeResponse>, AppError> {
    let ResumeUpload(submission) = upload.map_err(|e| AppError::Tailoring(e.0))?;
    let (resume_text, job_description) = submission.require_upload()?;

    let tailored = tailor_resume(&resume_text, &job_description);
    info!(
        resume_len = resume_text.chars().count(),
        keyword_count = tailored.keywords.len(),
        "Resume tailored"
    );

    Ok(Json(EditResumeResponse {
        success: true,
        edited_resume: tailored.text,
        keywords: tailored.keywords,
    }))
}
