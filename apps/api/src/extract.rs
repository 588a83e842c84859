//! Request body extractors shared by the resume and application endpoints.

use anyhow::anyhow;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Form,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::errors::{AppError, MISSING_INPUT};

/// A request body that could not be read or decoded.
///
/// Handlers take `Result<Extractor, InputRejection>` and fold the cause into
/// their own endpoint-specific failure.
#[derive(Debug)]
pub struct InputRejection(pub anyhow::Error);

impl IntoResponse for InputRejection {
    fn into_response(self) -> Response {
        AppError::Internal(self.0).into_response()
    }
}

/// Resume text plus job description as posted by the form page or an API client.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub resume: Option<String>,
    pub job_description: Option<String>,
}

impl Submission {
    /// Returns `(resume, job_description)` when both are present and non-empty.
    pub fn require(self) -> Result<(String, String), AppError> {
        match (self.resume, self.job_description) {
            (Some(resume), Some(job_description))
                if !resume.is_empty() && !job_description.is_empty() =>
            {
                Ok((resume, job_description))
            }
            _ => Err(AppError::Validation(MISSING_INPUT.to_string())),
        }
    }

    /// Like [`Submission::require`], but an uploaded resume only has to be
    /// present: an empty file is still tailored.
    pub fn require_upload(self) -> Result<(String, String), AppError> {
        match (self.resume, self.job_description) {
            (Some(resume), Some(job_description)) if !job_description.is_empty() => {
                Ok((resume, job_description))
            }
            _ => Err(AppError::Validation(MISSING_INPUT.to_string())),
        }
    }
}

/// Deserializes a urlencoded form body when the content type says so,
/// otherwise parses the body as JSON regardless of its declared type.
#[derive(Debug)]
pub struct JsonOrForm<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonOrForm<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send + 'static,
{
    type Rejection = InputRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if has_content_type(req.headers(), "application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| InputRejection(anyhow!("invalid form body: {}", e.body_text())))?;
            return Ok(JsonOrForm(value));
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| InputRejection(anyhow!("failed to read request body: {e}")))?;
        let value = serde_json::from_slice(&body)
            .map_err(|e| InputRejection(anyhow!("invalid JSON body: {e}")))?;
        Ok(JsonOrForm(value))
    }
}

/// Case-insensitive media type check that ignores parameters such as `boundary`.
pub fn has_content_type(headers: &HeaderMap, media_type: &str) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(';').next())
        .map(|v| v.trim().eq_ignore_ascii_case(media_type))
        .unwrap_or(false)
}
