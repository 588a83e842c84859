//! Resume upload extraction.
//!
//! The form page posts `multipart/form-data` with a `resume` file part and a
//! `jobDescription` text part. API clients may instead send JSON or a
//! urlencoded form carrying the resume as text.

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use axum::extract::{FromRequest, Multipart, Request};
use bytes::Bytes;
use tracing::debug;

use crate::extract::{has_content_type, InputRejection, JsonOrForm, Submission};

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";
const PDF_MAGIC: &[u8] = b"%PDF";

/// Extracted tailoring input, resume already decoded to text.
#[derive(Debug)]
pub struct ResumeUpload(pub Submission);

#[async_trait]
impl<S> FromRequest<S> for ResumeUpload
where
    S: Send + Sync,
{
    type Rejection = InputRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_content_type(req.headers(), "multipart/form-data") {
            let JsonOrForm(submission) = JsonOrForm::<Submission>::from_request(req, state).await?;
            return Ok(ResumeUpload(submission));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| InputRejection(anyhow!("invalid multipart body: {e}")))?;

        let mut submission = Submission::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| InputRejection(anyhow!("failed to read multipart field: {e}")))?
        {
            let name = field.name().map(str::to_owned);
            match name.as_deref() {
                Some(RESUME_FIELD) => {
                    let file_name = field.file_name().map(str::to_owned);
                    let content_type = field.content_type().map(str::to_owned);
                    let data = field
                        .bytes()
                        .await
                        .map_err(|e| InputRejection(anyhow!("failed to read resume upload: {e}")))?;
                    debug!(
                        file_name = file_name.as_deref().unwrap_or("<none>"),
                        bytes = data.len(),
                        "Received resume upload"
                    );
                    let text = decode_resume(file_name.as_deref(), content_type.as_deref(), data)
                        .await
                        .map_err(InputRejection)?;
                    submission.resume = Some(text);
                }
                Some(JOB_DESCRIPTION_FIELD) => {
                    let text = field.text().await.map_err(|e| {
                        InputRejection(anyhow!("failed to read job description: {e}"))
                    })?;
                    submission.job_description = Some(text);
                }
                _ => {}
            }
        }

        Ok(ResumeUpload(submission))
    }
}

/// Turns uploaded resume bytes into text. PDFs go through `pdf-extract` on the
/// blocking pool; everything else is decoded as lossy UTF-8.
pub async fn decode_resume(
    file_name: Option<&str>,
    content_type: Option<&str>,
    data: Bytes,
) -> anyhow::Result<String> {
    if !is_pdf(file_name, content_type, &data) {
        return Ok(String::from_utf8_lossy(&data).into_owned());
    }

    tokio::task::spawn_blocking(move || {
        pdf_extract::extract_text_from_mem(&data).map_err(|e| e.to_string())
    })
    .await
    .context("PDF text extraction task failed")?
    .map_err(|e| anyhow!("failed to extract text from PDF: {e}"))
}

fn is_pdf(file_name: Option<&str>, content_type: Option<&str>, data: &[u8]) -> bool {
    let by_name = file_name
        .map(|n| n.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    let by_type = content_type
        .map(|t| t.eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    by_name || by_type || data.starts_with(PDF_MAGIC)
}
