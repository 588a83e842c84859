//! Job application backends: pluggable, trait-based submitters.
//!
//! Default: `SimulatedApplicant` (fixed delay plus a log line, no external calls).
//! `AppState` holds an `Arc<dyn JobApplicant>`, chosen at startup.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

const ID_ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ID_SUFFIX_LEN: usize = 9;

/// Proof of a submitted application.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationReceipt {
    pub application_id: String,
    pub submitted_at: DateTime<Utc>,
}

/// The applicant trait. Implement this to submit through a real job board
/// without touching the endpoint or handler.
#[async_trait]
pub trait JobApplicant: Send + Sync {
    async fn apply(&self, resume: &str, job_description: &str)
        -> anyhow::Result<ApplicationReceipt>;
}

/// Waits a fixed delay, logs the submission and fabricates an identifier.
pub struct SimulatedApplicant {
    delay: Duration,
}

impl SimulatedApplicant {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl JobApplicant for SimulatedApplicant {
    async fn apply(
        &self,
        resume: &str,
        job_description: &str,
    ) -> anyhow::Result<ApplicationReceipt> {
        tokio::time::sleep(self.delay).await;

        info!(
            resume_len = resume.chars().count(),
            job_description_len = job_description.chars().count(),
            "Application submitted with tailored resume"
        );

        let submitted_at = Utc::now();
        Ok(ApplicationReceipt {
            application_id: generate_application_id(submitted_at, Uuid::new_v4().as_u128()),
            submitted_at,
        })
    }
}

/// Formats `APP-{unix millis}-{9 uppercase base-36 chars}`; the suffix is
/// taken from the low digits of `entropy`.
pub fn generate_application_id(at: DateTime<Utc>, entropy: u128) -> String {
    let mut remaining = entropy;
    let mut suffix = String::with_capacity(ID_SUFFIX_LEN);
    for _ in 0..ID_SUFFIX_LEN {
        suffix.push(ID_ALPHABET[(remaining % 36) as usize] as char);
        remaining /= 36;
    }
    format!("APP-{}-{suffix}", at.timestamp_millis())
}
