use std::sync::Arc;

use crate::application::applicant::JobApplicant;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable application backend. Default: SimulatedApplicant.
    pub applicant: Arc<dyn JobApplicant>,
}
