use std::sync::Arc;

use crate::config::Config;
use crate::feedback::AnalysisOptions;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume store. Default: PgResumeStore.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}

impl AppState {
    pub fn analysis_options(&self) -> AnalysisOptions {
        AnalysisOptions {
            min_job_description_chars: self.config.jd_min_chars,
        }
    }
}
