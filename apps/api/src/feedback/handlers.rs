//! Axum route handlers for the Feedback API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::feedback::keywords::extract_keywords;
use crate::feedback::report::{analyze_resume, FeedbackReport};
use crate::feedback::severity::{
    score_feedback_severity, FeedbackItem, MAX_PRIORITY, MIN_PRIORITY,
};
use crate::models::resume::ResumeRecord;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExtractKeywordsRequest {
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractKeywordsResponse {
    pub keywords: Vec<String>,
}

/// `resume` is taken as raw JSON so a malformed draft still gets a report.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub resume: Value,
    pub jd_text: Option<String>,
    #[serde(default)]
    pub custom_keywords: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct StoredResumeFeedbackRequest {
    pub jd_text: Option<String>,
    #[serde(default)]
    pub custom_keywords: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeverityScoreRequest {
    pub items: Vec<FeedbackItem>,
}

#[derive(Debug, Serialize)]
pub struct SeverityScoreResponse {
    pub score: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/keywords/extract
///
/// Returns the ranked keyword candidates for a job description.
pub async fn handle_extract_keywords(
    Json(request): Json<ExtractKeywordsRequest>,
) -> Result<Json<ExtractKeywordsResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    Ok(Json(ExtractKeywordsResponse {
        keywords: extract_keywords(&request.jd_text),
    }))
}

/// POST /api/v1/feedback/analyze
///
/// Full feedback report for a resume record sent inline (e.g. an unsaved draft).
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Json<FeedbackReport> {
    let resume = ResumeRecord::from_json(&request.resume);
    Json(analyze_resume(
        resume.as_ref(),
        request.jd_text.as_deref(),
        &request.custom_keywords,
        &state.analysis_options(),
    ))
}

/// POST /api/v1/resumes/:id/feedback
///
/// Loads a stored resume and returns its feedback report.
pub async fn handle_stored_resume_feedback(
    State(state): State<AppState>,
    Path(resume_id): Path<Uuid>,
    Json(request): Json<StoredResumeFeedbackRequest>,
) -> Result<Json<FeedbackReport>, AppError> {
    let row = state
        .store
        .fetch_resume(resume_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {resume_id} not found")))?;

    let resume = row.record();
    Ok(Json(analyze_resume(
        resume.as_ref(),
        request.jd_text.as_deref(),
        &request.custom_keywords,
        &state.analysis_options(),
    )))
}

/// POST /api/v1/feedback/severity-score
pub async fn handle_severity_score(
    Json(request): Json<SeverityScoreRequest>,
) -> Result<Json<SeverityScoreResponse>, AppError> {
    if let Some(item) = request.items.iter().find(|item| !item.has_valid_priority()) {
        return Err(AppError::Validation(format!(
            "priority of '{}' must be between {} and {}, got {}",
            item.id, MIN_PRIORITY, MAX_PRIORITY, item.priority
        )));
    }

    Ok(Json(SeverityScoreResponse {
        score: score_feedback_severity(&request.items),
    }))
}
