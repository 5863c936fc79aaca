//! Feedback Report: runs every analyzer over one resume snapshot and bundles the results.

use serde::Serialize;
use tracing::debug;

use crate::feedback::ats::check_ats_compatibility;
use crate::feedback::completeness::{score_completeness, ScoreResult};
use crate::feedback::feedback_rules::generate_feedback;
use crate::feedback::keywords::extract_keywords;
use crate::feedback::matcher::{match_keywords, KeywordMatches};
use crate::feedback::severity::{score_feedback_severity, FeedbackItem};
use crate::models::resume::ResumeRecord;

/// Job descriptions shorter than this are not worth extracting keywords from.
pub const DEFAULT_MIN_JOB_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub min_job_description_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_job_description_chars: DEFAULT_MIN_JOB_DESCRIPTION_CHARS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordReport {
    /// Keywords extracted from the job description, before manual additions.
    pub keywords: Vec<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub match_rate: u32,
}

impl KeywordReport {
    fn new(keywords: Vec<String>, matches: KeywordMatches) -> Self {
        let match_rate = matches.match_rate();
        Self {
            keywords,
            matched: matches.matched,
            missing: matches.missing,
            match_rate,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeedbackReport {
    pub completeness: ScoreResult,
    pub ats_issues: Vec<FeedbackItem>,
    pub feedback: Vec<FeedbackItem>,
    pub severity_score: u32,
    pub keywords: Option<KeywordReport>,
    /// A job description was supplied but is below the usable minimum.
    pub job_description_too_short: bool,
}

/// Builds the full feedback report.
///
/// The keyword section is present when the job description meets
/// `options.min_job_description_chars` or when custom keywords are supplied.
/// A too-short description is flagged and contributes no extracted keywords.
/// Custom keywords are added after extraction, so they never displace extracted ones.
pub fn analyze_resume(
    resume: Option<&ResumeRecord>,
    job_description: Option<&str>,
    custom_keywords: &[String],
    options: &AnalysisOptions,
) -> FeedbackReport {
    let job_description = job_description.map(str::trim).filter(|jd| !jd.is_empty());
    let usable_jd =
        job_description.filter(|jd| jd.chars().count() >= options.min_job_description_chars);
    let job_description_too_short = job_description.is_some() && usable_jd.is_none();

    let keywords = if usable_jd.is_some() || !custom_keywords.is_empty() {
        let extracted = usable_jd.map(extract_keywords).unwrap_or_default();
        let mut matches = match_keywords(&extracted, resume);
        for keyword in custom_keywords {
            matches.add_manual_keyword(keyword);
        }
        Some(KeywordReport::new(extracted, matches))
    } else {
        None
    };

    let feedback = generate_feedback(resume);
    let severity_score = score_feedback_severity(&feedback);
    let completeness = score_completeness(resume);
    let ats_issues = check_ats_compatibility(resume);

    debug!(
        completeness = completeness.score,
        severity = severity_score,
        ats_issues = ats_issues.len(),
        match_rate = keywords.as_ref().map(|k| k.match_rate),
        "resume analyzed"
    );

    FeedbackReport {
        completeness,
        ats_issues,
        feedback,
        severity_score,
        keywords,
        job_description_too_short,
    }
}
