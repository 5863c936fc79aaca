// Resume feedback engine.
// Implements: keyword extraction, resume flattening, keyword matching, ATS checks,
// completeness scoring, feedback generation, severity scoring, report assembly.
// Everything here is pure and synchronous; no I/O, no shared mutable state.

pub mod ats;
pub mod catalogue;
pub mod completeness;
pub mod feedback_rules;
pub mod flatten;
pub mod handlers;
pub mod keywords;
pub mod matcher;
pub mod report;
pub mod severity;

// Re-export the engine API consumed by handlers and library callers.
pub use ats::check_ats_compatibility;
pub use catalogue::KeywordCatalogue;
pub use completeness::{score_completeness, ScoreResult};
pub use feedback_rules::generate_feedback;
pub use flatten::flatten_resume_text;
pub use keywords::{extract_keywords, extract_keywords_with};
pub use matcher::{match_keywords, KeywordMatches, ManualKeyword};
pub use report::{analyze_resume, AnalysisOptions, FeedbackReport, KeywordReport};
pub use severity::{score_feedback_severity, FeedbackItem, Severity};
