use serde::{Deserialize, Serialize};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Warning,
    Error,
    Info,
}

impl Severity {
    /// Points subtracted from the severity score per item.
    pub fn penalty(self) -> u32 {
        match self {
            Severity::Error => 15,
            Severity::Warning => 5,
            Severity::Info => 1,
            Severity::Success => 0,
        }
    }
}

/// A single finding about a resume. `id` is stable per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
    pub section: String,
    /// 1–10, higher is more urgent. Display order only.
    pub priority: u8,
}

impl FeedbackItem {
    pub fn new(
        id: &str,
        severity: Severity,
        section: &str,
        priority: u8,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: id.to_string(),
            severity,
            message: message.into(),
            suggestion: None,
            section: section.to_string(),
            priority: priority.clamp(MIN_PRIORITY, MAX_PRIORITY),
        }
    }

    /// Items built by the rules are always in range; deserialized ones may not be.
    pub fn has_valid_priority(&self) -> bool {
        (MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority)
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Severity score: 100 − (15 per error + 5 per warning + 1 per info), floored at 0.
///
/// Independent of the completeness score; the two answer different questions.
pub fn score_feedback_severity(items: &[FeedbackItem]) -> u32 {
    let penalty: u32 = items.iter().map(|item| item.severity.penalty()).sum();
    100u32.saturating_sub(penalty)
}
