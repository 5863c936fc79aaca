//! Keyword Matcher: partitions job keywords into those the resume covers and those it lacks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::feedback::flatten::flatten_resume_text;
use crate::models::resume::ResumeRecord;

/// Outcome of adding a keyword by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ManualKeyword {
    Matched,
    Missing,
    /// Blank, or already tracked in either list.
    Ignored,
}

/// Matched/missing partition over a resume's flattened text.
///
/// Keeps the lowercased resume text so keywords added later are tested
/// without re-flattening the record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMatches {
    #[serde(skip)]
    resume_text: String,
    #[serde(skip)]
    tracked: HashSet<String>,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

impl KeywordMatches {
    fn new(resume_text: String) -> Self {
        Self {
            resume_text: resume_text.to_lowercase(),
            tracked: HashSet::new(),
            matched: Vec::new(),
            missing: Vec::new(),
        }
    }

    fn place(&mut self, keyword: String) -> ManualKeyword {
        self.tracked.insert(keyword.clone());
        if self.resume_text.contains(keyword.as_str()) {
            self.matched.push(keyword);
            ManualKeyword::Matched
        } else {
            self.missing.push(keyword);
            ManualKeyword::Missing
        }
    }

    /// Tests one more keyword against the cached resume text and appends it to
    /// `matched` or `missing`. Existing entries keep their order.
    pub fn add_manual_keyword(&mut self, keyword: &str) -> ManualKeyword {
        let keyword = keyword.trim().to_lowercase();
        if keyword.is_empty() || self.is_tracked(&keyword) {
            return ManualKeyword::Ignored;
        }
        self.place(keyword)
    }

    fn is_tracked(&self, keyword: &str) -> bool {
        self.tracked.contains(keyword)
    }

    /// round(100 × matched / (matched + missing)); 0 when nothing is tracked.
    pub fn match_rate(&self) -> u32 {
        let total = self.matched.len() + self.missing.len();
        if total == 0 {
            return 0;
        }
        ((self.matched.len() as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Partitions `keywords` by case-insensitive containment in the flattened resume text.
/// Input order is preserved within each partition.
pub fn match_keywords<S: AsRef<str>>(keywords: &[S], resume: Option<&ResumeRecord>) -> KeywordMatches {
    let mut matches = KeywordMatches::new(flatten_resume_text(resume));
    for keyword in keywords {
        matches.place(keyword.as_ref().to_lowercase());
    }
    matches
}
