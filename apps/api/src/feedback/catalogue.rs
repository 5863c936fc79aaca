//! Stop-word and phrase catalogues used by keyword extraction.
//!
//! The standard catalogue is built once per process and never mutated.
//! Callers that need a different vocabulary build their own `KeywordCatalogue`
//! and pass it to `extract_keywords_with`.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// English function words that never become keyword candidates.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves", "also", "may", "might", "must", "shall", "within", "across", "via", "per",
];

/// Multi-word skills detected by substring regardless of frequency.
pub const SKILL_PHRASES: &[&str] = &[
    "project management",
    "product management",
    "program management",
    "machine learning",
    "deep learning",
    "artificial intelligence",
    "natural language processing",
    "computer vision",
    "data analysis",
    "data analytics",
    "data science",
    "data engineering",
    "data visualization",
    "business intelligence",
    "big data",
    "software development",
    "software engineering",
    "web development",
    "mobile development",
    "full stack",
    "front end",
    "back end",
    "cloud computing",
    "distributed systems",
    "system design",
    "microservices architecture",
    "continuous integration",
    "continuous delivery",
    "version control",
    "test automation",
    "quality assurance",
    "unit testing",
    "agile methodology",
    "scrum master",
    "devops practices",
    "infrastructure as code",
    "database design",
    "database management",
    "network security",
    "information security",
    "cyber security",
    "user experience",
    "user interface",
    "customer service",
    "customer success",
    "customer experience",
    "technical support",
    "problem solving",
    "critical thinking",
    "time management",
    "team leadership",
    "stakeholder management",
    "cross functional",
    "attention to detail",
    "communication skills",
    "written communication",
    "verbal communication",
    "digital marketing",
    "content marketing",
    "social media",
    "search engine optimization",
    "financial analysis",
    "supply chain",
    "business development",
];

static STANDARD: Lazy<KeywordCatalogue> =
    Lazy::new(|| KeywordCatalogue::new(STOP_WORDS.iter().copied(), SKILL_PHRASES.iter().copied()));

#[derive(Debug, Clone)]
pub struct KeywordCatalogue {
    stop_words: HashSet<String>,
    phrases: Vec<String>,
}

impl KeywordCatalogue {
    /// Builds a catalogue. Entries are lowercased; duplicate phrases keep their first position.
    pub fn new<S, P>(stop_words: S, phrases: P) -> Self
    where
        S: IntoIterator,
        S::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let stop_words = stop_words
            .into_iter()
            .map(|w| w.as_ref().to_lowercase())
            .collect();

        let mut seen = HashSet::new();
        let phrases = phrases
            .into_iter()
            .map(|p| p.as_ref().trim().to_lowercase())
            .filter(|p| !p.is_empty() && seen.insert(p.clone()))
            .collect();

        Self {
            stop_words,
            phrases,
        }
    }

    /// The process-wide default catalogue.
    pub fn standard() -> &'static KeywordCatalogue {
        &STANDARD
    }

    pub fn is_stop_word(&self, token: &str) -> bool {
        self.stop_words.contains(token)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl Default for KeywordCatalogue {
    fn default() -> Self {
        Self::standard().clone()
    }
}
