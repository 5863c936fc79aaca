//! Keyword Extractor: turns a raw job description into ranked keyword candidates.
//!
//! Algorithm:
//! 1. Lowercase; every char that is neither `[a-z0-9_]` nor whitespace becomes a space
//! 2. Drop tokens of ≤ 2 chars and stop words
//! 3. Keep tokens seen at least twice, most frequent first (ties: first occurrence)
//! 4. Append catalogue phrases found as substrings of the lowercased text
//! 5. Deduplicate, cap at `MAX_KEYWORDS`

use std::collections::{HashMap, HashSet};

use crate::feedback::catalogue::KeywordCatalogue;

pub const MAX_KEYWORDS: usize = 20;
const MIN_TOKEN_CHARS: usize = 3;
const MIN_FREQUENCY: u32 = 2;

/// Extracts keywords using the standard catalogue. Empty input yields an empty set.
pub fn extract_keywords(text: &str) -> Vec<String> {
    extract_keywords_with(text, KeywordCatalogue::standard())
}

pub fn extract_keywords_with(text: &str, catalogue: &KeywordCatalogue) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let lower = text.to_lowercase();
    let single = frequent_tokens(&lower, catalogue);
    let phrases = catalogue
        .phrases()
        .iter()
        .filter(|phrase| lower.contains(phrase.as_str()))
        .cloned();

    let mut seen = HashSet::new();
    single
        .into_iter()
        .chain(phrases)
        .filter(|keyword| seen.insert(keyword.clone()))
        .take(MAX_KEYWORDS)
        .collect()
}

/// Tokens meeting the frequency threshold, ordered by descending count then first occurrence.
fn frequent_tokens(lower: &str, catalogue: &KeywordCatalogue) -> Vec<String> {
    let cleaned: String = lower
        .chars()
        .map(|c| {
            if is_word_char(c) || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();

    // token -> (count, first index)
    let mut counts: HashMap<&str, (u32, usize)> = HashMap::new();
    for (index, token) in cleaned
        .split_whitespace()
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS && !catalogue.is_stop_word(t))
        .enumerate()
    {
        counts.entry(token).or_insert((0, index)).0 += 1;
    }

    let mut ranked: Vec<(&str, u32, usize)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count >= MIN_FREQUENCY)
        .map(|(token, (count, first))| (token, count, first))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));

    ranked
        .into_iter()
        .map(|(token, _, _)| token.to_string())
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
mod tests {
    use super::*;

    const BACKEND_JD: &str = r#"
        Senior Backend Engineer
        We are hiring a backend engineer to build Rust services. You will design Rust APIs,
        operate PostgreSQL databases and deploy services on Kubernetes.
        Requirements: 5+ years of Rust, PostgreSQL, Kubernetes. Experience with machine learning
        pipelines and distributed systems is a plus. Strong problem solving skills.
    "#;

    #[test]
    fn test_empty_input_yields_nothing() {
        assert!(extract_keywords("").is_empty());
        assert!(extract_keywords("   ").is_empty());
        assert!(extract_keywords("\n\t").is_empty());
    }

    #[test]
    fn test_repeated_terms_ranked_by_frequency() {
        let keywords = extract_keywords(BACKEND_JD);
        // rust ×3, then backend/engineer/services/postgresql/kubernetes ×2 in first-seen order
        assert_eq!(keywords[0], "rust");
        assert_eq!(
            &keywords[1..6],
            ["backend", "engineer", "services", "postgresql", "kubernetes"]
        );
    }

    #[test]
    fn test_single_occurrence_tokens_excluded() {
        let keywords = extract_keywords(BACKEND_JD);
        assert!(!keywords.contains(&"senior".to_string()));
        assert!(!keywords.contains(&"databases".to_string()));
    }

    #[test]
    fn test_phrases_included_regardless_of_frequency() {
        let keywords = extract_keywords(BACKEND_JD);
        for phrase in ["machine learning", "distributed systems", "problem solving"] {
            assert!(keywords.contains(&phrase.to_string()), "missing {phrase}");
        }
        let first_phrase = keywords.iter().position(|k| k.contains(' ')).unwrap();
        assert!(keywords[..first_phrase].iter().all(|k| !k.contains(' ')));
    }

    #[test]
    fn test_short_tokens_and_stop_words_dropped() {
        let keywords = extract_keywords("go go go the the the and and api api");
        assert_eq!(keywords, ["api"]);
    }

    #[test]
    fn test_punctuation_splits_tokens() {
        let keywords = extract_keywords("CI/CD pipelines; pipelines, node.js and node.js");
        assert!(keywords.contains(&"pipelines".to_string()));
        // "node.js" splits into "node" and "js"; "js" is too short
        assert!(keywords.contains(&"node".to_string()));
        assert!(!keywords.iter().any(|k| k == "js"));
    }

    #[test]
    fn test_non_ascii_letters_are_separators() {
        let keywords = extract_keywords("café café résumé résumé");
        // "café" -> "caf", "résumé" -> "sum"
        assert_eq!(keywords, ["caf", "sum"]);
    }

    #[test]
    fn test_capped_at_twenty_without_duplicates() {
        let text: String = (0..40)
            .map(|i| format!("skill{i} skill{i} "))
            .collect::<String>()
            + "Machine Learning machine learning";
        let keywords = extract_keywords(&text);
        assert_eq!(keywords.len(), MAX_KEYWORDS);
        let unique: HashSet<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
        assert_eq!(unique.len(), keywords.len());
    }

    #[test]
    fn test_phrase_token_overlap_is_deduplicated() {
        let catalogue = KeywordCatalogue::new(Vec::<&str>::new(), ["kafka", "kafka streams"]);
        let keywords = extract_keywords_with("kafka kafka streams", &catalogue);
        assert_eq!(keywords, ["kafka", "kafka streams"]);
    }

    #[test]
    fn test_custom_catalogue_substitutes_standard() {
        let catalogue = KeywordCatalogue::new(["rust"], ["memory safety"]);
        let keywords = extract_keywords_with("rust rust memory safety tokio tokio", &catalogue);
        assert_eq!(keywords, ["tokio", "memory safety"]);
    }

    #[test]
    fn test_threshold_is_two_occurrences() {
        assert!(extract_keywords("Kubernetes engineer wanted").is_empty());
        assert_eq!(extract_keywords("Kubernetes and kubernetes"), ["kubernetes"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_keywords(BACKEND_JD), extract_keywords(BACKEND_JD));
    }
}
