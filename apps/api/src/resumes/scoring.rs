//! Keyword scoring. Pure substring matching, no stemming or word-boundary
//! logic: a keyword matches when its lowercase form appears anywhere in the
//! lowercased text.

use serde::{Deserialize, Serialize};

/// Outcome of scoring one document against a keyword list.
///
/// `matched_keywords` is the subset of the input that matched, in input order,
/// original casing and duplicates preserved. `score` always equals its length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched_keywords: Vec<String>,
    pub score: usize,
}

/// Scores extracted text against an ordered keyword list (case-insensitive).
///
/// Empty text is a defined input: no matches, score 0. Keywords supplied more
/// than once each count separately, including variants differing only by case.
pub fn search_keywords(text: &str, keywords: &[String]) -> MatchResult {
    if text.is_empty() {
        return MatchResult {
            matched_keywords: Vec::new(),
            score: 0,
        };
    }

    let text_lower = text.to_lowercase();
    let matched_keywords: Vec<String> = keywords
        .iter()
        .filter(|keyword| text_lower.contains(&keyword.to_lowercase()))
        .cloned()
        .collect();

    MatchResult {
        score: matched_keywords.len(),
        matched_keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_input_casing() {
        let result = search_keywords("Senior PYTHON engineer", &kw(&["Python", "java"]));
        assert_eq!(result.matched_keywords, vec!["Python"]);
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_matched_keywords_preserve_input_order_and_duplicates() {
        let result = search_keywords(
            "rust and sql experience",
            &kw(&["sql", "rust", "sql", "go"]),
        );
        assert_eq!(result.matched_keywords, vec!["sql", "rust", "sql"]);
        assert_eq!(result.score, 3);
    }

    #[test]
    fn test_case_variant_keywords_are_scored_independently() {
        let result = search_keywords("Python developer", &kw(&["Python", "python"]));
        assert_eq!(result.matched_keywords, vec!["Python", "python"]);
        assert_eq!(result.score, 2);
    }

    #[test]
    fn test_empty_text_scores_zero_for_any_keywords() {
        let result = search_keywords("", &kw(&["python", "sql"]));
        assert_eq!(result.matched_keywords, Vec::<String>::new());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_empty_keyword_list_scores_zero() {
        let result = search_keywords("some resume text", &[]);
        assert_eq!(result.score, 0);
        assert!(result.matched_keywords.is_empty());
    }

    #[test]
    fn test_substring_containment_without_word_boundaries() {
        // "java" is a substring of "javascript"; that counts by design
        let result = search_keywords("javascript specialist", &kw(&["java"]));
        assert_eq!(result.score, 1);
    }

    #[test]
    fn test_score_equals_matched_keyword_count() {
        let keywords = kw(&["rust", "python", "kafka", "sql", "docker"]);
        let result = search_keywords("rust, sql, docker", &keywords);
        assert_eq!(result.score, result.matched_keywords.len());
        assert_eq!(result.score, 3);
    }
}
