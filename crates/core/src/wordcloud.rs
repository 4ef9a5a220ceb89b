//! Word-frequency data for the negative-review word cloud.
//!
//! The corpus is the concatenated text of negative-labeled reviews; the
//! tokenizer lowercases, keeps alphabetic runs (apostrophes allowed inside
//! a word), and drops stopwords and one-character tokens before tallying.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::dataset::{Dataset, SentimentLabel};

// ── Constants ────────────────────────────────────────────────────────

/// Default number of tokens returned when the caller does not cap it.
pub const DEFAULT_WORD_LIMIT: usize = 50;

/// Common English words excluded from frequency output.
pub const STOPWORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "an", "and", "any", "are", "as", "at", "be",
    "because", "been", "but", "by", "can", "could", "did", "do", "does", "for", "from", "get",
    "had", "has", "have", "he", "her", "his", "how", "i", "if", "in", "into", "is", "it", "its",
    "just", "me", "my", "no", "not", "now", "of", "on", "only", "or", "our", "out", "she", "so",
    "some", "than", "that", "the", "their", "them", "then", "there", "they", "this", "to", "up",
    "us", "very", "was", "we", "were", "what", "when", "which", "who", "will", "with", "would",
    "you", "your",
];

/// Matches one token: alphabetic run with optional interior apostrophes.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]+(?:'[a-z]+)*").expect("valid regex"));

// ── Types ────────────────────────────────────────────────────────────

/// One token and how often it appears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub token: String,
    pub count: usize,
}

// ── Functions ────────────────────────────────────────────────────────

/// The review text of every negative-labeled record, joined with single
/// spaces, in dataset order.
pub fn negative_corpus(dataset: &Dataset) -> String {
    let texts: Vec<&str> = dataset
        .records
        .iter()
        .filter(|r| r.sentiment_label == Some(SentimentLabel::Negative))
        .map(|r| r.review_text.as_str())
        .collect();
    texts.join(" ")
}

/// Tally token frequencies in `text`, capped at `limit` entries.
/// Ordered by count descending, then token ascending.
pub fn word_frequencies(text: &str, limit: usize) -> Vec<WordCount> {
    let lowered = text.to_lowercase();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in TOKEN_RE.find_iter(&lowered) {
        let token = token.as_str();
        if token.chars().count() < 2 || STOPWORDS.contains(&token) {
            continue;
        }
        *counts.entry(token).or_default() += 1;
    }

    let mut out: Vec<WordCount> = counts
        .into_iter()
        .map(|(token, count)| WordCount {
            token: token.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    out.truncate(limit);
    out
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ReviewRecord;

    fn labeled_record(text: &str, label: SentimentLabel) -> ReviewRecord {
        let mut record = ReviewRecord::new(text, None);
        record.sentiment_label = Some(label);
        record
    }

    // -- negative_corpus tests --

    #[test]
    fn test_negative_corpus_keeps_only_negative_reviews() {
        let dataset = Dataset::new(vec![
            labeled_record("terrible battery", SentimentLabel::Negative),
            labeled_record("lovely screen", SentimentLabel::Positive),
            labeled_record("arrived broken", SentimentLabel::Negative),
        ]);
        assert_eq!(
            negative_corpus(&dataset),
            "terrible battery arrived broken"
        );
    }

    #[test]
    fn test_negative_corpus_is_empty_without_negatives() {
        let dataset = Dataset::new(vec![
            labeled_record("fine", SentimentLabel::Neutral),
            ReviewRecord::new("unlabeled", None),
        ]);
        assert_eq!(negative_corpus(&dataset), "");
    }

    // -- word_frequencies tests --

    #[test]
    fn test_word_frequencies_counts_and_orders() {
        let counts = word_frequencies("Battery died. battery DIED again, screen fine", 10);
        assert_eq!(
            counts,
            vec![
                WordCount {
                    token: "battery".to_string(),
                    count: 2
                },
                WordCount {
                    token: "died".to_string(),
                    count: 2
                },
                WordCount {
                    token: "fine".to_string(),
                    count: 1
                },
                WordCount {
                    token: "screen".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_word_frequencies_drops_stopwords_and_short_tokens() {
        let counts = word_frequencies("it is a terrible terrible product i x", 10);
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[0].token, "terrible");
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].token, "product");
    }

    #[test]
    fn test_word_frequencies_keeps_interior_apostrophes() {
        let counts = word_frequencies("doesn't work, doesn't charge", 10);
        assert_eq!(counts[0].token, "doesn't");
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_word_frequencies_respects_limit() {
        let counts = word_frequencies("alpha beta gamma delta", 2);
        assert_eq!(counts.len(), 2);
        // Equal counts fall back to token order.
        assert_eq!(counts[0].token, "alpha");
        assert_eq!(counts[1].token, "beta");
    }

    #[test]
    fn test_word_frequencies_on_empty_text() {
        assert!(word_frequencies("", DEFAULT_WORD_LIMIT).is_empty());
    }
}
