//! Canonical dataset types: review records, the ordered dataset they live
//! in, and the sentiment label derived from classifier scores.
//!
//! Records enter through normalization (or the demo provider) with only
//! `review_text` and `rating` set; the annotator fills the derived fields.

use serde::{Deserialize, Serialize};

// ── Label thresholds ─────────────────────────────────────────────────

/// Scores strictly above this are labeled `Positive`.
pub const POSITIVE_SCORE_THRESHOLD: f64 = 0.05;

/// Scores strictly below this are labeled `Negative`.
pub const NEGATIVE_SCORE_THRESHOLD: f64 = -0.05;

// ── Types ────────────────────────────────────────────────────────────

/// Display label for a sentiment score.
///
/// Distinct from the coarser ±0.5 buckets used for reply drafting (see
/// `reply`); both threshold sets are load-bearing and must not be merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Neutral,
    Negative,
}

impl SentimentLabel {
    /// Label a score using the fixed ±0.05 thresholds.
    pub fn from_score(score: f64) -> Self {
        if score > POSITIVE_SCORE_THRESHOLD {
            Self::Positive
        } else if score < NEGATIVE_SCORE_THRESHOLD {
            Self::Negative
        } else {
            Self::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive",
            Self::Neutral => "Neutral",
            Self::Negative => "Negative",
        }
    }
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// The customer's review text. Always present; rows without it are
    /// dropped during normalization.
    pub review_text: String,
    /// Star rating from the source table, when one survived normalization.
    pub rating: Option<f64>,
    /// Classifier polarity score in [-1, 1].
    pub sentiment_score: Option<f64>,
    /// Display label derived from `sentiment_score`.
    pub sentiment_label: Option<SentimentLabel>,
    /// Open-set emotion tag from the emotion classifier.
    pub emotion_label: Option<String>,
    /// Comma-joined "noun (adjective)" pairs, or "General".
    pub aspect_summary: Option<String>,
    /// Templated reply suggestion.
    pub drafted_reply: Option<String>,
}

impl ReviewRecord {
    /// Create an unannotated record.
    pub fn new(review_text: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            review_text: review_text.into(),
            rating,
            sentiment_score: None,
            sentiment_label: None,
            emotion_label: None,
            aspect_summary: None,
            drafted_reply: None,
        }
    }

    /// Whether every derived field has been filled.
    pub fn is_annotated(&self) -> bool {
        self.sentiment_score.is_some()
            && self.sentiment_label.is_some()
            && self.emotion_label.is_some()
            && self.aspect_summary.is_some()
            && self.drafted_reply.is_some()
    }
}

/// An ordered collection of review records. Insertion order is preserved
/// through annotation and aggregation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<ReviewRecord>,
}

impl Dataset {
    pub fn new(records: Vec<ReviewRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ── Tests ────────────────────────────────────────────────────────────
