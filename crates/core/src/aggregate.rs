//! Aggregation over annotated datasets: the headline summary and the
//! emotion distribution.

use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::{Dataset, SentimentLabel};
use crate::error::CoreError;

// ── Types ────────────────────────────────────────────────────────────

/// Read-only headline view over a fully annotated dataset. Recomputed on
/// demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSummary {
    /// Arithmetic mean of sentiment scores.
    pub average_sentiment: f64,
    pub total_count: usize,
    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,
}

/// One slice of the emotion distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmotionCount {
    pub label: String,
    pub count: usize,
}

// ── Aggregation ──────────────────────────────────────────────────────

/// Summarize a fully annotated dataset.
///
/// Zero records is `CoreError::EmptyDataset`; a record missing its score or
/// label is `CoreError::NotAnnotated` with that record's index. Counts are
/// exact tallies by label, unweighted by rating.
pub fn summarize(dataset: &Dataset) -> Result<AggregateSummary, CoreError> {
    if dataset.is_empty() {
        return Err(CoreError::EmptyDataset);
    }

    let mut score_sum = 0.0;
    let mut positive_count = 0;
    let mut negative_count = 0;
    let mut neutral_count = 0;

    for (index, record) in dataset.records.iter().enumerate() {
        let (Some(score), Some(label)) = (record.sentiment_score, record.sentiment_label) else {
            return Err(CoreError::NotAnnotated { index });
        };
        score_sum += score;
        match label {
            SentimentLabel::Positive => positive_count += 1,
            SentimentLabel::Negative => negative_count += 1,
            SentimentLabel::Neutral => neutral_count += 1,
        }
    }

    Ok(AggregateSummary {
        average_sentiment: score_sum / dataset.len() as f64,
        total_count: dataset.len(),
        positive_count,
        negative_count,
        neutral_count,
    })
}

/// Tally emotion labels over the records that have one. Unannotated records
/// are skipped rather than rejected, so this can feed a chart while a batch
/// is still partial. Ordered by count descending, then label ascending.
pub fn emotion_counts(dataset: &Dataset) -> Vec<EmotionCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in &dataset.records {
        if let Some(label) = record.emotion_label.as_deref() {
            *counts.entry(label).or_default() += 1;
        }
    }

    let mut out: Vec<EmotionCount> = counts
        .into_iter()
        .map(|(label, count)| EmotionCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    out
}

// ── Tests ────────────────────────────────────────────────────────────
