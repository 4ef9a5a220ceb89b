//! Row annotation: fills the derived fields of each record through an
//! injected classifier backend.
//!
//! Annotation is idempotent per field (already-populated fields are never
//! recomputed) and never fails: a classifier error on one record degrades
//! that field to its fallback value and the batch continues. Records are
//! processed in dataset order.

use serde::Serialize;

use crate::classifier::{emotion_input, ClassifierBackend};
use crate::dataset::{Dataset, SentimentLabel};
use crate::reply;

// ── Fallback values ──────────────────────────────────────────────────

/// Substituted when sentiment scoring fails for a record.
pub const FALLBACK_SENTIMENT_SCORE: f64 = 0.0;

/// Substituted when the emotion classifier fails for a record.
pub const FALLBACK_EMOTION_LABEL: &str = "Neutral";

/// Substituted when aspect extraction fails for a record.
pub const FALLBACK_ASPECT_SUMMARY: &str = "General";

// ── Types ────────────────────────────────────────────────────────────

/// Outcome counts for one annotation pass. Diagnostic only; carries no
/// domain semantics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AnnotationReport {
    /// Records that had at least one field filled by this pass.
    pub newly_annotated: usize,
    /// Records that were already fully annotated.
    pub skipped: usize,
    /// Individual classifier calls that failed and were defaulted.
    pub classifier_failures: usize,
}

// ── Annotation ───────────────────────────────────────────────────────

/// Annotate every record in place, filling only fields that are not yet
/// populated.
pub fn annotate(dataset: &mut Dataset, backend: &dyn ClassifierBackend) -> AnnotationReport {
    let mut report = AnnotationReport::default();

    for record in &mut dataset.records {
        let mut touched = false;

        let score = match record.sentiment_score {
            Some(existing) => existing,
            None => {
                let scored = match backend.score_sentiment(&record.review_text) {
                    Ok(score) => score,
                    Err(_) => {
                        report.classifier_failures += 1;
                        FALLBACK_SENTIMENT_SCORE
                    }
                };
                record.sentiment_score = Some(scored);
                touched = true;
                scored
            }
        };

        let label = match record.sentiment_label {
            Some(existing) => existing,
            None => {
                let derived = SentimentLabel::from_score(score);
                record.sentiment_label = Some(derived);
                touched = true;
                derived
            }
        };

        if record.emotion_label.is_none() {
            let emotion = match backend.classify_emotion(emotion_input(&record.review_text)) {
                Ok(emotion) => emotion,
                Err(_) => {
                    report.classifier_failures += 1;
                    FALLBACK_EMOTION_LABEL.to_string()
                }
            };
            record.emotion_label = Some(emotion);
            touched = true;
        }

        if record.aspect_summary.is_none() {
            let aspects = match backend.extract_aspects(&record.review_text) {
                Ok(aspects) => aspects,
                Err(_) => {
                    report.classifier_failures += 1;
                    FALLBACK_ASPECT_SUMMARY.to_string()
                }
            };
            record.aspect_summary = Some(aspects);
            touched = true;
        }

        if record.drafted_reply.is_none() {
            let drafted = reply::draft_reply(&record.review_text, reply::drafting_score(label));
            record.drafted_reply = Some(drafted);
            touched = true;
        }

        if touched {
            report.newly_annotated += 1;
        } else {
            report.skipped += 1;
        }
    }

    report
}

// ── Tests ────────────────────────────────────────────────────────────
