//! Reply drafting templates.
//!
//! Drafting uses its own legacy ±0.5 score buckets, not the ±0.05 display
//! thresholds in `dataset`. The two sets coexist deliberately: labeling and
//! drafting were tuned separately upstream and both behaviors are kept.

use crate::dataset::SentimentLabel;

// ── Drafting thresholds ──────────────────────────────────────────────

/// Scores at or above this draft the glowing-review template.
pub const DRAFT_POSITIVE_THRESHOLD: f64 = 0.5;

/// Scores at or below this draft the apology template.
pub const DRAFT_NEGATIVE_THRESHOLD: f64 = -0.5;

/// How many characters of the review the glowing template quotes back.
pub const REVIEW_QUOTE_CHAR_LIMIT: usize = 20;

// ── Templates ────────────────────────────────────────────────────────

pub const APOLOGY_REPLY: &str = "We are incredibly sorry to hear about this experience. \
Please DM us your order ID so we can fix this immediately.";

pub const FEEDBACK_REPLY: &str = "Thank you for your feedback. \
We are constantly trying to improve and appreciate your input.";

// ── Drafting ─────────────────────────────────────────────────────────

/// Draft a templated reply for a review and its sentiment score.
pub fn draft_reply(review_text: &str, score: f64) -> String {
    if score >= DRAFT_POSITIVE_THRESHOLD {
        let quoted: String = review_text.chars().take(REVIEW_QUOTE_CHAR_LIMIT).collect();
        format!("Thank you for the glowing review! We are thrilled you enjoyed the {quoted}...")
    } else if score <= DRAFT_NEGATIVE_THRESHOLD {
        APOLOGY_REPLY.to_string()
    } else {
        FEEDBACK_REPLY.to_string()
    }
}

/// The legacy three-bucket score a display label maps to for drafting.
/// Saturates each label so it lands squarely inside a drafting bucket.
pub fn drafting_score(label: SentimentLabel) -> f64 {
    match label {
        SentimentLabel::Positive => 1.0,
        SentimentLabel::Negative => -1.0,
        SentimentLabel::Neutral => 0.0,
    }
}

// ── Tests ────────────────────────────────────────────────────────────
