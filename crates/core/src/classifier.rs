//! The classifier capability boundary.
//!
//! The pipeline never loads models itself; callers inject an implementation
//! of [`ClassifierBackend`] (an HTTP sidecar client in production, scripted
//! stubs in tests). All three capabilities are synchronous, bounded-latency
//! local calls.

// ── Constants ────────────────────────────────────────────────────────

/// The upstream emotion model accepts at most this many characters.
pub const EMOTION_INPUT_CHAR_LIMIT: usize = 512;

// ── Types ────────────────────────────────────────────────────────────

/// A failed classifier call. The annotator absorbs these per record and
/// substitutes a fallback value; they never surface past annotation.
#[derive(Debug, thiserror::Error)]
#[error("Classifier call failed: {reason}")]
pub struct ClassifierError {
    pub reason: String,
}

impl ClassifierError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// The injected classifier capability set.
pub trait ClassifierBackend: Send + Sync {
    /// Polarity score for the text, in [-1, 1].
    fn score_sentiment(&self, text: &str) -> Result<f64, ClassifierError>;

    /// Open-set emotion label ("joy", "anger", ...). Callers must truncate
    /// input with [`emotion_input`] first.
    fn classify_emotion(&self, text: &str) -> Result<String, ClassifierError>;

    /// Comma-joined "noun (adjective)" pairs, or "General" when the model
    /// finds none.
    fn extract_aspects(&self, text: &str) -> Result<String, ClassifierError>;
}

// ── Helpers ──────────────────────────────────────────────────────────

/// Truncate text to the emotion model's input limit. Counts characters,
/// not bytes, so multi-byte input never splits mid-character.
pub fn emotion_input(text: &str) -> &str {
    match text.char_indices().nth(EMOTION_INPUT_CHAR_LIMIT) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

// ── Tests ────────────────────────────────────────────────────────────
