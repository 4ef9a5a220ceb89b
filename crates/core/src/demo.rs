//! Fixed demo dataset served when no file is uploaded.

use crate::dataset::{Dataset, ReviewRecord};

/// The five demo reviews and their star ratings. Already canonical, so the
/// demo path never goes through normalization.
pub const DEMO_REVIEWS: &[(&str, f64)] = &[
    ("The battery life is amazing but the camera sucks.", 3.0),
    ("Delivery was terrible! Arrived 3 days late.", 1.0),
    ("I absolutely love the design, it's so sleek.", 5.0),
    ("Waste of money. Stopped working after a week.", 1.0),
    ("Customer service was helpful when I called.", 4.0),
];

/// Build the demo dataset. Pure; identical records on every call.
pub fn demo_dataset() -> Dataset {
    Dataset::new(
        DEMO_REVIEWS
            .iter()
            .map(|(text, rating)| ReviewRecord::new(*text, Some(*rating)))
            .collect(),
    )
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_dataset_has_five_unannotated_records() {
        let dataset = demo_dataset();
        assert_eq!(dataset.len(), 5);
        for record in &dataset.records {
            assert!(!record.is_annotated());
            assert!(record.rating.is_some());
        }
    }

    #[test]
    fn test_demo_dataset_is_stable_across_calls() {
        assert_eq!(demo_dataset(), demo_dataset());
    }

    #[test]
    fn test_demo_dataset_row_order() {
        let dataset = demo_dataset();
        assert!(dataset.records[0].review_text.starts_with("The battery life"));
        assert!(dataset.records[4].review_text.starts_with("Customer service"));
        assert_eq!(dataset.records[2].rating, Some(5.0));
    }
}
