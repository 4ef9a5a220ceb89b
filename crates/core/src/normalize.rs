//! Column normalization: maps an arbitrary raw table onto the canonical
//! `{Review, Rating}` schema and materializes it as a dataset.
//!
//! Known source names are renamed by exact, case-sensitive match. When no
//! review column exists by name, the text-typed column with the greatest
//! mean text length is taken instead; that heuristic can pick a semantically
//! wrong column (a free-text comment field, even a textual rating column)
//! and does so on purpose. Rows with a null review cell are dropped and the
//! surviving review cells are stringified.

use crate::dataset::{Dataset, ReviewRecord};
use crate::error::CoreError;
use crate::table::{CellValue, RawTable};

// ── Canonical schema ─────────────────────────────────────────────────

pub const REVIEW_COLUMN: &str = "Review";
pub const RATING_COLUMN: &str = "Rating";

/// Source names renamed to `Review`, exact case-sensitive match.
pub const REVIEW_SOURCE_NAMES: &[&str] = &["reviewText", "text", "content", "summary"];

/// Source names renamed to `Rating`, exact case-sensitive match.
pub const RATING_SOURCE_NAMES: &[&str] = &["overall", "rating"];

// ── Normalization ────────────────────────────────────────────────────

/// Normalize a raw table into a dataset.
///
/// Fails with `CoreError::Ingestion` when the table has zero columns, or
/// when no column matches a known review name and no column is text-typed.
pub fn normalize(table: &RawTable) -> Result<Dataset, CoreError> {
    if table.columns.is_empty() {
        return Err(CoreError::Ingestion("table has no columns".to_string()));
    }

    let mut rating_idx = find_canonical(table, RATING_COLUMN, RATING_SOURCE_NAMES);

    let review_idx = match find_canonical(table, REVIEW_COLUMN, REVIEW_SOURCE_NAMES) {
        Some(idx) => idx,
        None => {
            let idx = longest_text_column(table).ok_or_else(|| {
                CoreError::Ingestion(
                    "no text column found to use as the review column".to_string(),
                )
            })?;
            // The heuristic considers every text-typed column, so it can
            // claim the one that matched a rating name. Ratings are lost
            // for such tables.
            if Some(idx) == rating_idx {
                rating_idx = None;
            }
            idx
        }
    };

    let review_cells = &table.columns[review_idx].cells;
    let rating_cells = rating_idx.map(|i| &table.columns[i].cells);

    let mut records = Vec::with_capacity(review_cells.len());
    for (row, cell) in review_cells.iter().enumerate() {
        // Null review cells drop the whole row.
        let Some(review_text) = cell.stringified() else {
            continue;
        };
        let rating = rating_cells
            .and_then(|cells| cells.get(row))
            .and_then(CellValue::as_number);
        records.push(ReviewRecord::new(review_text, rating));
    }

    Ok(Dataset::new(records))
}

// ── Private helpers ──────────────────────────────────────────────────

/// First column, in table order, already carrying the canonical name or
/// matching one of the known source names. Later matches are ignored, so
/// duplicate candidates resolve deterministically to the first.
fn find_canonical(table: &RawTable, canonical: &str, source_names: &[&str]) -> Option<usize> {
    table
        .columns
        .iter()
        .position(|c| c.name == canonical || source_names.contains(&c.name.as_str()))
}

/// Index of the text-typed column with the greatest mean text length.
/// Earlier columns win ties.
fn longest_text_column(table: &RawTable) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (idx, column) in table.columns.iter().enumerate() {
        let Some(mean_len) = column.mean_text_len() else {
            continue;
        };
        match best {
            Some((_, best_len)) if mean_len <= best_len => {}
            _ => best = Some((idx, mean_len)),
        }
    }
    best.map(|(idx, _)| idx)
}

// ── Tests ────────────────────────────────────────────────────────────
