//! Raw tabular input: a typed column-oriented table parsed from CSV bytes.
//!
//! Cell typing mirrors what a dataframe reader would infer: empty cells and
//! `NaN` spellings are null, anything that parses as a finite float is a
//! number, everything else is text with the raw cell preserved verbatim.
//! The column normalizer consumes this structure.

use crate::error::CoreError;

// ── Types ────────────────────────────────────────────────────────────

/// A single typed cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Null,
    Number(f64),
    Text(String),
}

impl CellValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// The cell as a number, without coercing text.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The cell rendered as a string; `None` for null cells. Text passes
    /// through unchanged, numbers use `f64` display form.
    pub fn stringified(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Number(n) => Some(n.to_string()),
            Self::Text(s) => Some(s.clone()),
        }
    }
}

/// A named column and its cells, in row order.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<CellValue>,
}

impl Column {
    /// A column is text-typed when at least one of its cells is text.
    /// An all-numeric or all-null column is not a text candidate.
    pub fn is_text_typed(&self) -> bool {
        self.cells.iter().any(|c| matches!(c, CellValue::Text(_)))
    }

    /// Mean character length over the text cells only; `None` when the
    /// column has no text cells. Numeric and null cells do not dilute
    /// the average.
    pub fn mean_text_len(&self) -> Option<f64> {
        let lengths: Vec<usize> = self
            .cells
            .iter()
            .filter_map(|c| match c {
                CellValue::Text(s) => Some(s.chars().count()),
                _ => None,
            })
            .collect();

        if lengths.is_empty() {
            return None;
        }
        Some(lengths.iter().sum::<usize>() as f64 / lengths.len() as f64)
    }
}

/// A raw table of arbitrary column names and cell types.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    pub columns: Vec<Column>,
}

impl RawTable {
    /// Parse CSV bytes into a typed table.
    ///
    /// The first row is the header. Ragged rows are padded with nulls so
    /// every column ends up with one cell per data row. A header-only file
    /// yields zero-row columns; empty input yields zero columns (which the
    /// normalizer rejects).
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, CoreError> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(bytes);

        let headers = reader
            .headers()
            .map_err(|e| CoreError::Ingestion(format!("Unreadable CSV header: {e}")))?
            .clone();

        let mut columns: Vec<Column> = headers
            .iter()
            .map(|name| Column {
                name: name.to_string(),
                cells: Vec::new(),
            })
            .collect();

        for record in reader.records() {
            let record = record
                .map_err(|e| CoreError::Ingestion(format!("Unreadable CSV record: {e}")))?;
            for (i, column) in columns.iter_mut().enumerate() {
                let cell = record.get(i).map_or(CellValue::Null, parse_cell);
                column.cells.push(cell);
            }
        }

        Ok(Self { columns })
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of data rows (cells per column).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.cells.len())
    }
}

// ── Private helpers ──────────────────────────────────────────────────

/// Infer a cell's type from its raw CSV text.
fn parse_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return CellValue::Null;
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_nan() => CellValue::Null,
        Ok(n) => CellValue::Number(n),
        Err(_) => CellValue::Text(raw.to_string()),
    }
}

// ── Tests ────────────────────────────────────────────────────────────
