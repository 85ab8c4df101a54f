// ============================================================
// RAW TABLE TYPES
// ============================================================
// Format-agnostic rows-of-cells produced by ingestion

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single decoded cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Build a text cell, collapsing whitespace-only input to `Empty`
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(value)
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Text(s) => s.trim().is_empty(),
            CellValue::Number(_) => false,
            CellValue::Empty => true,
        }
    }

    /// Trimmed display text, `None` when the cell carries nothing
    pub fn as_trimmed(&self) -> Option<String> {
        match self {
            CellValue::Empty => None,
            other => {
                let rendered = other.to_string();
                let trimmed = rendered.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            // Whole numbers print without a fractional part (zip codes, house numbers)
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

/// Ordered rows; row 0 is the header row. Rows need not be rectangular.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    /// Total row count including the header row
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Header cells, lower-cased and trimmed for synonym matching
    pub fn normalized_headers(&self) -> Vec<String> {
        self.rows
            .first()
            .map(|header| {
                header
                    .iter()
                    .map(|cell| cell.to_string().trim().to_lowercase())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Data rows (everything after the header)
    pub fn data_rows(&self) -> &[Vec<CellValue>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_display_drops_zero_fraction() {
        assert_eq!(CellValue::Number(62704.0).to_string(), "62704");
        assert_eq!(CellValue::Number(12.5).to_string(), "12.5");
    }

    #[test]
    fn test_whitespace_text_is_empty() {
        assert_eq!(CellValue::text("   "), CellValue::Empty);
        assert!(CellValue::Text(" \t".to_string()).is_empty());
        assert_eq!(CellValue::text(" Springfield ").as_trimmed().as_deref(), Some("Springfield"));
    }

    #[test]
    fn test_headers_are_normalized() {
        let table = RawTable::new(vec![
            vec!["  Recipient Name ".into(), "ZIP".into()],
            vec!["Jane".into(), 62704.0.into()],
        ]);
        assert_eq!(table.normalized_headers(), vec!["recipient name", "zip"]);
        assert_eq!(table.data_rows().len(), 1);
    }
}
