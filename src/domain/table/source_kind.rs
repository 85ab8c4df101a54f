// ============================================================
// SOURCE KIND
// ============================================================
// Declared input format, inferred by the host from the file extension

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::error::{EnvelopeError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceKind {
    /// Comma-separated text
    DelimitedText,

    /// Excel/OpenDocument workbook
    SpreadsheetBinary,
}

impl SourceKind {
    pub fn from_extension(extension: &str) -> Result<Self> {
        let extension = extension.trim().trim_start_matches('.').to_lowercase();
        match extension.as_str() {
            "csv" => Ok(SourceKind::DelimitedText),
            "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Ok(SourceKind::SpreadsheetBinary),
            _ => Err(EnvelopeError::UnsupportedFormat { extension }),
        }
    }

    /// Infer from a file name; the extension is whatever follows the last dot
    pub fn from_file_name(name: &str) -> Result<Self> {
        let extension = name.rsplit('.').next().unwrap_or_default();
        Self::from_extension(extension)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_extension(&extension)
    }
}

impl std::fmt::Display for SourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceKind::DelimitedText => write!(f, "delimited-text"),
            SourceKind::SpreadsheetBinary => write!(f, "spreadsheet-binary"),
        }
    }
}
