// ============================================================
// TABULAR READER
// ============================================================
// Dispatch on source kind; async entry points for hosts

use std::path::Path;

use tracing::{info, warn};

use super::{CsvDialect, CsvReader, SpreadsheetReader};
use crate::domain::error::{EnvelopeError, Result};
use crate::domain::table::{RawTable, SourceKind};

/// Format-agnostic reader producing a RawTable
#[derive(Debug, Clone, Default)]
pub struct TabularReader {
    csv: CsvReader,
    spreadsheet: SpreadsheetReader,
}

impl TabularReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(dialect: CsvDialect) -> Self {
        Self {
            csv: CsvReader::new().with_dialect(dialect),
            spreadsheet: SpreadsheetReader::new(),
        }
    }

    /// Decode file content of the declared kind
    pub fn read(&self, content: &[u8], kind: SourceKind) -> Result<RawTable> {
        let result = match kind {
            SourceKind::DelimitedText => self.csv.read_bytes(content),
            SourceKind::SpreadsheetBinary => self.spreadsheet.read_bytes(content),
        };

        match &result {
            Ok(table) => info!(kind = %kind, rows = table.len(), "Decoded table"),
            Err(err) => warn!(kind = %kind, error = %err, "Failed to decode table"),
        }

        result
    }

    /// Decode off the async executor. Resolves once, with the whole table
    /// or the failure.
    pub async fn read_async(&self, content: Vec<u8>, kind: SourceKind) -> Result<RawTable> {
        let reader = self.clone();
        tokio::task::spawn_blocking(move || reader.read(&content, kind))
            .await
            .map_err(|e| EnvelopeError::decode("reader task", e))?
    }

    /// Read a file from disk, inferring its kind from the extension
    pub async fn read_path(&self, path: &Path) -> Result<RawTable> {
        let kind = SourceKind::from_path(path)?;
        let content = tokio::fs::read(path)
            .await
            .map_err(|e| EnvelopeError::decode(format!("file {}", path.display()), e))?;
        self.read_async(content, kind).await
    }
}
