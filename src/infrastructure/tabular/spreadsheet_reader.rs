// ============================================================
// SPREADSHEET READER
// ============================================================
// Decode the first worksheet of a workbook into a RawTable

use std::io::Cursor;

use calamine::{open_workbook_auto_from_rs, Data, Reader};
use tracing::debug;

use crate::domain::error::{EnvelopeError, Result};
use crate::domain::table::{CellValue, RawTable};

#[derive(Debug, Clone, Copy, Default)]
pub struct SpreadsheetReader;

impl SpreadsheetReader {
    pub fn new() -> Self {
        Self
    }

    /// Read workbook bytes (xlsx, xls, xlsb or ods). Only the first sheet
    /// is used; rows whose cells are all empty are dropped.
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<RawTable> {
        let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes.to_vec()))
            .map_err(|e| EnvelopeError::decode("spreadsheet workbook", e))?;

        let range = workbook
            .worksheet_range_at(0)
            .ok_or(EnvelopeError::EmptyTable { rows: 0 })?
            .map_err(|e| EnvelopeError::decode("first worksheet", e))?;

        let rows: Vec<Vec<CellValue>> = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect::<Vec<_>>())
            .filter(|row| !row.iter().all(CellValue::is_empty))
            .collect();

        debug!(rows = rows.len(), "Read first worksheet");

        if rows.len() < 2 {
            return Err(EnvelopeError::EmptyTable { rows: rows.len() });
        }

        Ok(RawTable::new(rows))
    }
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        other => CellValue::text(other.to_string()),
    }
}
