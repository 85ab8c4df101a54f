// ============================================================
// CSV READER
// ============================================================
// Decode delimited text into a RawTable with encoding detection

use csv::{ReaderBuilder, Trim};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::error::{EnvelopeError, Result};
use crate::domain::table::{CellValue, RawTable};

/// Quoting model used when splitting a line into cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CsvDialect {
    /// A double quote flips an in-quotes flag; nothing is unescaped.
    /// Commas inside quotes do not split.
    #[default]
    Toggle,

    /// Full RFC 4180 handling via the `csv` crate (doubled-quote escapes,
    /// quoted line breaks)
    Rfc4180,
}

/// CSV reader with encoding detection
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    dialect: CsvDialect,
}

impl CsvReader {
    /// Create a new CSV reader with the toggle dialect
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quoting dialect
    pub fn with_dialect(mut self, dialect: CsvDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn dialect(&self) -> CsvDialect {
        self.dialect
    }

    /// Decode raw file bytes and parse them
    pub fn read_bytes(&self, bytes: &[u8]) -> Result<RawTable> {
        let content = decode_text(bytes);
        self.parse_content(&content)
    }

    /// Parse CSV content from string. Blank lines are dropped before the
    /// row count is checked.
    pub fn parse_content(&self, content: &str) -> Result<RawTable> {
        let rows = match self.dialect {
            CsvDialect::Toggle => content
                .split('\n')
                .filter(|line| !line.trim().is_empty())
                .map(parse_line)
                .collect::<Vec<_>>(),
            CsvDialect::Rfc4180 => self.parse_rfc4180(content)?,
        };

        debug!(rows = rows.len(), dialect = ?self.dialect, "Parsed delimited text");

        if rows.len() < 2 {
            return Err(EnvelopeError::EmptyTable { rows: rows.len() });
        }

        Ok(RawTable::new(rows))
    }

    fn parse_rfc4180(&self, content: &str) -> Result<Vec<Vec<CellValue>>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .trim(Trim::All)
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                EnvelopeError::decode(format!("CSV row {}", index + 1), e)
            })?;

            let row: Vec<CellValue> = record.iter().map(CellValue::text).collect();
            if row.iter().all(CellValue::is_empty) {
                continue;
            }
            rows.push(row);
        }

        Ok(rows)
    }
}

/// Split one line on commas outside quotes, trimming each field
pub fn parse_line(line: &str) -> Vec<CellValue> {
    let mut result = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                result.push(CellValue::text(current.trim()));
                current.clear();
            }
            other => current.push(other),
        }
    }

    result.push(CellValue::text(current.trim()));
    result
}

/// Decode bytes as text: BOM first, then strict UTF-8, then Windows-1252
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    match UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        Some(text) => text.into_owned(),
        None => {
            debug!("Input is not valid UTF-8, decoding as Windows-1252");
            let (text, _, _) = WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(row: &[CellValue]) -> Vec<String> {
        row.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_quoted_comma_does_not_split() {
        let row = parse_line(r#""Smith, John",123 Main St"#);
        assert_eq!(texts(&row), vec!["Smith, John", "123 Main St"]);
    }

    #[test]
    fn test_quotes_are_toggles_not_escapes() {
        let row = parse_line(r#""He said ""hi""",x"#);
        assert_eq!(texts(&row), vec!["He said hi", "x"]);
    }

    #[test]
    fn test_empty_fields_are_kept_positionally() {
        let row = parse_line("Jane,,Springfield,");
        assert_eq!(row.len(), 4);
        assert_eq!(row[1], CellValue::Empty);
        assert_eq!(row[3], CellValue::Empty);
    }

    #[test]
    fn test_blank_lines_are_not_rows() {
        let content = "Name,City\n\n   \nJane Doe,Springfield\n\n";
        let table = CsvReader::new().parse_content(content).unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_crlf_is_trimmed() {
        let table = CsvReader::new()
            .parse_content("Name,City\r\nJane Doe,Springfield\r\n")
            .unwrap();
        assert_eq!(texts(&table.rows()[1]), vec!["Jane Doe", "Springfield"]);
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let err = CsvReader::new().parse_content("Name,City\n\n").unwrap_err();
        assert!(matches!(err, EnvelopeError::EmptyTable { rows: 1 }));

        let err = CsvReader::new().parse_content("").unwrap_err();
        assert!(matches!(err, EnvelopeError::EmptyTable { rows: 0 }));
    }

    #[test]
    fn test_rfc4180_unescapes_doubled_quotes() {
        let content = "Name,Note\n\"O\"\"Brien, Pat\",\"two\nlines\"\n";
        let table = CsvReader::new()
            .with_dialect(CsvDialect::Rfc4180)
            .parse_content(content)
            .unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(texts(&table.rows()[1]), vec!["O\"Brien, Pat", "two\nlines"]);
    }

    #[test]
    fn test_rfc4180_drops_blank_rows() {
        let content = "Name,City\n , \nJane,Springfield\n";
        let table = CsvReader::new()
            .with_dialect(CsvDialect::Rfc4180)
            .parse_content(content)
            .unwrap();
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        let bytes = b"\xEF\xBB\xBFName\nJane";
        assert_eq!(decode_text(bytes), "Name\nJane");
    }

    #[test]
    fn test_decode_falls_back_to_windows_1252() {
        // "Zoë" in Windows-1252
        let bytes = b"Zo\xEB";
        assert_eq!(decode_text(bytes), "Zoë");
    }
}
