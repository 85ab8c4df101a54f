// ============================================================
// TABULAR INFRASTRUCTURE LAYER
// ============================================================
// CSV and workbook decoding into the shared RawTable shape

mod csv_reader;
mod spreadsheet_reader;
mod tabular_reader;

pub use csv_reader::{decode_text, parse_line, CsvDialect, CsvReader};
pub use spreadsheet_reader::SpreadsheetReader;
pub use tabular_reader::TabularReader;
