// ============================================================
// ADDRESS INGESTION USE CASE
// ============================================================
// Orchestrate decoding, field mapping and validation

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use super::address_validator::AddressValidator;
use super::field_mapper::FieldMapper;
use crate::domain::address::ValidatedAddressList;
use crate::domain::error::{EnvelopeError, Result};
use crate::domain::table::{RawTable, SourceKind};
use crate::infrastructure::tabular::{CsvDialect, TabularReader};

/// Address ingestion use case
#[derive(Debug, Clone, Default)]
pub struct AddressIngestion {
    reader: TabularReader,
    mapper: FieldMapper,
    validator: AddressValidator,
}

impl AddressIngestion {
    /// Create a new ingestion pipeline with the default CSV dialect
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dialect(dialect: CsvDialect) -> Self {
        Self {
            reader: TabularReader::with_dialect(dialect),
            ..Self::default()
        }
    }

    /// Map and validate every data row of an already decoded table.
    /// Rejected rows are dropped silently; only an all-rejected table fails.
    pub fn ingest_table(&self, table: &RawTable) -> Result<ValidatedAddressList> {
        let headers = table.normalized_headers();
        let mapping = self.mapper.resolve(headers.as_slice());
        debug!(
            fields = ?mapping.mapped_fields().collect::<Vec<_>>(),
            "Resolved header columns"
        );

        let rows = table.data_rows();
        let addresses = self
            .validator
            .retain(rows.iter().map(|row| mapping.map_row(row)));

        if addresses.is_empty() {
            warn!(rows = rows.len(), "No row passed address validation");
            return Err(EnvelopeError::NoValidRecords { rows: rows.len() });
        }

        debug!(
            accepted = addresses.len(),
            dropped = rows.len() - addresses.len(),
            "Validated address rows"
        );
        Ok(addresses)
    }

    /// Process file content synchronously
    pub fn ingest(&self, content: &[u8], kind: SourceKind) -> Result<ValidatedAddressList> {
        let table = self.reader.read(content, kind)?;
        self.ingest_table(&table)
    }

    /// Process file content; decoding runs off the async executor
    pub async fn ingest_async(
        &self,
        content: Vec<u8>,
        kind: SourceKind,
    ) -> Result<ValidatedAddressList> {
        let start = Instant::now();
        let table = self.reader.read_async(content, kind).await?;
        let addresses = self.ingest_table(&table)?;

        info!(
            addresses = addresses.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Address ingestion complete"
        );
        Ok(addresses)
    }

    /// Process a file from disk, kind inferred from its extension
    pub async fn ingest_path(&self, path: &Path) -> Result<ValidatedAddressList> {
        let table = self.reader.read_path(path).await?;
        self.ingest_table(&table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::address_formatter::AddressFormatter;
    use crate::domain::address::CanonicalField;

    #[test]
    fn test_end_to_end_csv() {
        let content = "Name,Street,City,State,Zip,Country\n\
                       Jane Doe,123 Main St,Springfield,IL,62704,USA\n";
        let addresses = AddressIngestion::new()
            .ingest(content.as_bytes(), SourceKind::DelimitedText)
            .unwrap();

        assert_eq!(addresses.len(), 1);
        let lines = AddressFormatter::new().format(addresses.get(0).unwrap());
        assert_eq!(lines, vec!["Jane Doe", "123 Main St", "Springfield, IL, 62704"]);
    }

    #[test]
    fn test_end_to_end_csv_to_documents() {
        use crate::application::use_cases::envelope_composer::EnvelopeComposer;
        use crate::application::use_cases::progress::NoProgress;
        use crate::domain::envelope::{LayoutParameters, ReturnAddressBlock};

        let content = "Name,Street,City,State,Zip,Country\n\
                       Jane Doe,123 Main St,Springfield,IL,62704,USA\n";
        let addresses = AddressIngestion::new()
            .ingest(content.as_bytes(), SourceKind::DelimitedText)
            .unwrap();

        let documents = EnvelopeComposer::new().compose_all(
            &ReturnAddressBlock::new("Acme Co<br>1 Plant Rd"),
            &addresses,
            &LayoutParameters::default(),
            &NoProgress,
        );

        assert_eq!(documents.len(), 1);
        assert_eq!(
            documents[0].recipient_lines,
            vec!["Jane Doe", "123 Main St", "Springfield, IL, 62704"]
        );
        assert_eq!(documents[0].return_block.as_str(), "Acme Co<br>1 Plant Rd");
    }

    #[test]
    fn test_invalid_rows_are_dropped_silently() {
        let content = "Name,Street,City\n\
                       Jane Doe,123 Main St,Springfield\n\
                       ,456 Oak Ave,Shelbyville\n\
                       Nameless Only,,\n\
                       John Roe,,Capital City\n";
        let addresses = AddressIngestion::new()
            .ingest(content.as_bytes(), SourceKind::DelimitedText)
            .unwrap();

        let names: Vec<_> = addresses.iter().filter_map(|r| r.name()).collect();
        assert_eq!(names, vec!["Jane Doe", "John Roe"]);
    }

    #[test]
    fn test_all_rows_rejected_is_an_error() {
        let content = "Name,Phone\nJane Doe,555-0100\nJohn Roe,555-0101\n";
        let err = AddressIngestion::new()
            .ingest(content.as_bytes(), SourceKind::DelimitedText)
            .unwrap_err();
        assert!(matches!(err, EnvelopeError::NoValidRecords { rows: 2 }));
    }

    #[test]
    fn test_quoted_name_survives_pipeline() {
        let content = "Name,Address\n\"Smith, John\",123 Main St\n";
        let addresses = AddressIngestion::new()
            .ingest(content.as_bytes(), SourceKind::DelimitedText)
            .unwrap();
        assert_eq!(
            addresses.get(0).unwrap().get(CanonicalField::Name),
            Some("Smith, John")
        );
    }

    #[tokio::test]
    async fn test_ingest_async_spreadsheet() {
        use rust_xlsxwriter::Workbook;

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        for (c, header) in ["Full Name", "Address", "Town", "Postcode", "Country"]
            .iter()
            .enumerate()
        {
            worksheet.write_string(0, c as u16, *header).unwrap();
        }
        worksheet.write_string(1, 0, "Ann Lee").unwrap();
        worksheet.write_string(1, 1, "9 High St").unwrap();
        worksheet.write_string(1, 2, "Leeds").unwrap();
        worksheet.write_string(1, 3, "LS1 4AP").unwrap();
        worksheet.write_string(1, 4, "United Kingdom").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let addresses = AddressIngestion::new()
            .ingest_async(bytes, SourceKind::SpreadsheetBinary)
            .await
            .unwrap();
        let lines = AddressFormatter::new().format(addresses.get(0).unwrap());
        assert_eq!(lines, vec!["Ann Lee", "9 High St", "Leeds, LS1 4AP", "United Kingdom"]);
    }
}
