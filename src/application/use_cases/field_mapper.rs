//! Header-driven Field Mapper
//!
//! Infers which source column feeds each canonical address field:
//! - Headers are compared lower-cased and trimmed
//! - A header names a field when it *contains* any of the field's synonyms
//! - The first matching header column wins; later matches are ignored
//! - Fields are resolved independently, so one column can feed two fields
//!
//! No scoring, no fuzzy ranking: the result only depends on header order.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::address::{AddressRecord, CanonicalField};
use crate::domain::table::CellValue;

/// Resolved column index per canonical field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    columns: BTreeMap<CanonicalField, usize>,
}

impl ColumnMapping {
    pub fn column_for(&self, field: CanonicalField) -> Option<usize> {
        self.columns.get(&field).copied()
    }

    /// Fields for which some header matched
    pub fn mapped_fields(&self) -> impl Iterator<Item = CanonicalField> + '_ {
        self.columns.keys().copied()
    }

    /// Build a record from one data row. Empty or missing cells leave the
    /// field absent.
    pub fn map_row(&self, row: &[CellValue]) -> AddressRecord {
        AddressRecord::from_fields(self.columns.iter().filter_map(|(field, &index)| {
            row.get(index)
                .and_then(CellValue::as_trimmed)
                .map(|value| (*field, value))
        }))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FieldMapper;

impl FieldMapper {
    pub fn new() -> Self {
        Self
    }

    /// Resolve columns from a header row. Headers are normalized here, so
    /// raw header text is accepted as well.
    pub fn resolve<S: AsRef<str>>(&self, headers: &[S]) -> ColumnMapping {
        let headers: Vec<String> = headers
            .iter()
            .map(|h| h.as_ref().trim().to_lowercase())
            .collect();

        let columns = CanonicalField::ALL
            .iter()
            .filter_map(|field| {
                headers
                    .iter()
                    .position(|header| field.matches_header(header))
                    .map(|index| (*field, index))
            })
            .collect();

        ColumnMapping { columns }
    }

    /// Map a single data row against a header row
    pub fn map<S: AsRef<str>>(&self, headers: &[S], row: &[CellValue]) -> AddressRecord {
        self.resolve(headers).map_row(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<CellValue> {
        values.iter().map(|v| CellValue::text(*v)).collect()
    }

    #[test]
    fn test_maps_common_headers() {
        let headers = ["Name", "Street", "City", "State", "Zip", "Country"];
        let record = FieldMapper::new().map(
            &headers,
            &row(&["Jane Doe", "123 Main St", "Springfield", "IL", "62704", "USA"]),
        );

        assert_eq!(record.get(CanonicalField::Name), Some("Jane Doe"));
        assert_eq!(record.get(CanonicalField::Address1), Some("123 Main St"));
        assert_eq!(record.get(CanonicalField::City), Some("Springfield"));
        assert_eq!(record.get(CanonicalField::State), Some("IL"));
        assert_eq!(record.get(CanonicalField::Zip), Some("62704"));
        assert_eq!(record.get(CanonicalField::Country), Some("USA"));
        assert!(!record.has(CanonicalField::Address2));
    }

    #[test]
    fn test_containment_tolerates_decorated_headers() {
        let headers = ["  Recipient Name ", "Postal Code", "Town"];
        let mapping = FieldMapper::new().resolve(&headers);
        assert_eq!(mapping.column_for(CanonicalField::Name), Some(0));
        assert_eq!(mapping.column_for(CanonicalField::Zip), Some(1));
        assert_eq!(mapping.column_for(CanonicalField::City), Some(2));
    }

    #[test]
    fn test_first_header_column_wins() {
        // "town" is the second synonym but the earlier column
        let headers = ["Town", "City"];
        let mapping = FieldMapper::new().resolve(&headers);
        assert_eq!(mapping.column_for(CanonicalField::City), Some(0));
    }

    #[test]
    fn test_empty_cell_leaves_field_absent() {
        let headers = ["Name", "City"];
        let record = FieldMapper::new().map(&headers, &row(&["Jane Doe", "  "]));
        assert!(!record.has(CanonicalField::City));

        let short = FieldMapper::new().map(&headers, &row(&["Jane Doe"]));
        assert!(!short.has(CanonicalField::City));
    }

    #[test]
    fn test_unmatched_headers_are_ignored() {
        let headers = ["Phone", "Email"];
        let mapping = FieldMapper::new().resolve(&headers);
        assert_eq!(mapping.mapped_fields().count(), 0);
    }

    #[test]
    fn test_one_column_may_feed_two_fields() {
        let headers = ["Name", "Address Line 2"];
        let mapping = FieldMapper::new().resolve(&headers);
        assert_eq!(mapping.column_for(CanonicalField::Address1), Some(1));
        assert_eq!(mapping.column_for(CanonicalField::Address2), Some(1));
    }

    #[test]
    fn test_numeric_cells_are_rendered() {
        let headers = ["Name", "Zip"];
        let record = FieldMapper::new().map(
            &headers,
            &[CellValue::text("Jane Doe"), CellValue::Number(62704.0)],
        );
        assert_eq!(record.get(CanonicalField::Zip), Some("62704"));
    }

    #[test]
    fn test_mapping_is_idempotent() {
        let headers = ["Name", "Street", "City"];
        let data = row(&["Jane Doe", "123 Main St", "Springfield"]);
        let mapper = FieldMapper::new();
        assert_eq!(mapper.map(&headers, &data), mapper.map(&headers, &data));
    }
}
