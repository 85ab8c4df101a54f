// ============================================================
// ADDRESS RECORD TYPES
// ============================================================
// Mapped records and the validation-filtered list

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::CanonicalField;

/// Canonical fields mapped from one source row.
///
/// Every stored value is trimmed and non-empty; absent fields are simply
/// missing from the map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressRecord {
    fields: BTreeMap<CanonicalField, String>,
}

impl AddressRecord {
    /// Build a record, dropping values that trim to nothing
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (CanonicalField, S)>,
        S: AsRef<str>,
    {
        let fields = fields
            .into_iter()
            .filter_map(|(field, value)| {
                let value = value.as_ref().trim();
                (!value.is_empty()).then(|| (field, value.to_string()))
            })
            .collect();

        Self { fields }
    }

    pub fn get(&self, field: CanonicalField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn has(&self, field: CanonicalField) -> bool {
        self.fields.contains_key(&field)
    }

    pub fn name(&self) -> Option<&str> {
        self.get(CanonicalField::Name)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Present fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, &str)> {
        self.fields.iter().map(|(field, value)| (*field, value.as_str()))
    }
}

/// Records that passed validation, in source-row order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidatedAddressList {
    records: Vec<AddressRecord>,
}

impl ValidatedAddressList {
    pub(crate) fn new(records: Vec<AddressRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AddressRecord> {
        self.records.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[AddressRecord] {
        &self.records
    }
}

impl<'a> IntoIterator for &'a ValidatedAddressList {
    type Item = &'a AddressRecord;
    type IntoIter = std::slice::Iter<'a, AddressRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_values_are_dropped() {
        let record = AddressRecord::from_fields([
            (CanonicalField::Name, "  Jane Doe "),
            (CanonicalField::State, "   "),
        ]);
        assert_eq!(record.name(), Some("Jane Doe"));
        assert!(!record.has(CanonicalField::State));
    }

    #[test]
    fn test_serializes_as_field_map() {
        let record = AddressRecord::from_fields([
            (CanonicalField::Zip, "62704"),
            (CanonicalField::Name, "Jane Doe"),
        ]);
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Jane Doe","zip":"62704"}"#);
    }
}
