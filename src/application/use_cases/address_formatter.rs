use crate::domain::address::{AddressRecord, CanonicalField};

/// Country value that is never printed (domestic mail)
const DOMESTIC_COUNTRY: &str = "usa";

const LOCALITY_SEPARATOR: &str = ", ";

/// Renders a record as postal block lines
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressFormatter;

impl AddressFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Lines in order: name, street, second street line, one combined
    /// city/state/zip line, then a foreign country. Absent parts are skipped.
    pub fn format(&self, record: &AddressRecord) -> Vec<String> {
        let mut lines = Vec::new();

        for field in [
            CanonicalField::Name,
            CanonicalField::Address1,
            CanonicalField::Address2,
        ] {
            if let Some(value) = record.get(field) {
                lines.push(value.to_string());
            }
        }

        if let Some(locality) = self.locality_line(record) {
            lines.push(locality);
        }

        if let Some(country) = record.get(CanonicalField::Country) {
            if !country.eq_ignore_ascii_case(DOMESTIC_COUNTRY) {
                lines.push(country.to_string());
            }
        }

        lines
    }

    fn locality_line(&self, record: &AddressRecord) -> Option<String> {
        let parts: Vec<&str> = [CanonicalField::City, CanonicalField::State, CanonicalField::Zip]
            .into_iter()
            .filter_map(|field| record.get(field))
            .collect();

        (!parts.is_empty()).then(|| parts.join(LOCALITY_SEPARATOR))
    }
}
