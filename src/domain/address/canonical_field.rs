// ============================================================
// CANONICAL FIELDS
// ============================================================
// The closed set of address components and their header synonyms

use serde::{Deserialize, Serialize};

/// Address component recognised by the mapper.
///
/// Declaration order is the order fields are resolved in, and the order
/// they appear when a record is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanonicalField {
    Name,
    Address1,
    Address2,
    City,
    State,
    Zip,
    Country,
}

impl CanonicalField {
    pub const ALL: [CanonicalField; 7] = [
        CanonicalField::Name,
        CanonicalField::Address1,
        CanonicalField::Address2,
        CanonicalField::City,
        CanonicalField::State,
        CanonicalField::Zip,
        CanonicalField::Country,
    ];

    /// Lower-case substrings that identify this field's column header
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            CanonicalField::Name => &["name", "full name", "recipient", "to"],
            CanonicalField::Address1 => &["address", "address1", "street", "address line 1"],
            CanonicalField::Address2 => {
                &["address2", "suite", "apt", "apartment", "address line 2"]
            }
            CanonicalField::City => &["city", "town"],
            CanonicalField::State => &["state", "province", "region"],
            CanonicalField::Zip => &["zip", "zipcode", "postal", "postal code", "postcode"],
            CanonicalField::Country => &["country"],
        }
    }

    /// Whether a normalized header names this field
    pub fn matches_header(&self, header: &str) -> bool {
        self.synonyms().iter().any(|synonym| header.contains(synonym))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalField::Name => "name",
            CanonicalField::Address1 => "address1",
            CanonicalField::Address2 => "address2",
            CanonicalField::City => "city",
            CanonicalField::State => "state",
            CanonicalField::Zip => "zip",
            CanonicalField::Country => "country",
        }
    }
}

impl std::fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_matching() {
        assert!(CanonicalField::Name.matches_header("recipient name"));
        assert!(CanonicalField::Zip.matches_header("postal code"));
        assert!(CanonicalField::City.matches_header("hometown"));
        assert!(!CanonicalField::Country.matches_header("county"));
    }

    #[test]
    fn test_address_line_two_satisfies_both_address_fields() {
        assert!(CanonicalField::Address1.matches_header("address line 2"));
        assert!(CanonicalField::Address2.matches_header("address line 2"));
    }
}
