use crate::domain::address::{AddressRecord, CanonicalField, ValidatedAddressList};

/// Admission gate for mapped records: a name plus either a street line
/// or a city. Nothing else is checked.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddressValidator;

impl AddressValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn accept(&self, record: &AddressRecord) -> bool {
        record.has(CanonicalField::Name)
            && (record.has(CanonicalField::Address1) || record.has(CanonicalField::City))
    }

    /// Keep admissible records in their original order; the rest are dropped
    pub fn retain<I>(&self, records: I) -> ValidatedAddressList
    where
        I: IntoIterator<Item = AddressRecord>,
    {
        ValidatedAddressList::new(records.into_iter().filter(|r| self.accept(r)).collect())
    }
}
