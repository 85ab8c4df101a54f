// ============================================================
// ADDRESS DOMAIN LAYER
// ============================================================
// Canonical fields, mapped records and validated lists

mod address_record;
mod canonical_field;

pub use address_record::{AddressRecord, ValidatedAddressList};
pub use canonical_field::CanonicalField;
