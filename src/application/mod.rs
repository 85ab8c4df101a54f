pub mod use_cases;

pub use use_cases::address_formatter::AddressFormatter;
pub use use_cases::address_ingestion::AddressIngestion;
pub use use_cases::address_validator::AddressValidator;
pub use use_cases::envelope_composer::{EnvelopeComposer, PreviewSizePolicy, SizePolicy};
pub use use_cases::envelope_session::EnvelopeSession;
pub use use_cases::field_mapper::{ColumnMapping, FieldMapper};
pub use use_cases::progress::{NoProgress, Progress, ProgressSink};
