pub mod address_formatter;
pub mod address_ingestion;
pub mod address_validator;
pub mod envelope_composer;
pub mod envelope_session;
pub mod field_mapper;
pub mod progress;
