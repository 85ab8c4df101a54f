use serde::{Serialize, Serializer};
use thiserror::Error;

/// Boxed cause carried by decode failures.
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum EnvelopeError {
    #[error("Unsupported file format '{extension}'. Please use CSV or Excel files.")]
    UnsupportedFormat { extension: String },

    #[error("Failed to decode {context}: {source}")]
    DecodeFailure {
        context: String,
        #[source]
        source: BoxedCause,
    },

    #[error("File must contain headers and at least one address (found {rows} usable rows)")]
    EmptyTable { rows: usize },

    #[error("No valid addresses found in the file ({rows} rows checked)")]
    NoValidRecords { rows: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl EnvelopeError {
    pub fn decode(context: impl Into<String>, source: impl Into<BoxedCause>) -> Self {
        EnvelopeError::DecodeFailure {
            context: context.into(),
            source: source.into(),
        }
    }

    /// Stable kind tag for hosts that branch on the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            EnvelopeError::UnsupportedFormat { .. } => "unsupported_format",
            EnvelopeError::DecodeFailure { .. } => "decode_failure",
            EnvelopeError::EmptyTable { .. } => "empty_table",
            EnvelopeError::NoValidRecords { .. } => "no_valid_records",
            EnvelopeError::Config(_) => "config",
        }
    }

    /// True when the host should drop any partial selection and return to
    /// the pre-ingestion state.
    pub fn is_ingestion_failure(&self) -> bool {
        !matches!(self, EnvelopeError::Config(_))
    }

    /// Message shown to the user after a failed load.
    pub fn user_message(&self) -> String {
        format!("Error reading file: {}", self)
    }
}

// Hosts ship errors across IPC as `{ kind, message }`.
impl Serialize for EnvelopeError {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("EnvelopeError", 2)?;
        state.serialize_field("kind", self.kind())?;
        state.serialize_field("message", &self.to_string())?;
        state.end()
    }
}

pub type Result<T> = std::result::Result<T, EnvelopeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_format_names_extension() {
        let err = EnvelopeError::UnsupportedFormat {
            extension: "pdf".to_string(),
        };
        assert!(err.to_string().contains("'pdf'"));
        assert_eq!(err.kind(), "unsupported_format");
        assert!(err.user_message().starts_with("Error reading file: "));
    }

    #[test]
    fn test_decode_failure_preserves_cause() {
        use std::error::Error as _;

        let cause = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad zip");
        let err = EnvelopeError::decode("spreadsheet", cause);
        let source = err.source().expect("cause should be kept");
        assert_eq!(source.to_string(), "bad zip");
    }

    #[test]
    fn test_serializes_kind_and_message() {
        let err = EnvelopeError::NoValidRecords { rows: 3 };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "no_valid_records");
        assert!(json["message"].as_str().unwrap().contains("No valid addresses"));
    }
}
