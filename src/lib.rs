//! Address list ingestion and envelope composition.
//!
//! Pipeline: `TabularReader` → `FieldMapper` → `AddressValidator` →
//! `AddressFormatter` → `EnvelopeComposer`. Hosts usually drive it through
//! `EnvelopeSession`, obtained from [`app::start`].

pub mod app;
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    AddressFormatter, AddressIngestion, AddressValidator, ColumnMapping, EnvelopeComposer,
    EnvelopeSession, FieldMapper, NoProgress, PreviewSizePolicy, Progress, ProgressSink,
    SizePolicy,
};
pub use domain::address::{AddressRecord, CanonicalField, ValidatedAddressList};
pub use domain::envelope::{
    ContentBox, Dimension, EnvelopeDocument, EnvelopeSize, LayoutParameters, Placement,
    RenderTarget, ReturnAddressBlock,
};
pub use domain::error::{EnvelopeError, Result};
pub use domain::table::{CellValue, RawTable, SourceKind};
pub use infrastructure::config::{ConfigService, EnvelopeConfig};
pub use infrastructure::tabular::{CsvDialect, TabularReader};
