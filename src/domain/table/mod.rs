// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// Raw tabular input as seen before field mapping
// No I/O, no async

mod raw_table;
mod source_kind;

pub use raw_table::{CellValue, RawTable};
pub use source_kind::SourceKind;
