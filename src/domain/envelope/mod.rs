// ============================================================
// ENVELOPE DOMAIN LAYER
// ============================================================
// Layout parameters, placement metadata and composed documents

mod document;
mod layout;
mod placement;

pub use document::{EnvelopeDocument, ReturnAddressBlock};
pub use layout::{Dimension, EnvelopeSize, LayoutParameters};
pub use placement::{Anchor, ContentBox, FontUnit, Placement, RenderTarget};
