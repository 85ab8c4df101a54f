//! Envelope Composer
//!
//! Pairs the shared return block with each recipient's formatted lines:
//! - Resolves the preview content box from the layout through a `SizePolicy`
//! - Builds one `EnvelopeDocument` per validated record, in list order
//! - Reports advisory progress after every composed record
//!
//! No I/O happens here; hosts render or print the returned documents.

use tracing::{debug, info};

use super::address_formatter::AddressFormatter;
use super::progress::{Progress, ProgressSink};
use crate::domain::address::ValidatedAddressList;
use crate::domain::envelope::{
    ContentBox, EnvelopeDocument, EnvelopeSize, LayoutParameters, ReturnAddressBlock,
};

/// Maps layout parameters to a content box. `None` means "leave the
/// current box as it is".
pub trait SizePolicy {
    fn content_box(&self, layout: &LayoutParameters) -> Option<ContentBox>;
}

/// Bounded on-screen preview sizes
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewSizePolicy;

impl PreviewSizePolicy {
    pub const STANDARD: ContentBox = ContentBox::new(456.0, 228.0);
    pub const A4: ContentBox = ContentBox::new(600.0, 400.0);
    pub const LEGAL: ContentBox = ContentBox::new(650.0, 450.0);

    const CUSTOM_WIDTH_SCALE: f64 = 50.0;
    const CUSTOM_HEIGHT_SCALE: f64 = 30.0;
    const MAX_WIDTH: f64 = 800.0;
    const MAX_HEIGHT: f64 = 500.0;
}

impl SizePolicy for PreviewSizePolicy {
    fn content_box(&self, layout: &LayoutParameters) -> Option<ContentBox> {
        match layout.size {
            EnvelopeSize::Standard => Some(Self::STANDARD),
            EnvelopeSize::A4 => Some(Self::A4),
            EnvelopeSize::Legal => Some(Self::LEGAL),
            EnvelopeSize::Custom => layout.custom_dimensions().map(|(width, height)| {
                ContentBox::new(
                    (width * Self::CUSTOM_WIDTH_SCALE).min(Self::MAX_WIDTH),
                    (height * Self::CUSTOM_HEIGHT_SCALE).min(Self::MAX_HEIGHT),
                )
            }),
        }
    }
}

pub struct EnvelopeComposer<P: SizePolicy = PreviewSizePolicy> {
    policy: P,
    formatter: AddressFormatter,
    current_box: ContentBox,
}

impl EnvelopeComposer<PreviewSizePolicy> {
    pub fn new() -> Self {
        Self::with_policy(PreviewSizePolicy)
    }
}

impl Default for EnvelopeComposer<PreviewSizePolicy> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SizePolicy> EnvelopeComposer<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            policy,
            formatter: AddressFormatter::new(),
            current_box: PreviewSizePolicy::STANDARD,
        }
    }

    pub fn current_box(&self) -> ContentBox {
        self.current_box
    }

    /// Box for `layout`, falling back to the current box when the policy
    /// cannot size it (custom without both dimensions)
    pub fn resolve_box(&self, layout: &LayoutParameters) -> ContentBox {
        self.policy.content_box(layout).unwrap_or(self.current_box)
    }

    /// Adopt a layout change and return the box now in effect
    pub fn apply_layout(&mut self, layout: &LayoutParameters) -> ContentBox {
        match self.policy.content_box(layout) {
            Some(content_box) => self.current_box = content_box,
            None => debug!(size = %layout.size, "Layout has no resolvable size, keeping current box"),
        }
        self.current_box
    }

    pub fn compose_one(
        &self,
        return_block: &ReturnAddressBlock,
        recipient_lines: Vec<String>,
        layout: &LayoutParameters,
    ) -> EnvelopeDocument {
        EnvelopeDocument {
            return_block: return_block.clone(),
            recipient_lines,
            layout: layout.clone(),
            content_box: self.resolve_box(layout),
        }
    }

    /// One document per record, same order, same return block and layout
    pub fn compose_all<S>(
        &self,
        return_block: &ReturnAddressBlock,
        addresses: &ValidatedAddressList,
        layout: &LayoutParameters,
        progress: &S,
    ) -> Vec<EnvelopeDocument>
    where
        S: ProgressSink + ?Sized,
    {
        let total = addresses.len();
        info!(total, size = %layout.size, "Composing envelopes");

        let documents: Vec<EnvelopeDocument> = addresses
            .iter()
            .enumerate()
            .map(|(index, record)| {
                let document =
                    self.compose_one(return_block, self.formatter.format(record), layout);
                progress.report(Progress {
                    completed: index + 1,
                    total,
                });
                document
            })
            .collect();

        debug!(documents = documents.len(), "Envelope batch complete");
        documents
    }
}
