// ============================================================
// ENVELOPE SESSION USE CASE
// ============================================================
// Host-facing state: loaded addresses, cursor, layout and return block

use std::path::Path;

use tracing::{info, warn};

use super::address_formatter::AddressFormatter;
use super::address_ingestion::AddressIngestion;
use super::envelope_composer::EnvelopeComposer;
use super::progress::ProgressSink;
use crate::domain::address::{AddressRecord, ValidatedAddressList};
use crate::domain::envelope::{ContentBox, EnvelopeDocument, LayoutParameters, ReturnAddressBlock};
use crate::domain::error::Result;
use crate::domain::table::SourceKind;
use crate::infrastructure::config::EnvelopeConfig;

/// One user's printing session
pub struct EnvelopeSession {
    ingestion: AddressIngestion,
    composer: EnvelopeComposer,
    formatter: AddressFormatter,
    return_block: ReturnAddressBlock,
    layout: LayoutParameters,
    addresses: ValidatedAddressList,
    cursor: usize,
}

impl EnvelopeSession {
    pub fn new(return_block: ReturnAddressBlock, layout: LayoutParameters) -> Self {
        Self::build(AddressIngestion::new(), return_block, layout)
    }

    pub fn from_config(config: &EnvelopeConfig) -> Self {
        Self::build(
            AddressIngestion::with_dialect(config.reader.csv_dialect),
            config.return_block(),
            config.layout.clone(),
        )
    }

    fn build(
        ingestion: AddressIngestion,
        return_block: ReturnAddressBlock,
        layout: LayoutParameters,
    ) -> Self {
        let mut composer = EnvelopeComposer::new();
        composer.apply_layout(&layout);

        Self {
            ingestion,
            composer,
            formatter: AddressFormatter::new(),
            return_block,
            layout,
            addresses: ValidatedAddressList::default(),
            cursor: 0,
        }
    }

    /// Replace the loaded addresses with the contents of a file. Any failure
    /// leaves the session empty, as before a file was chosen.
    pub async fn load(&mut self, content: Vec<u8>, kind: SourceKind) -> Result<usize> {
        let result = self.ingestion.ingest_async(content, kind).await;
        self.accept(result)
    }

    pub async fn load_path(&mut self, path: &Path) -> Result<usize> {
        let result = self.ingestion.ingest_path(path).await;
        self.accept(result)
    }

    fn accept(&mut self, result: Result<ValidatedAddressList>) -> Result<usize> {
        match result {
            Ok(addresses) => {
                self.addresses = addresses;
                self.cursor = 0;
                info!(addresses = self.addresses.len(), "Session loaded addresses");
                Ok(self.addresses.len())
            }
            Err(err) => {
                warn!(error = %err, "Load failed, resetting session");
                self.clear();
                Err(err)
            }
        }
    }

    /// Drop loaded addresses and rewind the cursor
    pub fn clear(&mut self) {
        self.addresses = ValidatedAddressList::default();
        self.cursor = 0;
    }

    pub fn is_loaded(&self) -> bool {
        !self.addresses.is_empty()
    }

    pub fn addresses(&self) -> &ValidatedAddressList {
        &self.addresses
    }

    pub fn return_block(&self) -> &ReturnAddressBlock {
        &self.return_block
    }

    pub fn set_return_block(&mut self, return_block: ReturnAddressBlock) {
        self.return_block = return_block;
    }

    pub fn layout(&self) -> &LayoutParameters {
        &self.layout
    }

    /// Apply a layout edit and re-resolve the preview box
    pub fn update_layout<F>(&mut self, edit: F) -> ContentBox
    where
        F: FnOnce(&mut LayoutParameters),
    {
        edit(&mut self.layout);
        self.composer.apply_layout(&self.layout)
    }

    pub fn content_box(&self) -> ContentBox {
        self.composer.current_box()
    }

    /// Move the cursor by `delta`; moves that would leave the list are ignored
    pub fn navigate(&mut self, delta: isize) -> bool {
        match self.cursor.checked_add_signed(delta) {
            Some(target) if target < self.addresses.len() => {
                self.cursor = target;
                true
            }
            _ => false,
        }
    }

    /// `(1-based position, total)`, or `None` when nothing is loaded
    pub fn position(&self) -> Option<(usize, usize)> {
        self.is_loaded()
            .then(|| (self.cursor + 1, self.addresses.len()))
    }

    pub fn has_previous(&self) -> bool {
        self.cursor > 0
    }

    pub fn has_next(&self) -> bool {
        self.cursor + 1 < self.addresses.len()
    }

    pub fn current(&self) -> Option<&AddressRecord> {
        self.addresses.get(self.cursor)
    }

    /// Envelope for the record under the cursor
    pub fn current_document(&self) -> Option<EnvelopeDocument> {
        self.current().map(|record| {
            self.composer.compose_one(
                &self.return_block,
                self.formatter.format(record),
                &self.layout,
            )
        })
    }

    pub fn compose_all<S>(&self, progress: &S) -> Vec<EnvelopeDocument>
    where
        S: ProgressSink + ?Sized,
    {
        self.composer
            .compose_all(&self.return_block, &self.addresses, &self.layout, progress)
    }
}
