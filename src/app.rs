use std::path::Path;

use crate::application::EnvelopeSession;
use crate::domain::error::Result;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::logging::init_tracing;

/// Host entry point: install logging, load layered config and open a
/// session. `config_file` overrides the default `Envelope.toml`.
pub fn start(config_file: Option<&Path>) -> Result<EnvelopeSession> {
    init_tracing("info");

    let service = match config_file {
        Some(path) => ConfigService::new().with_file(path),
        None => ConfigService::new(),
    };
    let config = service.load()?;

    tracing::info!(
        size = %config.layout.size,
        font = %config.layout.font_family,
        dialect = ?config.reader.csv_dialect,
        "Envelope session started"
    );
    Ok(EnvelopeSession::from_config(&config))
}
