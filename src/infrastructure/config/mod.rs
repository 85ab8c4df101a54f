use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::envelope::{LayoutParameters, ReturnAddressBlock};
use crate::domain::error::{EnvelopeError, Result};
use crate::infrastructure::tabular::CsvDialect;

const DEFAULT_CONFIG_FILE: &str = "Envelope.toml";
const ENV_PREFIX: &str = "ENVELOPE_";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub csv_dialect: CsvDialect,
}

/// Startup settings for a printing session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvelopeConfig {
    pub layout: LayoutParameters,

    /// Initial return block (markup, edited freely by the user afterwards)
    pub return_address: String,

    pub reader: ReaderConfig,
}

impl Default for EnvelopeConfig {
    fn default() -> Self {
        Self {
            layout: LayoutParameters::default(),
            return_address: "Your Name<br>123 Your Street<br>Your City, ST 12345".to_string(),
            reader: ReaderConfig::default(),
        }
    }
}

impl EnvelopeConfig {
    pub fn return_block(&self) -> ReturnAddressBlock {
        ReturnAddressBlock::new(self.return_address.clone())
    }

    pub fn validate(&self) -> Result<()> {
        if self.layout.font_size == 0 {
            return Err(EnvelopeError::Config("layout.font_size must be > 0".to_string()));
        }
        if self.layout.font_family.trim().is_empty() {
            return Err(EnvelopeError::Config(
                "layout.font_family must not be empty".to_string(),
            ));
        }
        for (key, value) in [
            ("layout.custom_width", self.layout.custom_width),
            ("layout.custom_height", self.layout.custom_height),
        ] {
            if let Some(value) = value {
                if !(value.is_finite() && value > 0.0) {
                    return Err(EnvelopeError::Config(format!("{} must be > 0", key)));
                }
            }
        }
        Ok(())
    }
}

/// Layered config: defaults, then a TOML file, then `ENVELOPE_*` env vars
pub struct ConfigService {
    file: PathBuf,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }

    pub fn with_file(mut self, file: impl AsRef<Path>) -> Self {
        self.file = file.as_ref().to_path_buf();
        self
    }

    pub fn figment(&self) -> Figment {
        Figment::from(Serialized::defaults(EnvelopeConfig::default()))
            .merge(Toml::file(&self.file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn load(&self) -> Result<EnvelopeConfig> {
        let config: EnvelopeConfig = self
            .figment()
            .extract()
            .map_err(|e| EnvelopeError::Config(e.to_string()))?;
        config.validate()?;

        debug!(file = %self.file.display(), size = %config.layout.size, "Loaded envelope config");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
