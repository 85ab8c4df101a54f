// ============================================================
// LAYOUT PARAMETERS
// ============================================================
// Envelope size, typography and custom dimensions

use serde::{Deserialize, Serialize};

/// Envelope size selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeSize {
    #[default]
    Standard,
    A4,
    Legal,
    Custom,
}

impl EnvelopeSize {
    /// Parse a selector value; unknown names fall back to `Standard`
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "a4" => EnvelopeSize::A4,
            "legal" => EnvelopeSize::Legal,
            "custom" => EnvelopeSize::Custom,
            _ => EnvelopeSize::Standard,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EnvelopeSize::Standard => "standard",
            EnvelopeSize::A4 => "a4",
            EnvelopeSize::Legal => "legal",
            EnvelopeSize::Custom => "custom",
        }
    }
}

impl std::fmt::Display for EnvelopeSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Width,
    Height,
}

/// Layout settings shared by every envelope in a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutParameters {
    pub size: EnvelopeSize,

    /// Font size; pixels on screen, points in print
    pub font_size: u32,

    pub font_family: String,

    /// Only consulted when `size` is `Custom`
    pub custom_width: Option<f64>,

    pub custom_height: Option<f64>,
}

impl Default for LayoutParameters {
    fn default() -> Self {
        Self {
            size: EnvelopeSize::Standard,
            font_size: 14,
            font_family: "Arial".to_string(),
            custom_width: None,
            custom_height: None,
        }
    }
}

impl LayoutParameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, size: EnvelopeSize) -> Self {
        self.size = size;
        self
    }

    pub fn with_font(mut self, family: impl Into<String>, size: u32) -> Self {
        self.font_family = family.into();
        self.font_size = size;
        self
    }

    pub fn with_custom_size(mut self, width: f64, height: f64) -> Self {
        self.size = EnvelopeSize::Custom;
        self.custom_width = Some(width);
        self.custom_height = Some(height);
        self
    }

    /// Both custom dimensions, when the size is custom and both are set
    pub fn custom_dimensions(&self) -> Option<(f64, f64)> {
        match (self.size, self.custom_width, self.custom_height) {
            (EnvelopeSize::Custom, Some(width), Some(height)) => Some((width, height)),
            _ => None,
        }
    }

    pub fn set_size(&mut self, size: EnvelopeSize) {
        self.size = size;
    }

    /// Apply a raw font-size field value. Input without a leading integer
    /// is ignored and the previous size kept.
    pub fn set_font_size_input(&mut self, input: &str) {
        let digits: String = input
            .trim()
            .chars()
            .take_while(|c| c.is_ascii_digit())
            .collect();
        if let Ok(size) = digits.parse::<u32>() {
            if size > 0 {
                self.font_size = size;
            }
        }
    }

    pub fn set_font_family(&mut self, family: impl Into<String>) {
        self.font_family = family.into();
    }

    /// Apply a raw custom-dimension field value. The leading decimal number
    /// is used, so `9.5in` reads as 9.5. Empty, unparsable, zero or negative
    /// input clears the dimension.
    pub fn set_custom_dimension_input(&mut self, dimension: Dimension, input: &str) {
        let value = leading_decimal(input).filter(|v| v.is_finite() && *v > 0.0);
        match dimension {
            Dimension::Width => self.custom_width = value,
            Dimension::Height => self.custom_height = value,
        }
    }
}

/// Longest `[+-]digits[.digits]` prefix of `input`, parsed
fn leading_decimal(input: &str) -> Option<f64> {
    let input = input.trim_start();
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in input.char_indices() {
        match c {
            '+' | '-' if i == 0 => {}
            '0'..='9' => {}
            '.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end = i + c.len_utf8();
    }
    input[..end].parse::<f64>().ok()
}
