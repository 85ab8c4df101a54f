// ============================================================
// PLACEMENT METADATA
// ============================================================
// Where the two address blocks sit, per output target

use serde::{Deserialize, Serialize};

/// On-screen content box in pixel equivalents
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContentBox {
    pub width: f64,
    pub height: f64,
}

impl ContentBox {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Output surface a document is destined for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderTarget {
    /// On-screen preview; pixel font sizing
    #[default]
    Preview,

    /// Printed page; physical units and point font sizing
    Print,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontUnit {
    Px,
    Pt,
}

impl FontUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            FontUnit::Px => "px",
            FontUnit::Pt => "pt",
        }
    }
}

/// Offset of a block from the envelope edges, in inches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Anchor {
    TopLeft { top: f64, left: f64 },
    BottomRight { bottom: f64, right: f64 },
}

impl Anchor {
    /// CSS positioning declarations for this anchor
    pub fn css(&self) -> String {
        match self {
            Anchor::TopLeft { top, left } => format!("top: {}in; left: {}in;", top, left),
            Anchor::BottomRight { bottom, right } => {
                format!("bottom: {}in; right: {}in;", bottom, right)
            }
        }
    }
}

/// Positional and typographic metadata for one render target
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub target: RenderTarget,
    pub return_anchor: Anchor,
    pub recipient_anchor: Anchor,
    pub return_line_height: f64,
    pub recipient_line_height: f64,
    pub recipient_font_weight: u16,
    pub font_unit: FontUnit,
}

impl Placement {
    pub fn for_target(target: RenderTarget) -> Self {
        let (inset, font_unit) = match target {
            RenderTarget::Preview => (1.0, FontUnit::Px),
            RenderTarget::Print => (0.5, FontUnit::Pt),
        };

        Self {
            target,
            return_anchor: Anchor::TopLeft {
                top: inset,
                left: inset,
            },
            recipient_anchor: Anchor::BottomRight {
                bottom: 2.0,
                right: 1.0,
            },
            return_line_height: 1.4,
            recipient_line_height: 1.5,
            recipient_font_weight: 500,
            font_unit,
        }
    }
}
