// ============================================================
// ENVELOPE DOCUMENT
// ============================================================
// One return block paired with one recipient block

use serde::{Deserialize, Serialize};

use super::{ContentBox, LayoutParameters, Placement, RenderTarget};

/// Pre-formatted return address, passed through untouched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReturnAddressBlock(String);

impl ReturnAddressBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ReturnAddressBlock {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ReturnAddressBlock {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A composed envelope, ready for a host to wrap into a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeDocument {
    pub return_block: ReturnAddressBlock,
    pub recipient_lines: Vec<String>,
    pub layout: LayoutParameters,
    pub content_box: ContentBox,
}

impl EnvelopeDocument {
    /// Recipient block for plain-text contexts
    pub fn recipient_text(&self) -> String {
        self.recipient_lines.join("\n")
    }

    /// Recipient block as markup; each line is escaped, then joined with `<br>`
    pub fn recipient_markup(&self) -> String {
        self.recipient_lines
            .iter()
            .map(|line| escape_html(line))
            .collect::<Vec<_>>()
            .join("<br>")
    }

    pub fn placement(&self, target: RenderTarget) -> Placement {
        Placement::for_target(target)
    }

    /// Inline style for one block: position, font and line height
    fn block_style(&self, placement: &Placement, recipient: bool) -> String {
        let unit = placement.font_unit.as_str();
        let (anchor, line_height) = if recipient {
            (placement.recipient_anchor, placement.recipient_line_height)
        } else {
            (placement.return_anchor, placement.return_line_height)
        };

        let mut style = format!(
            "position: absolute; {} font-family: {}; font-size: {}{}; line-height: {};",
            anchor.css(),
            self.layout.font_family,
            self.layout.font_size,
            unit,
            line_height
        );
        if recipient {
            style.push_str(&format!(" font-weight: {};", placement.recipient_font_weight));
        }
        style
    }

    /// `envelope` fragment for the given target. The return block is
    /// emitted as-is since the host supplies it as markup; style values are
    /// attribute-escaped.
    pub fn to_markup(&self, target: RenderTarget) -> String {
        let placement = self.placement(target);
        format!(
            "<div class=\"envelope\">\
             <div class=\"return-address\" style=\"{}\">{}</div>\
             <div class=\"recipient-address\" style=\"{}\">{}</div>\
             </div>",
            escape_html(&self.block_style(&placement, false)),
            self.return_block.as_str(),
            escape_html(&self.block_style(&placement, true)),
            self.recipient_markup()
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> EnvelopeDocument {
        EnvelopeDocument {
            return_block: ReturnAddressBlock::new("Acme Co<br>1 Plant Rd"),
            recipient_lines: vec![
                "Jane Doe".to_string(),
                "Smith & Sons <Rear>".to_string(),
                "Springfield, IL, 62704".to_string(),
            ],
            layout: LayoutParameters::default(),
            content_box: ContentBox::new(456.0, 228.0),
        }
    }

    #[test]
    fn test_recipient_text_uses_newlines() {
        assert_eq!(
            sample().recipient_text(),
            "Jane Doe\nSmith & Sons <Rear>\nSpringfield, IL, 62704"
        );
    }

    #[test]
    fn test_recipient_markup_escapes_lines() {
        assert_eq!(
            sample().recipient_markup(),
            "Jane Doe<br>Smith &amp; Sons &lt;Rear&gt;<br>Springfield, IL, 62704"
        );
    }

    #[test]
    fn test_markup_carries_return_block_verbatim() {
        let markup = sample().to_markup(RenderTarget::Print);
        assert!(markup.contains(">Acme Co<br>1 Plant Rd</div>"));
        assert!(markup.contains("font-size: 14pt"));
        assert!(markup.contains("font-weight: 500"));
        assert!(markup.starts_with("<div class=\"envelope\">"));
    }

    #[test]
    fn test_font_family_cannot_break_out_of_style_attribute() {
        let mut document = sample();
        document
            .layout
            .set_font_family("Evil\" onload=\"alert(1)");
        let markup = document.to_markup(RenderTarget::Preview);

        assert!(!markup.contains("onload=\""));
        assert!(markup.contains("font-family: Evil&quot; onload=&quot;alert(1);"));
    }
}
