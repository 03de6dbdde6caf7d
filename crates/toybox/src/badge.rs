//! Flat SVG badge rendering.
//!
//! Badges use the two-segment "flat" layout popularised by shields.io: a grey
//! label segment on the left and a coloured message segment on the right.
//! Text widths are estimated from a coarse per-glyph table, which is accurate
//! enough for short ASCII labels.

use crate::types::{ImagePayload, ToyError, ToyResult, SVG_MIME};

/// Maximum accepted length (in chars) of the label or the message.
pub const MAX_BADGE_TEXT: usize = 256;

/// Colour used when none is requested.
pub const DEFAULT_COLOR: &str = "brightgreen";

const LABEL_FILL: &str = "#555";
const SEGMENT_PADDING: u32 = 10;
const HEIGHT: u32 = 20;

const NAMED_COLORS: &[(&str, &str)] = &[
    ("brightgreen", "#4c1"),
    ("green", "#97ca00"),
    ("yellowgreen", "#a4a61d"),
    ("yellow", "#dfb317"),
    ("orange", "#fe7d37"),
    ("red", "#e05d44"),
    ("blue", "#007ec6"),
    ("lightgrey", "#9f9f9f"),
    ("grey", "#555"),
    ("success", "#4c1"),
    ("important", "#fe7d37"),
    ("critical", "#e05d44"),
    ("informational", "#007ec6"),
];

/// A badge ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub label: String,
    pub message: String,
    pub color: String,
}

impl Badge {
    pub fn new(label: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            message: message.into(),
            color: DEFAULT_COLOR.to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    /// Render the badge as an SVG document.
    pub fn render_svg(&self) -> ToyResult<String> {
        if self.label.is_empty() && self.message.is_empty() {
            return Err(ToyError::Render(
                "label and text must not both be empty".to_string(),
            ));
        }
        check_text("label", &self.label)?;
        check_text("text", &self.message)?;
        let fill = resolve_color(&self.color)?;

        let label_width = segment_width(&self.label);
        let message_width = segment_width(&self.message);
        let total = label_width + message_width;

        let label = escape_xml(&self.label);
        let message = escape_xml(&self.message);
        let title = if self.label.is_empty() {
            message.clone()
        } else if self.message.is_empty() {
            label.clone()
        } else {
            format!("{label}: {message}")
        };

        let mut svg = String::with_capacity(1024);
        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{total}\" height=\"{HEIGHT}\" role=\"img\" aria-label=\"{title}\">"
        ));
        svg.push_str(&format!("<title>{title}</title>"));
        svg.push_str(
            "<linearGradient id=\"s\" x2=\"0\" y2=\"100%\">\
             <stop offset=\"0\" stop-color=\"#bbb\" stop-opacity=\".1\"/>\
             <stop offset=\"1\" stop-opacity=\".1\"/></linearGradient>",
        );
        svg.push_str(&format!(
            "<clipPath id=\"r\"><rect width=\"{total}\" height=\"{HEIGHT}\" rx=\"3\" fill=\"#fff\"/></clipPath>"
        ));
        svg.push_str("<g clip-path=\"url(#r)\">");
        if label_width > 0 {
            svg.push_str(&format!(
                "<rect width=\"{label_width}\" height=\"{HEIGHT}\" fill=\"{LABEL_FILL}\"/>"
            ));
        }
        if message_width > 0 {
            svg.push_str(&format!(
                "<rect x=\"{label_width}\" width=\"{message_width}\" height=\"{HEIGHT}\" fill=\"{fill}\"/>"
            ));
        }
        svg.push_str(&format!(
            "<rect width=\"{total}\" height=\"{HEIGHT}\" fill=\"url(#s)\"/></g>"
        ));
        svg.push_str(
            "<g fill=\"#fff\" text-anchor=\"middle\" \
             font-family=\"Verdana,Geneva,DejaVu Sans,sans-serif\" font-size=\"11\">",
        );
        if label_width > 0 {
            let x = label_width / 2;
            svg.push_str(&format!("<text x=\"{x}\" y=\"14\">{label}</text>"));
        }
        if message_width > 0 {
            let x = label_width + message_width / 2;
            svg.push_str(&format!("<text x=\"{x}\" y=\"14\">{message}</text>"));
        }
        svg.push_str("</g></svg>");

        tracing::trace!(width = total, "rendered badge");
        Ok(svg)
    }

    /// Render the badge and wrap it as a base64 image payload.
    pub fn render_payload(&self) -> ToyResult<ImagePayload> {
        let svg = self.render_svg()?;
        Ok(ImagePayload::base64(SVG_MIME, svg.as_bytes()))
    }
}

fn check_text(field: &str, text: &str) -> ToyResult<()> {
    if text.chars().count() > MAX_BADGE_TEXT {
        return Err(ToyError::Render(format!(
            "{field} exceeds {MAX_BADGE_TEXT} characters"
        )));
    }
    if text.chars().any(char::is_control) {
        return Err(ToyError::Render(format!(
            "{field} contains control characters"
        )));
    }
    Ok(())
}

/// Map a colour name or hex literal to an SVG fill.
pub fn resolve_color(color: &str) -> ToyResult<String> {
    let lowered = color.trim().to_ascii_lowercase();
    if let Some((_, hex)) = NAMED_COLORS.iter().find(|(name, _)| *name == lowered) {
        return Ok((*hex).to_string());
    }

    if let Some(digits) = lowered.strip_prefix('#') {
        if matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Ok(lowered);
        }
    }

    Err(ToyError::Render(format!("unknown color: {color}")))
}

fn segment_width(text: &str) -> u32 {
    if text.is_empty() {
        return 0;
    }
    text.chars().map(glyph_width).sum::<u32>() + SEGMENT_PADDING * 2
}

fn glyph_width(c: char) -> u32 {
    match c {
        'i' | 'l' | 'I' | 'j' | '1' | '.' | ',' | ':' | ';' | '|' | '!' | '\'' => 4,
        'f' | 't' | 'r' | ' ' | '(' | ')' | '[' | ']' => 5,
        'm' | 'w' | 'M' | 'W' | '@' => 10,
        c if c.is_ascii_uppercase() => 8,
        c if c.is_ascii() => 7,
        _ => 11,
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}
