//! Plain-text reduction
//!
//! Strips markup syntax from the compiled document (never from rendered
//! HTML) for clipboard copies and `.txt` exports. Each step is a separate
//! function applied in a fixed order; no structure is introduced.

use crate::compile::CompiledDocument;
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"##\s+").unwrap());
static BOLD_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^-\s+").unwrap());
static ORDINAL_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\d+\.\s+").unwrap());

/// Reduce a compiled document to plain text.
pub fn reduce(doc: &CompiledDocument) -> String {
    reduce_source(doc.as_str())
}

/// Same as [`reduce`] for raw markup text.
pub fn reduce_source(source: &str) -> String {
    let text = strip_heading_markers(source);
    let text = unwrap_bold_spans(&text);
    let text = strip_bullet_markers(&text);
    let text = strip_ordinal_markers(&text);
    text.trim().to_string()
}

/// `## Title` → `Title`, wherever the marker appears.
pub fn strip_heading_markers(text: &str) -> String {
    HEADING_MARKER.replace_all(text, "").into_owned()
}

/// `**text**` → `text`.
pub fn unwrap_bold_spans(text: &str) -> String {
    BOLD_SPAN.replace_all(text, "$1").into_owned()
}

/// `- item` → `item` at the start of a line.
pub fn strip_bullet_markers(text: &str) -> String {
    BULLET_MARKER.replace_all(text, "").into_owned()
}

/// `3. item` → `item` at the start of a line.
pub fn strip_ordinal_markers(text: &str) -> String {
    ORDINAL_MARKER.replace_all(text, "").into_owned()
}
