//! Markdown format implementation
//!
//! The compiled document already is Markdown-compatible markup (level-2
//! headings, bold spans, `-` and `N.` lists), so both directions are the
//! identity apart from trimming on input. This is the `.md` download.

use crate::compile::CompiledDocument;
use crate::error::CartaError;
use crate::format::Format;

/// Format implementation for the markup dialect
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn name(&self) -> &str {
        "markdown"
    }

    fn description(&self) -> &str {
        "Compiled service description markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["md", "markdown"]
    }

    fn media_type(&self) -> &str {
        "text/markdown;charset=utf-8"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<CompiledDocument, CartaError> {
        Ok(CompiledDocument::new(source.trim()))
    }

    fn serialize(&self, doc: &CompiledDocument) -> Result<String, CartaError> {
        Ok(doc.as_str().to_string())
    }
}
