//! Plain-text format implementation
//!
//! Serializes through [`crate::reduce::reduce`]. Export only: plain text
//! carries no markup to read back.

use crate::compile::CompiledDocument;
use crate::error::CartaError;
use crate::format::Format;
use crate::reduce::reduce;

/// Format implementation for plain text
pub struct TextFormat;

impl Format for TextFormat {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with the markup removed"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn media_type(&self) -> &str {
        "text/plain;charset=utf-8"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &CompiledDocument) -> Result<String, CartaError> {
        Ok(reduce(doc))
    }
}
