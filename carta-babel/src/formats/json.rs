//! JSON format implementation
//!
//! Reads a reply of the text-generation service (the success/result/error
//! envelope, or a bare field mapping) and compiles it. Import only.
//!
//! The reply is decoded by [`crate::upstream::parse_response`], so fenced code
//! blocks and surrounding prose are tolerated. A reply reporting failure is
//! an [`CartaError::UpstreamFailure`].

use crate::compile::{compile, CompiledDocument};
use crate::error::CartaError;
use crate::format::Format;
use crate::upstream::parse_response;

/// Format implementation for service replies
pub struct JsonFormat;

impl Format for JsonFormat {
    fn name(&self) -> &str {
        "json"
    }

    fn description(&self) -> &str {
        "Text-generation service reply (JSON envelope or field mapping)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["json"]
    }

    fn media_type(&self) -> &str {
        "application/json"
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<CompiledDocument, CartaError> {
        let fields = parse_response(source)?.into_fields()?;
        Ok(compile(&fields))
    }
}
