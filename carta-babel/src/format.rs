//! Format trait definition
//!
//! Every input and output representation of a service description is a
//! [`Format`]. Parsing produces a [`CompiledDocument`] (the markup text every
//! other operation starts from); serializing turns one into the target
//! representation.

use crate::compile::CompiledDocument;
use crate::error::CartaError;
use std::collections::HashMap;

/// Trait for document formats
///
/// Formats can support parsing, serialization, or both.
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Format for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn supports_serialization(&self) -> bool {
///         true
///     }
///
///     fn serialize(&self, doc: &CompiledDocument) -> Result<String, CartaError> {
///         Ok(doc.as_str().to_uppercase())
///     }
/// }
/// ```
pub trait Format: Send + Sync {
    /// The name of this format (e.g., "json", "markdown", "html")
    fn name(&self) -> &str;

    fn description(&self) -> &str {
        ""
    }

    /// File extensions without the leading dot, used for detection from
    /// filenames.
    fn file_extensions(&self) -> &[&str] {
        &[]
    }

    /// Media type used when the output is offered as a download.
    fn media_type(&self) -> &str {
        "application/octet-stream"
    }

    /// Whether this format supports parsing (source → compiled document)
    fn supports_parsing(&self) -> bool {
        false
    }

    /// Whether this format supports serialization (compiled document → output)
    fn supports_serialization(&self) -> bool {
        false
    }

    fn parse(&self, _source: &str) -> Result<CompiledDocument, CartaError> {
        Err(CartaError::NotSupported(format!(
            "Format '{}' does not support parsing",
            self.name()
        )))
    }

    fn serialize(&self, _doc: &CompiledDocument) -> Result<String, CartaError> {
        Err(CartaError::NotSupported(format!(
            "Format '{}' does not support serialization",
            self.name()
        )))
    }

    /// Serialize with extra parameters.
    ///
    /// The default accepts an empty option map only and delegates to
    /// [`Format::serialize`].
    fn serialize_with_options(
        &self,
        doc: &CompiledDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, CartaError> {
        if options.is_empty() {
            self.serialize(doc)
        } else {
            Err(CartaError::NotSupported(format!(
                "Format '{}' does not support extra parameters",
                self.name()
            )))
        }
    }
}
