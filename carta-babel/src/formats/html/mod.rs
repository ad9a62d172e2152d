//! HTML format implementation
//!
//! Renders a compiled document for display. Export only; HTML is never read
//! back.
//!
//! # Library Choice
//!
//! We use `html5ever` + `markup5ever_rcdom` for serialization: the display
//! tree is turned into an RcDom and handed to the html5ever serializer, which
//! takes care of escaping text content.
//!
//! # Element Mapping Table
//!
//! | Markup             | HTML                      | Notes                                        |
//! |--------------------|---------------------------|----------------------------------------------|
//! | `## Title`         | `<h2>Title</h2>`          | Only level 2 exists in the dialect           |
//! | `**bold**`         | `<strong>bold</strong>`   | Single line, non-greedy                      |
//! | `- item` run       | `<ul><li>item</li></ul>`  | Items separated by a line break              |
//! | `1. item` run      | `<ol><li>item</li></ol>`  | Only runs not already claimed as unordered   |
//! | other blocks       | `<p>…</p>`                | Unless the block starts with a heading/list  |
//!
//! # Output Format
//!
//! By default the output is a fragment: blocks separated by a line break and
//! no surrounding page. With the `standalone` option the fragment is placed in
//! a complete HTML5 page with the baseline stylesheet embedded.

pub mod serializer;

use crate::compile::CompiledDocument;
use crate::error::CartaError;
use crate::format::Format;
use std::collections::HashMap;

pub use serializer::{HtmlOptions, DEFAULT_TITLE};

/// Format implementation for HTML
#[derive(Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML rendering of the compiled document"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn media_type(&self) -> &str {
        "text/html;charset=utf-8"
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &CompiledDocument) -> Result<String, CartaError> {
        serializer::serialize_to_html(doc, &self.options)
    }

    fn serialize_with_options(
        &self,
        doc: &CompiledDocument,
        options: &HashMap<String, String>,
    ) -> Result<String, CartaError> {
        let mut html_options = self.options.clone();

        if let Some(raw) = options.get("standalone") {
            html_options.standalone = parse_flag(raw)?;
        }
        if let Some(title) = options.get("title") {
            html_options.title = title.clone();
        }
        if let Some(css) = options.get("css") {
            html_options.custom_css = Some(css.clone());
        }

        serializer::serialize_to_html(doc, &html_options)
    }
}

fn parse_flag(raw: &str) -> Result<bool, CartaError> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(CartaError::NotSupported(format!(
            "Invalid boolean value '{other}' for option 'standalone'"
        ))),
    }
}
