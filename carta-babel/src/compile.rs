//! Field compilation
//!
//! Turns the field mapping returned by the text-generation service into one
//! markup document. Sections follow [`SECTIONS`] order regardless of the order
//! of keys in the input; blank fields produce nothing at all.
//!
//! Input is tolerated rather than validated: a missing mapping, a non-object
//! value or a field of an unexpected JSON type all degrade to "omit".

use crate::sections::{FieldKey, SECTIONS};
use serde_json::{Map, Value};
use std::fmt;

/// Field values keyed by their wire name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFields {
    values: Map<String, Value>,
}

impl ResultFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from any JSON value. Anything other than an object is empty.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Object(values) => Self {
                values: values.clone(),
            },
            _ => Self::default(),
        }
    }

    /// Builder-style insert, mostly useful in tests and fixtures.
    pub fn with(mut self, key: FieldKey, text: impl Into<String>) -> Self {
        self.insert(key, text);
        self
    }

    pub fn insert(&mut self, key: FieldKey, text: impl Into<String>) {
        self.values
            .insert(key.as_str().to_string(), Value::String(text.into()));
    }

    /// Text of a field after coercion and trimming; `None` when the section
    /// should be omitted.
    pub fn text(&self, key: FieldKey) -> Option<String> {
        match self.values.get(key.as_str())? {
            Value::String(text) => Some(text.trim().to_string()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
        .filter(|text| !text.is_empty())
    }
}

impl From<Map<String, Value>> for ResultFields {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

/// A document in the four-construct markup dialect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompiledDocument(String);

impl CompiledDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CompiledDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CompiledDocument {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Assemble the non-empty fields into a single document.
///
/// Every section is trimmed before joining, so consecutive sections are always
/// separated by exactly one blank line.
pub fn compile(fields: &ResultFields) -> CompiledDocument {
    let sections: Vec<String> = SECTIONS
        .iter()
        .filter_map(|spec| {
            let text = fields.text(spec.key)?;
            Some(if spec.key.is_verbatim() {
                text
            } else {
                format!("## {}\n\n{text}", spec.title)
            })
        })
        .collect();

    let compiled = CompiledDocument(sections.join("\n\n").trim().to_string());
    tracing::debug!(
        sections = sections.len(),
        bytes = compiled.0.len(),
        "compiled result fields"
    );
    compiled
}

/// Compile an untyped JSON value; `null` and non-objects give the empty document.
pub fn compile_value(value: &Value) -> CompiledDocument {
    compile(&ResultFields::from_value(value))
}
