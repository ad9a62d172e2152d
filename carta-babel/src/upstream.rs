//! Decoding of the text-generation service reply.
//!
//! The service answers with a JSON envelope:
//!
//! ```text
//! { "success": true,  "result": { "custo": "Gratuito", ... } }
//! { "success": false, "error": "Cota excedida" }
//! ```
//!
//! The Portuguese member names `sucesso`, `resultado` and `erro` are accepted
//! as well. A `result` that is a bare string is taken to be the full
//! description field. A top-level object without a success member is read as
//! the field mapping itself.
//!
//! Model replies are not always clean JSON: the payload may sit in a fenced
//! code block or be surrounded by prose. [`extract_json_payload`] finds it.

use crate::compile::ResultFields;
use crate::error::CartaError;
use crate::sections::FieldKey;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::{Map, Value};

pub const DEFAULT_FAILURE_MESSAGE: &str = "Erro ao processar o texto. Tente novamente.";

static FENCED_OBJECT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```(?:json)?\s*(\{.*?\})\s*```").unwrap());

/// One reply of the text-generation service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpstreamResponse {
    #[serde(alias = "sucesso", default)]
    pub success: bool,
    #[serde(alias = "resultado", default)]
    pub result: Value,
    #[serde(alias = "erro", default)]
    pub error: Option<String>,
}

impl UpstreamResponse {
    /// A successful reply carrying `result`.
    pub fn succeeded(result: Value) -> Self {
        Self {
            success: true,
            result,
            error: None,
        }
    }

    /// A failed reply with an optional message.
    pub fn failed(error: Option<String>) -> Self {
        Self {
            success: false,
            result: Value::Null,
            error,
        }
    }

    /// The field mapping carried by the reply, regardless of `success`.
    pub fn fields(&self) -> ResultFields {
        match &self.result {
            Value::String(text) => {
                let mut values = Map::new();
                values.insert(
                    FieldKey::DescricaoCompleta.as_str().to_string(),
                    Value::String(text.clone()),
                );
                ResultFields::from(values)
            }
            other => ResultFields::from_value(other),
        }
    }

    /// Split the reply into its fields or the failure to report.
    pub fn into_fields(self) -> Result<ResultFields, CartaError> {
        if self.success {
            Ok(self.fields())
        } else {
            let message = self
                .error
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_string());
            Err(CartaError::UpstreamFailure(message))
        }
    }
}

/// Decode a raw reply into an envelope.
pub fn parse_response(raw: &str) -> Result<UpstreamResponse, CartaError> {
    let payload = extract_json_payload(raw);
    let value: Value = serde_json::from_str(payload).map_err(|e| {
        CartaError::UpstreamFailure(format!("Erro ao fazer parse do JSON: {e}"))
    })?;

    let is_envelope = value
        .as_object()
        .is_some_and(|object| object.contains_key("success") || object.contains_key("sucesso"));

    if is_envelope {
        serde_json::from_value(value).map_err(|e| {
            CartaError::UpstreamFailure(format!("Resposta em formato inesperado: {e}"))
        })
    } else {
        tracing::debug!("reply has no success member, reading it as bare fields");
        Ok(UpstreamResponse::succeeded(value))
    }
}

/// Locate the JSON object inside a model reply: the first fenced block
/// holding an object, else the span from the first `{` to the last `}`, else
/// the trimmed text itself.
pub fn extract_json_payload(raw: &str) -> &str {
    if let Some(object) = FENCED_OBJECT.captures(raw).and_then(|caps| caps.get(1)) {
        return object.as_str();
    }

    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => &raw[start..=end],
        _ => raw.trim(),
    }
}
