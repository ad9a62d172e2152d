//! Session state
//!
//! A [`Session`] holds the most recently compiled document so that copy and
//! export actions can reuse it without recompiling. It is owned by the UI
//! layer and passed by reference to the export functions.
//!
//! One processing attempt goes:
//!
//! 1. [`Session::begin_attempt`] clears the state and validates the input text
//! 2. the caller talks to the text-generation service
//! 3. [`Session::complete_attempt`] compiles a successful reply and stores it
//!
//! A failed reply (or a failed call that never reaches step 3) leaves the
//! session empty.

use crate::compile::{compile, CompiledDocument};
use crate::error::CartaError;
use crate::upstream::UpstreamResponse;

pub const EMPTY_INPUT_MESSAGE: &str = "Por favor, digite algum texto para processar.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    document: Option<CompiledDocument>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stored document.
    pub fn set(&mut self, doc: CompiledDocument) {
        tracing::debug!(bytes = doc.as_str().len(), "session document replaced");
        self.document = Some(doc);
    }

    pub fn clear(&mut self) {
        self.document = None;
    }

    /// The stored document, if there is one with content.
    pub fn get(&self) -> Option<&CompiledDocument> {
        self.document.as_ref().filter(|doc| !doc.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.get().is_none()
    }

    /// The stored document, or `InputAbsent` carrying `message`.
    pub fn require(&self, message: &str) -> Result<&CompiledDocument, CartaError> {
        self.get()
            .ok_or_else(|| CartaError::InputAbsent(message.to_string()))
    }

    /// Start a new attempt: drop the previous result and check the input.
    pub fn begin_attempt(&mut self, input: &str) -> Result<(), CartaError> {
        self.clear();
        if input.trim().is_empty() {
            tracing::debug!("attempt rejected: empty input");
            return Err(CartaError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string()));
        }
        Ok(())
    }

    /// Finish an attempt with the service reply and return the compiled
    /// document. A reply whose fields are all blank compiles to the empty
    /// document, which the session reports as nothing available.
    pub fn complete_attempt(
        &mut self,
        response: UpstreamResponse,
    ) -> Result<CompiledDocument, CartaError> {
        self.clear();
        let fields = response.into_fields().inspect_err(|err| {
            tracing::info!(%err, "upstream reported a failure");
        })?;

        let doc = compile(&fields);
        self.set(doc.clone());
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn filled() -> Session {
        let mut session = Session::new();
        session.set(CompiledDocument::new("## Custo\n\nGratuito"));
        session
    }

    #[test]
    fn new_session_is_empty() {
        let session = Session::new();
        assert!(session.is_empty());
        assert_eq!(session.get(), None);
    }

    #[test]
    fn set_then_get_returns_document() {
        let session = filled();
        assert_eq!(session.get().unwrap().as_str(), "## Custo\n\nGratuito");
    }

    #[test]
    fn empty_document_counts_as_nothing_available() {
        let mut session = Session::new();
        session.set(CompiledDocument::default());
        assert!(session.is_empty());
        assert_eq!(
            session.require("vazio"),
            Err(CartaError::InputAbsent("vazio".to_string()))
        );
    }

    #[test]
    fn begin_attempt_clears_previous_result() {
        let mut session = filled();
        session.begin_attempt("novo texto").unwrap();
        assert!(session.is_empty());
    }

    #[test]
    fn blank_input_is_rejected_and_state_stays_cleared() {
        let mut session = filled();
        let err = session.begin_attempt(" \n\t").unwrap_err();
        assert_eq!(err, CartaError::InvalidInput(EMPTY_INPUT_MESSAGE.to_string()));
        assert!(session.is_empty());
    }

    #[test]
    fn successful_reply_is_compiled_and_stored() {
        let mut session = Session::new();
        session.begin_attempt("texto").unwrap();
        let doc = session
            .complete_attempt(UpstreamResponse::succeeded(json!({"custo": "Gratuito"})))
            .unwrap();

        assert_eq!(doc.as_str(), "## Custo\n\nGratuito");
        assert_eq!(session.get(), Some(&doc));
    }

    #[test]
    fn all_blank_reply_succeeds_with_nothing_available() {
        let mut session = Session::new();
        let doc = session
            .complete_attempt(UpstreamResponse::succeeded(json!({"custo": "  "})))
            .unwrap();

        assert!(doc.is_empty());
        assert!(session.is_empty());
    }

    #[test]
    fn failed_reply_leaves_session_empty() {
        let mut session = filled();
        let err = session
            .complete_attempt(UpstreamResponse::failed(Some("Cota excedida".into())))
            .unwrap_err();

        assert_eq!(err, CartaError::UpstreamFailure("Cota excedida".to_string()));
        assert!(session.is_empty());
    }
}
