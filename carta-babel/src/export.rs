//! Export artifacts
//!
//! Downloads and clipboard copies are built from the session's compiled
//! document, never from rendered HTML. An empty session is reported as
//! [`CartaError::InputAbsent`] and produces nothing.

use crate::error::CartaError;
use crate::format::Format;
use crate::formats::{MarkdownFormat, TextFormat};
use crate::reduce::reduce;
use crate::session::Session;

pub const DEFAULT_MARKDOWN_FILE_NAME: &str = "descricao_servico.md";
pub const DEFAULT_TEXT_FILE_NAME: &str = "descricao_servico.txt";

pub const NOTHING_TO_DOWNLOAD: &str = "Nenhum resultado disponível para download.";
pub const NOTHING_TO_COPY: &str = "Nenhum resultado disponível para copiar.";

/// A named file ready to be offered for download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl Artifact {
    /// Content as text; artifacts are always UTF-8.
    pub fn text(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }
}

/// The compiled document as a `.md` download.
pub fn export_markdown(session: &Session, file_name: &str) -> Result<Artifact, CartaError> {
    export_with(session, &MarkdownFormat, file_name)
}

/// The reduced plain text as a `.txt` download.
pub fn export_text(session: &Session, file_name: &str) -> Result<Artifact, CartaError> {
    export_with(session, &TextFormat, file_name)
}

/// Plain text for the clipboard.
pub fn copy_text(session: &Session) -> Result<String, CartaError> {
    let doc = session.require(NOTHING_TO_COPY)?;
    Ok(reduce(doc))
}

fn export_with(
    session: &Session,
    format: &dyn Format,
    file_name: &str,
) -> Result<Artifact, CartaError> {
    let doc = session.require(NOTHING_TO_DOWNLOAD)?;
    let content = format.serialize(doc)?;
    tracing::info!(file_name, format = format.name(), bytes = content.len(), "exported");

    Ok(Artifact {
        file_name: file_name.to_string(),
        media_type: format.media_type().to_string(),
        bytes: content.into_bytes(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile::CompiledDocument;

    fn session_with(source: &str) -> Session {
        let mut session = Session::new();
        session.set(CompiledDocument::new(source));
        session
    }

    #[test]
    fn markdown_artifact_is_the_raw_document() {
        let session = session_with("## Custo\n\n**Gratuito**");
        let artifact = export_markdown(&session, DEFAULT_MARKDOWN_FILE_NAME).unwrap();

        assert_eq!(artifact.file_name, "descricao_servico.md");
        assert_eq!(artifact.media_type, "text/markdown;charset=utf-8");
        assert_eq!(artifact.text(), "## Custo\n\n**Gratuito**");
    }

    #[test]
    fn text_artifact_is_reduced() {
        let session = session_with("## Custo\n\n**Gratuito**");
        let artifact = export_text(&session, DEFAULT_TEXT_FILE_NAME).unwrap();

        assert_eq!(artifact.file_name, "descricao_servico.txt");
        assert_eq!(artifact.media_type, "text/plain;charset=utf-8");
        assert_eq!(artifact.text(), "Custo\n\nGratuito");
    }

    #[test]
    fn custom_file_names_are_used() {
        let session = session_with("Texto");
        let artifact = export_text(&session, "iptu.txt").unwrap();
        assert_eq!(artifact.file_name, "iptu.txt");
    }

    #[test]
    fn empty_session_has_nothing_to_export() {
        let session = Session::new();
        assert_eq!(
            export_markdown(&session, DEFAULT_MARKDOWN_FILE_NAME),
            Err(CartaError::InputAbsent(NOTHING_TO_DOWNLOAD.to_string()))
        );
        assert_eq!(
            export_text(&session, DEFAULT_TEXT_FILE_NAME),
            Err(CartaError::InputAbsent(NOTHING_TO_DOWNLOAD.to_string()))
        );
        assert_eq!(
            copy_text(&session),
            Err(CartaError::InputAbsent(NOTHING_TO_COPY.to_string()))
        );
    }

    #[test]
    fn copy_gives_plain_text() {
        let session = session_with("## Documentos necessários\n\n- RG\n- CPF");
        assert_eq!(copy_text(&session).unwrap(), "Documentos necessários\n\nRG\nCPF");
    }
}
