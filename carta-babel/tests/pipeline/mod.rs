//! End-to-end scenarios: upstream reply → session → compile → render/reduce → export.

use crate::common::{fields, fixture};
use carta_babel::export::{DEFAULT_MARKDOWN_FILE_NAME, DEFAULT_TEXT_FILE_NAME, NOTHING_TO_DOWNLOAD};
use carta_babel::{
    compile, copy_text, export_markdown, export_text, parse_response, reduce, render, CartaError,
    FieldKey, FormatRegistry, ResultFields, Session,
};

#[test]
fn two_fields_compile_and_render_as_two_sections() {
    let doc = compile(&fields(&[
        (FieldKey::DescricaoResumida, "Resumo X"),
        (FieldKey::Custo, "Gratuito"),
    ]));

    assert_eq!(
        doc.as_str(),
        "## Descrição Resumida\n\nResumo X\n\n## Custo\n\nGratuito"
    );
    assert_eq!(
        render(&doc),
        "<h2>Descrição Resumida</h2>\n<p>Resumo X</p>\n<h2>Custo</h2>\n<p>Gratuito</p>"
    );
}

#[test]
fn all_fields_empty_gives_nothing_to_render_or_export() {
    let doc = compile(&ResultFields::new());
    assert_eq!(doc.as_str(), "");
    assert_eq!(render(&doc), "");

    let mut session = Session::new();
    session.set(doc);
    assert_eq!(
        export_markdown(&session, DEFAULT_MARKDOWN_FILE_NAME),
        Err(CartaError::InputAbsent(NOTHING_TO_DOWNLOAD.to_string()))
    );
    assert!(export_text(&session, DEFAULT_TEXT_FILE_NAME).is_err());
    assert!(copy_text(&session).is_err());
}

#[test]
fn bullet_field_renders_one_list_and_reduces_to_lines() {
    let doc = compile(&fields(&[(FieldKey::DocumentosNecessarios, "- RG\n- CPF")]));

    assert_eq!(
        render(&doc),
        "<h2>Documentos necessários</h2>\n<ul><li>RG</li>\n<li>CPF</li></ul>"
    );
    assert!(reduce(&doc).ends_with("RG\nCPF"));
}

#[test]
fn failed_reply_empties_session_and_blocks_exports() {
    let mut session = Session::new();
    session.begin_attempt("Segunda via do IPTU").unwrap();
    session
        .complete_attempt(parse_response(&fixture("iptu.json")).unwrap())
        .unwrap();
    assert!(!session.is_empty());

    session.begin_attempt("Segunda via do IPTU").unwrap();
    let err = session
        .complete_attempt(parse_response(&fixture("failure.json")).unwrap())
        .unwrap_err();

    assert_eq!(
        err,
        CartaError::UpstreamFailure("Limite de requisições excedido.".to_string())
    );
    assert!(session.is_empty());
    assert!(matches!(
        export_markdown(&session, DEFAULT_MARKDOWN_FILE_NAME),
        Err(CartaError::InputAbsent(_))
    ));
}

#[test]
fn full_reply_flows_to_both_artifacts() {
    let mut session = Session::new();
    session.begin_attempt("IPTU").unwrap();
    let doc = session
        .complete_attempt(parse_response(&fixture("iptu.json")).unwrap())
        .unwrap();

    let markdown = export_markdown(&session, DEFAULT_MARKDOWN_FILE_NAME).unwrap();
    assert_eq!(markdown.text(), doc.as_str());
    assert!(markdown.text().starts_with("## Descrição Resumida\n\n"));

    let text = export_text(&session, DEFAULT_TEXT_FILE_NAME).unwrap();
    assert_eq!(
        text.text(),
        "Descrição Resumida\n\n\
         Emissão da segunda via do carnê do IPTU.\n\n\
         Tempo para atendimento\n\n\
         Imediato\n\n\
         Custo\n\n\
         Gratuito\n\n\
         Documentos necessários\n\n\
         Documento de identidade com foto\n\
         Inscrição imobiliária do imóvel\n\n\
         Canais digitais\n\n\
         Acesse o portal da prefeitura\n\
         Informe a inscrição\n\
         Imprima o boleto"
    );
    assert_eq!(copy_text(&session).unwrap(), text.text());
}

#[test]
fn fenced_reply_is_decoded_through_the_registry() {
    let registry = FormatRegistry::default();
    let doc = registry.parse(&fixture("fenced.txt"), "json").unwrap();

    assert_eq!(
        doc.as_str(),
        "## Descrição Resumida\n\nAgendamento de poda de árvores em vias públicas.\n\n## Custo\n\nGratuito"
    );
}

#[test]
fn registry_html_matches_render() {
    let registry = FormatRegistry::default();
    let doc = registry.parse(&fixture("iptu.json"), "json").unwrap();

    assert_eq!(registry.serialize(&doc, "html").unwrap(), render(&doc));
    assert_eq!(registry.serialize(&doc, "text").unwrap(), reduce(&doc));
    assert_eq!(registry.serialize(&doc, "markdown").unwrap(), doc.as_str());
}
