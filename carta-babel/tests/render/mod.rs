//! Rendered HTML for representative documents.

use crate::common::fixture;
use carta_babel::markup::render_source;
use carta_babel::{render, CompiledDocument, FormatRegistry};
use insta::assert_snapshot;

fn html(source: &str) -> String {
    render(&CompiledDocument::new(source))
}

#[test]
fn test_full_reply() {
    let doc = FormatRegistry::default()
        .parse(&fixture("iptu.json"), "json")
        .unwrap();

    assert_snapshot!(render(&doc), @r"
    <h2>Descrição Resumida</h2>
    <p>Emissão da segunda via do carnê do IPTU.</p>
    <h2>Tempo para atendimento</h2>
    <p>Imediato</p>
    <h2>Custo</h2>
    <p>Gratuito</p>
    <h2>Documentos necessários</h2>
    <ul><li>Documento de identidade com foto</li>
    <li><strong>Inscrição imobiliária</strong> do imóvel</li></ul>
    <h2>Canais digitais</h2>
    <ol><li>Acesse o portal da prefeitura</li>
    <li>Informe a inscrição</li>
    <li>Imprima o boleto</li></ol>
    ");
}

#[test]
fn test_mixed_adjacent_lists_are_siblings() {
    assert_snapshot!(html("- a\n1. b"), @r"
    <ul><li>a</li></ul>
    <ol><li>b</li></ol>
    ");
}

#[test]
fn test_bullet_run_is_a_single_unordered_list() {
    assert_snapshot!(html("- a\n- b\n- c"), @r"
    <ul><li>a</li>
    <li>b</li>
    <li>c</li></ul>
    ");
}

#[test]
fn test_numbered_run_is_a_single_ordered_list() {
    let output = html("1. a\n2. b");
    assert_eq!(output.matches("<ol>").count(), 1);
    assert!(!output.contains("<ul>"));
}

#[test]
fn test_heading_block_is_not_wrapped() {
    let output = html("## Custo\n\nGratuito");
    assert!(!output.contains("<p><h2>"));
    assert_snapshot!(output, @r"
    <h2>Custo</h2>
    <p>Gratuito</p>
    ");
}

#[test]
fn test_block_starting_with_bold_is_a_paragraph() {
    assert_snapshot!(
        html("**Atenção**: leve o RG"),
        @"<p><strong>Atenção</strong>: leve o RG</p>"
    );
}

#[test]
fn test_multi_line_paragraph_keeps_line_breaks() {
    assert_snapshot!(html("Linha um\nLinha dois"), @r"
    <p>Linha um
    Linha dois</p>
    ");
}

#[test]
fn test_malformed_markup_is_literal() {
    assert_snapshot!(
        html("##sem espaço e **aberto\n-sem espaço"),
        @r"
    <p>##sem espaço e **aberto
    -sem espaço</p>
    "
    );
}

#[test]
fn test_markup_characters_are_escaped() {
    assert_snapshot!(
        html("<script>alert(1)</script> & **<b>**"),
        @"<p>&lt;script&gt;alert(1)&lt;/script&gt; &amp; <strong>&lt;b&gt;</strong></p>"
    );
}

#[test]
fn test_extra_blank_lines_produce_nothing() {
    assert_eq!(html("A\n\n\n\nB"), "<p>A</p>\n<p>B</p>");
    assert_eq!(html("\n\n"), "");
    assert!(render_source("   ").is_empty());
}
