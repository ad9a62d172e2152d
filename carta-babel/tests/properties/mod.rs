//! Property tests for compilation and reduction.

use carta_babel::{
    compile, compile_value, reduce, render, CompiledDocument, FieldKey, ResultFields, SECTIONS,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};

/// Field text free of markup characters and digits, with at least one letter.
fn plain_text() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ú][A-Za-zÀ-ú ,;:]{0,24}"
}

/// A random subset of section indices paired with plain text, in random order.
fn filled_sections(min: usize) -> impl Strategy<Value = Vec<(usize, String)>> {
    prop::collection::btree_map(0..SECTIONS.len(), plain_text(), min..8)
        .prop_map(|sections| sections.into_iter().collect::<Vec<_>>())
        .prop_shuffle()
}

fn key(index: usize) -> FieldKey {
    SECTIONS[index].key
}

fn blank_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        Just(json!("")),
        "[ \t\n]{1,6}".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn sections_follow_catalogue_order(sections in filled_sections(2)) {
        let mut values = Map::new();
        for (index, text) in &sections {
            values.insert(
                key(*index).as_str().to_string(),
                Value::String(format!("{text} marca{index:02}")),
            );
        }
        let doc = compile_value(&Value::Object(values));

        let mut expected: Vec<usize> = sections.iter().map(|(index, _)| *index).collect();
        expected.sort_unstable();
        let positions: Vec<usize> = expected
            .iter()
            .map(|index| doc.as_str().find(&format!("marca{index:02}")).unwrap())
            .collect();

        prop_assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn blank_fields_produce_no_section(
        index in 0..SECTIONS.len(),
        blank in blank_value(),
        text in plain_text(),
    ) {
        let other = (index + 1) % SECTIONS.len();
        let mut values = Map::new();
        values.insert(key(index).as_str().to_string(), blank);
        values.insert(key(other).as_str().to_string(), Value::String(text.clone()));

        let doc = compile_value(&Value::Object(values));

        let heading = format!("## {}\n", SECTIONS[index].title);
        prop_assert!(!doc.as_str().contains(&heading));
        prop_assert!(doc.as_str().contains(text.trim()));
    }

    #[test]
    fn reduction_removes_markers_and_keeps_text(sections in filled_sections(1)) {
        let fields = sections
            .iter()
            .fold(ResultFields::new(), |acc, (index, text)| acc.with(key(*index), text.as_str()));
        let plain = reduce(&compile(&fields));

        prop_assert!(!plain.contains("##"));
        prop_assert!(!plain.contains("**"));
        for line in plain.lines() {
            prop_assert!(!line.starts_with("- "));
            prop_assert!(!line.starts_with(|c: char| c.is_ascii_digit()));
        }
        for (_, text) in &sections {
            prop_assert!(plain.contains(text.trim()));
        }
    }

    #[test]
    fn headings_are_never_wrapped_in_paragraphs(sections in filled_sections(1)) {
        let fields = sections
            .iter()
            .fold(ResultFields::new(), |acc, (index, text)| acc.with(key(*index), text.as_str()));
        let html = render(&compile(&fields));

        prop_assert!(!html.contains("<p><h2>"));
    }

    #[test]
    fn rendering_arbitrary_text_never_panics(source in "\\PC{0,64}") {
        let _ = render(&CompiledDocument::new(source.clone()));
        let _ = reduce(&CompiledDocument::new(source));
    }
}

#[test]
fn only_full_description_is_emitted_verbatim() {
    let doc = compile_value(&json!({"descricao_completa": "## X\n\ntext"}));
    assert_eq!(doc.as_str(), "## X\n\ntext");
}
