//! The compiled document must read the same way in a CommonMark renderer,
//! since the `.md` download is opened in ordinary Markdown tools.

use crate::common::fixture;
use carta_babel::FormatRegistry;
use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

fn collect<'a>(root: &'a AstNode<'a>) -> Vec<NodeValue> {
    root.descendants()
        .map(|node| node.data.borrow().value.clone())
        .collect()
}

#[test]
fn compiled_reply_parses_as_commonmark() {
    let doc = FormatRegistry::default()
        .parse(&fixture("iptu.json"), "json")
        .unwrap();

    let arena = Arena::new();
    let root = parse_document(&arena, doc.as_str(), &ComrakOptions::default());
    let nodes = collect(root);

    let heading_levels: Vec<u8> = nodes
        .iter()
        .filter_map(|value| match value {
            NodeValue::Heading(heading) => Some(heading.level),
            _ => None,
        })
        .collect();
    assert_eq!(heading_levels, vec![2, 2, 2, 2, 2]);

    let list_types: Vec<ListType> = nodes
        .iter()
        .filter_map(|value| match value {
            NodeValue::List(list) => Some(list.list_type),
            _ => None,
        })
        .collect();
    assert_eq!(list_types, vec![ListType::Bullet, ListType::Ordered]);

    assert_eq!(
        nodes
            .iter()
            .filter(|value| matches!(value, NodeValue::Strong))
            .count(),
        1
    );
}
