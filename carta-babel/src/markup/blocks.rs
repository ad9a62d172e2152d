//! Block stages: splitting, list grouping, paragraph wrapping and cleanup.
//!
//! List grouping runs in two passes. The unordered pass turns every maximal
//! run of adjacent bullet items into a [`Span::List`]; a run wrapped that way
//! is claimed and is no longer an item as far as later passes can see. The
//! ordered pass then wraps maximal runs of the items that are left. A run is
//! never wrapped twice, and a bullet run directly followed by a numbered run
//! yields two sibling containers.

use crate::ir::nodes::{DocNode, List, ListItem, ListKind};
use crate::markup::inline::parse_inlines;
use crate::markup::lines::{Line, Marker};

/// A block element between classification and tree building.
#[derive(Debug, Clone, PartialEq)]
pub enum Span {
    Line(Line),
    List(ListRun),
}

/// Items claimed by one grouping pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRun {
    pub kind: ListKind,
    pub items: Vec<String>,
}

/// Split classified lines into blocks at blank lines. Runs of several blank
/// lines never produce empty blocks.
pub fn split_blocks(lines: Vec<Line>) -> Vec<Vec<Line>> {
    let mut blocks = Vec::new();
    let mut current = Vec::new();

    for line in lines {
        if line == Line::Blank {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

/// Trim the edges of a block: whitespace-only text lines at either end are
/// dropped, then the first and last text lines lose outer whitespace.
pub fn trim_block(mut block: Vec<Line>) -> Vec<Line> {
    let is_blank_text = |line: &Line| matches!(line, Line::Text(text) if text.trim().is_empty());

    while block.first().is_some_and(is_blank_text) {
        block.remove(0);
    }
    while block.last().is_some_and(is_blank_text) {
        block.pop();
    }

    if let Some(Line::Text(text)) = block.first_mut() {
        *text = text.trim_start().to_string();
    }
    if let Some(Line::Text(text)) = block.last_mut() {
        *text = text.trim_end().to_string();
    }

    block
}

/// First grouping pass: wrap runs of adjacent bullet items.
pub fn group_unordered(block: Vec<Line>) -> Vec<Span> {
    let mut spans = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for line in block {
        match line {
            Line::Item {
                marker: Marker::Bullet,
                text,
            } => run.push(text),
            other => {
                flush_run(&mut spans, &mut run, ListKind::Unordered);
                spans.push(Span::Line(other));
            }
        }
    }
    flush_run(&mut spans, &mut run, ListKind::Unordered);

    spans
}

/// Second grouping pass: wrap runs of adjacent items not claimed by the first.
pub fn group_ordered(spans: Vec<Span>) -> Vec<Span> {
    let mut grouped = Vec::new();
    let mut run: Vec<String> = Vec::new();

    for span in spans {
        match span {
            Span::Line(Line::Item { text, .. }) => run.push(text),
            other => {
                flush_run(&mut grouped, &mut run, ListKind::Ordered);
                grouped.push(other);
            }
        }
    }
    flush_run(&mut grouped, &mut run, ListKind::Ordered);

    grouped
}

fn flush_run(spans: &mut Vec<Span>, run: &mut Vec<String>, kind: ListKind) {
    if !run.is_empty() {
        spans.push(Span::List(ListRun {
            kind,
            items: std::mem::take(run),
        }));
    }
}

/// Build display nodes for one block, wrapping it in a paragraph unless it
/// starts with a heading or a list container.
pub fn wrap_block(spans: Vec<Span>) -> Vec<DocNode> {
    let nodes: Vec<DocNode> = spans.into_iter().filter_map(span_to_node).collect();

    match nodes.first() {
        None => Vec::new(),
        Some(first) if first.is_structural() => nodes,
        Some(_) => vec![DocNode::Paragraph(nodes)],
    }
}

fn span_to_node(span: Span) -> Option<DocNode> {
    match span {
        Span::List(run) => Some(DocNode::List(List {
            kind: run.kind,
            items: run
                .items
                .iter()
                .map(|text| ListItem {
                    content: parse_inlines(text),
                })
                .collect(),
        })),
        Span::Line(Line::Heading(title)) => Some(DocNode::Heading(parse_inlines(&title))),
        Span::Line(Line::Text(text)) => Some(DocNode::Line(parse_inlines(&text))),
        // Both grouping passes have run; a stray item renders as text.
        Span::Line(Line::Item { text, .. }) => Some(DocNode::Line(parse_inlines(&text))),
        Span::Line(Line::Blank) => None,
    }
}

/// Final cleanup: drop paragraphs left without content.
pub fn drop_empty_paragraphs(nodes: Vec<DocNode>) -> Vec<DocNode> {
    nodes
        .into_iter()
        .filter(|node| !matches!(node, DocNode::Paragraph(children) if children.is_empty()))
        .collect()
}
