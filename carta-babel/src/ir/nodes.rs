//! Core data structures of the rendered display tree.

/// Root of a rendered document. Children are laid out in source order and
/// separated by a single line break when serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub children: Vec<DocNode>,
}

impl Document {
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// A block-level element of the display tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DocNode {
    /// Level-2 heading
    Heading(Vec<InlineContent>),
    /// Paragraph wrapping every element of one blank-line separated block
    Paragraph(Vec<DocNode>),
    List(List),
    /// A bare line of text inside a block
    Line(Vec<InlineContent>),
}

impl DocNode {
    /// Headings and list containers; blocks starting with one are not wrapped
    /// in a paragraph.
    pub fn is_structural(&self) -> bool {
        matches!(self, DocNode::Heading(_) | DocNode::List(_))
    }
}

/// Which grouping pass produced a list container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

/// A list container and its items.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    pub kind: ListKind,
    pub items: Vec<ListItem>,
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub content: Vec<InlineContent>,
}

/// Inline content: plain text or a bold span.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineContent {
    Text(String),
    Bold(String),
}
