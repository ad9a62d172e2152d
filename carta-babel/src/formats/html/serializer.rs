//! HTML serialization (display tree → HTML)
//!
//! Pipeline: compiled document → display tree → RcDom → HTML string.
//! Text nodes are escaped by the html5ever serializer, so markup that the
//! dialect does not recognise reaches the page as literal text.

use crate::compile::CompiledDocument;
use crate::error::CartaError;
use crate::ir::nodes::{DocNode, Document, InlineContent, ListItem, ListKind};
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

pub const DEFAULT_TITLE: &str = "Descrição do Serviço";

/// Options for HTML serialization
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Wrap the fragment in a complete HTML5 page with the embedded stylesheet
    pub standalone: bool,
    /// Page title, only used for standalone output
    pub title: String,
    /// Optional custom CSS appended after the baseline stylesheet
    pub custom_css: Option<String>,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            standalone: false,
            title: DEFAULT_TITLE.to_string(),
            custom_css: None,
        }
    }
}

impl HtmlOptions {
    pub fn standalone(title: impl Into<String>) -> Self {
        Self {
            standalone: true,
            title: title.into(),
            custom_css: None,
        }
    }

    pub fn with_custom_css(mut self, css: String) -> Self {
        self.custom_css = Some(css);
        self
    }
}

/// Serialize a compiled document to HTML with full options
pub fn serialize_to_html(
    doc: &CompiledDocument,
    options: &HtmlOptions,
) -> Result<String, CartaError> {
    let tree = crate::markup::render_tree(doc);
    let fragment = serialize_fragment(&tree)?;

    if options.standalone {
        Ok(wrap_in_document(&fragment, options))
    } else {
        Ok(fragment)
    }
}

/// Serialize a display tree to an HTML fragment (no surrounding page).
pub fn serialize_fragment(tree: &Document) -> Result<String, CartaError> {
    let dom = build_html_dom(tree);
    serialize_dom(&dom)
}

/// Build an HTML DOM tree from the display tree
fn build_html_dom(tree: &Document) -> RcDom {
    let dom = RcDom::default();

    let container = create_element("div", vec![]);
    append_separated(&container, &tree.children, add_block_to_node);

    dom.document.children.borrow_mut().push(container);
    dom
}

/// Append every item under `parent` with a line break between siblings.
fn append_separated<T, F>(parent: &Handle, items: &[T], add: F)
where
    F: Fn(&Handle, &T),
{
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            parent.children.borrow_mut().push(create_text("\n"));
        }
        add(parent, item);
    }
}

fn add_block_to_node(parent: &Handle, node: &DocNode) {
    match node {
        DocNode::Heading(content) => {
            let heading = create_element("h2", vec![]);
            add_inlines_to_node(&heading, content);
            parent.children.borrow_mut().push(heading);
        }

        DocNode::Paragraph(children) => {
            let para = create_element("p", vec![]);
            append_separated(&para, children, add_block_to_node);
            parent.children.borrow_mut().push(para);
        }

        DocNode::List(list) => {
            let tag = match list.kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            let container = create_element(tag, vec![]);
            append_separated(&container, &list.items, |parent: &Handle, item: &ListItem| {
                let li = create_element("li", vec![]);
                add_inlines_to_node(&li, &item.content);
                parent.children.borrow_mut().push(li);
            });
            parent.children.borrow_mut().push(container);
        }

        DocNode::Line(content) => add_inlines_to_node(parent, content),
    }
}

fn add_inlines_to_node(parent: &Handle, content: &[InlineContent]) {
    for inline in content {
        match inline {
            InlineContent::Text(text) => {
                parent.children.borrow_mut().push(create_text(text));
            }
            InlineContent::Bold(text) => {
                let strong = create_element("strong", vec![]);
                strong.children.borrow_mut().push(create_text(text));
                parent.children.borrow_mut().push(strong);
            }
        }
    }
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string (just the inner content)
fn serialize_dom(dom: &RcDom) -> Result<String, CartaError> {
    let mut output = Vec::new();

    let container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| CartaError::NotSupported("Empty document".to_string()))?
        .clone();

    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };

    let serializable = SerializableHandle::from(container);
    serialize(&mut output, &serializable, opts).map_err(|e| {
        CartaError::NotSupported(format!("HTML serialization failed: {e}"))
    })?;

    String::from_utf8(output)
        .map_err(|e| CartaError::NotSupported(format!("UTF-8 conversion failed: {e}")))
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(body_html: &str, options: &HtmlOptions) -> String {
    let baseline_css = include_str!("../../../css/baseline.css");
    let custom_css = options.custom_css.as_deref().unwrap_or("");
    let escaped_title = html_escape(&options.title);

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="carta-babel">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{custom_css}
  </style>
</head>
<body>
<main class="carta-document">
{body_html}
</main>
</body>
</html>"#
    )
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
