//! Markup rendering
//!
//! The dialect knows four constructs: `## ` headings, `**bold**` spans, `- `
//! bullet items and `N. ` numbered items. Everything else is paragraph text.
//!
//! Rendering is an ordered pipeline of pure stages, each tested on its own:
//!
//! 1. [`lines::split_lines`]          source → classified lines
//! 2. [`lines::mark_headings`]        `## ` lines → headings
//! 3. [`lines::mark_bullet_items`]    `- ` lines → bullet items
//! 4. [`lines::mark_numbered_items`]  `N. ` lines → numbered items
//! 5. [`blocks::split_blocks`]        blank lines → blocks, each [`blocks::trim_block`]ed
//! 6. [`blocks::group_unordered`]     bullet runs → claimed unordered lists
//! 7. [`blocks::group_ordered`]       remaining item runs → ordered lists
//! 8. [`blocks::wrap_block`]          non-structural blocks → paragraphs;
//!    bold spans are parsed here by [`inline::parse_inlines`]
//! 9. [`blocks::drop_empty_paragraphs`]
//!
//! Headings, bold spans and list items target disjoint syntax, so the order
//! of stages 2 and 8 relative to each other does not matter. The order of 3
//! and 4 does: bullets claim their lines first.
//!
//! Malformed markup never fails; it is rendered as literal text.

pub mod blocks;
pub mod inline;
pub mod lines;

use crate::compile::CompiledDocument;
use crate::formats::html::serializer;
use crate::ir::nodes::Document;

/// Run the stage pipeline and return the display tree.
pub fn render_tree(doc: &CompiledDocument) -> Document {
    render_source(doc.as_str())
}

/// Same as [`render_tree`] for raw markup text.
pub fn render_source(source: &str) -> Document {
    let lines = lines::split_lines(source);
    let lines = lines::mark_headings(lines);
    let lines = lines::mark_bullet_items(lines);
    let lines = lines::mark_numbered_items(lines);

    let children = blocks::split_blocks(lines)
        .into_iter()
        .map(blocks::trim_block)
        .map(blocks::group_unordered)
        .map(blocks::group_ordered)
        .flat_map(blocks::wrap_block)
        .collect();

    Document {
        children: blocks::drop_empty_paragraphs(children),
    }
}

/// Render a compiled document to an HTML fragment.
///
/// Blocks are separated by a line break; an empty document renders to the
/// empty string.
pub fn render(doc: &CompiledDocument) -> String {
    let tree = render_tree(doc);
    match serializer::serialize_fragment(&tree) {
        Ok(html) => html,
        Err(err) => {
            tracing::error!(%err, "failed to serialize rendered tree");
            String::new()
        }
    }
}
