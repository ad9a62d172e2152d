//! Bold span stage.
//!
//! `**text**` becomes [`InlineContent::Bold`]. Matching is non-greedy, needs
//! at least one character between the delimiters and never spans lines
//! because it only ever sees one line at a time. Anything unmatched stays
//! literal text.

use crate::ir::nodes::InlineContent;

const DELIMITER: &str = "**";

/// Split one line of text into plain and bold runs.
pub fn parse_inlines(line: &str) -> Vec<InlineContent> {
    let mut content = Vec::new();
    let mut rest = line;

    while let Some(open) = rest.find(DELIMITER) {
        let after_open = &rest[open + DELIMITER.len()..];
        let Some(first) = after_open.chars().next() else {
            break;
        };
        let search_from = first.len_utf8();
        let Some(relative_close) = after_open[search_from..].find(DELIMITER) else {
            break;
        };
        let close = search_from + relative_close;

        push_text(&mut content, &rest[..open]);
        content.push(InlineContent::Bold(after_open[..close].to_string()));
        rest = &after_open[close + DELIMITER.len()..];
    }

    push_text(&mut content, rest);
    content
}

fn push_text(content: &mut Vec<InlineContent>, text: &str) {
    if !text.is_empty() {
        content.push(InlineContent::Text(text.to_string()));
    }
}
