//! Line classification stages.
//!
//! The document is split on `\n` into [`Line`]s, then three stages each claim
//! the plain text lines that match their prefix: headings first, bullet items
//! second, numbered items last. A line claimed by an earlier stage is never
//! looked at again, so `- 1. x` is a bullet item whose text is `1. x`.

/// A source line after classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// An empty line; blocks are separated by these
    Blank,
    Text(String),
    Heading(String),
    Item { marker: Marker, text: String },
}

/// The prefix a list item was written with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// `- item`
    Bullet,
    /// `12. item`
    Numbered,
}

/// Split the source into lines. Only truly empty lines are blank; a line of
/// spaces stays text.
pub fn split_lines(source: &str) -> Vec<Line> {
    if source.is_empty() {
        return Vec::new();
    }
    source
        .split('\n')
        .map(|line| {
            if line.is_empty() {
                Line::Blank
            } else {
                Line::Text(line.to_string())
            }
        })
        .collect()
}

/// `## Title` → heading.
pub fn mark_headings(lines: Vec<Line>) -> Vec<Line> {
    claim_text_lines(lines, |text| {
        let rest = text.strip_prefix("##")?;
        after_separator(rest).map(|title| Line::Heading(title.to_string()))
    })
}

/// `- item` → bullet item.
pub fn mark_bullet_items(lines: Vec<Line>) -> Vec<Line> {
    claim_text_lines(lines, |text| {
        let rest = text.strip_prefix('-')?;
        after_separator(rest).map(|item| Line::Item {
            marker: Marker::Bullet,
            text: item.to_string(),
        })
    })
}

/// `<digits>. item` → numbered item.
pub fn mark_numbered_items(lines: Vec<Line>) -> Vec<Line> {
    claim_text_lines(lines, |text| {
        let rest = strip_ordinal(text)?;
        after_separator(rest).map(|item| Line::Item {
            marker: Marker::Numbered,
            text: item.to_string(),
        })
    })
}

fn claim_text_lines<F>(lines: Vec<Line>, classify: F) -> Vec<Line>
where
    F: Fn(&str) -> Option<Line>,
{
    lines
        .into_iter()
        .map(|line| match line {
            Line::Text(text) => classify(&text).unwrap_or(Line::Text(text)),
            other => other,
        })
        .collect()
}

/// The text after a marker: at least one whitespace character, then the
/// non-blank remainder of the line.
fn after_separator(rest: &str) -> Option<&str> {
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let content = rest.trim_start();
    (!content.is_empty()).then_some(content)
}

fn strip_ordinal(text: &str) -> Option<&str> {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    text[digits..].strip_prefix('.')
}
