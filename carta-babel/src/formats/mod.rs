//! Format implementations
//!
//! One input format (`json`, the service reply) and three outputs
//! (`markdown`, `html`, `text`). All of them go through the compiled
//! document.

pub mod html;
pub mod json;
pub mod markdown;
pub mod text;

pub use html::{HtmlFormat, HtmlOptions};
pub use json::JsonFormat;
pub use markdown::MarkdownFormat;
pub use text::TextFormat;
