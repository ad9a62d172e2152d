//! Display tree produced by the markup renderer.
//!
//! The tree is purely derived from a compiled document and is never mutated
//! on its own. Serializers (HTML today) walk it to produce output strings.

pub mod nodes;
