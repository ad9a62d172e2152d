//! Service description compile and render pipeline
//!
//!     A text-generation service turns a free-form description of a public
//!     service into a fixed set of named fields. This crate assembles those
//!     fields into one markup document and derives everything the user sees
//!     or downloads from it.
//!
//!     This is a pure lib: it powers carta-cli but supposes no shell, that is
//!     no printing, no env vars and no file I/O.
//!
//! Architecture
//!
//!     upstream reply ──parse_response──▶ ResultFields ──compile──▶ CompiledDocument
//!                                                                     │
//!                                       ┌─────────────render──────────┤
//!                                       ▼                             ▼
//!                                   HTML fragment              reduce ─▶ plain text
//!
//!     The compiled document is the single source of truth: HTML, the `.md`
//!     download, the `.txt` download and clipboard copies are all derived from
//!     it, never from each other. The latest successful result lives in a
//!     [`Session`].
//!
//!     The file structure :
//!     .
//!     ├── sections.rs     # the fixed section catalogue
//!     ├── compile.rs      # fields → markup
//!     ├── markup          # markup → display tree (staged pipeline)
//!     ├── ir              # display tree
//!     ├── reduce.rs       # markup → plain text
//!     ├── upstream.rs     # service reply decoding
//!     ├── session.rs      # latest result
//!     ├── export.rs       # download and clipboard artifacts
//!     ├── format.rs       # Format trait
//!     ├── registry.rs     # FormatRegistry
//!     └── formats         # json, markdown, html, text
//!
//! Failure model
//!
//!     Compilation, rendering and reduction are total: bad input degrades to
//!     omitted sections or literal text. Only caller-level conditions (empty
//!     session, blank input, failed upstream reply, unknown format) produce a
//!     [`CartaError`].
//!
pub mod compile;
pub mod error;
pub mod export;
pub mod format;
pub mod formats;
pub mod ir;
pub mod markup;
pub mod reduce;
pub mod registry;
pub mod sections;
pub mod session;
pub mod upstream;

pub use compile::{compile, compile_value, CompiledDocument, ResultFields};
pub use error::CartaError;
pub use export::{copy_text, export_markdown, export_text, Artifact};
pub use format::Format;
pub use markup::render;
pub use reduce::reduce;
pub use registry::FormatRegistry;
pub use sections::{FieldKey, SectionSpec, SECTIONS};
pub use session::Session;
pub use upstream::{parse_response, UpstreamResponse};
