//! Error types for session, upstream and format operations
//!
//! The compiler, renderer and reducer are total functions and never produce
//! these. Every variant here is a caller-level condition meant to be shown to
//! the user as a recoverable message.

use std::fmt;

/// Errors surfaced to the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum CartaError {
    /// Nothing has been compiled yet (or the last attempt failed)
    InputAbsent(String),
    /// The text submitted for processing was rejected before any upstream call
    InvalidInput(String),
    /// The text-generation service reported a failure or sent an undecodable reply
    UpstreamFailure(String),
    /// Format not found in registry
    FormatNotFound(String),
    /// Format does not support the requested direction
    NotSupported(String),
}

impl fmt::Display for CartaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CartaError::InputAbsent(msg) => write!(f, "{msg}"),
            CartaError::InvalidInput(msg) => write!(f, "{msg}"),
            CartaError::UpstreamFailure(msg) => write!(f, "{msg}"),
            CartaError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            CartaError::NotSupported(msg) => write!(f, "Operation not supported: {msg}"),
        }
    }
}

impl std::error::Error for CartaError {}
