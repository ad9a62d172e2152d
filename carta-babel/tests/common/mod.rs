//! Shared helpers for the integration tests.

use carta_babel::{FieldKey, ResultFields};
use std::fs;
use std::path::PathBuf;

/// Read a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()))
}

/// Build fields from `(key, value)` pairs.
pub fn fields(pairs: &[(FieldKey, &str)]) -> ResultFields {
    pairs
        .iter()
        .fold(ResultFields::new(), |acc, (key, value)| acc.with(*key, *value))
}
