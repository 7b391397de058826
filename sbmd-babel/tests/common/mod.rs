//! Shared helpers for the conversion tests.

use std::path::PathBuf;

/// Read a file from `tests/fixtures`.
pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"))
}

/// Fixture contents without the final newline, matching converter output.
pub fn expected(name: &str) -> String {
    fixture(name).trim_end_matches('\n').to_string()
}
