//! Sample documents checked in under `test-fixtures/documents`.

use std::fs;
use std::path::PathBuf;

/// Every fixture that parses cleanly with the default dialect.
pub const VALID: &[&str] = &[
    "app.ini",
    "comments.ini",
    "crlf.ini",
    "no-final-newline.ini",
    "tricky-values.ini",
];

/// Fixtures that must fail to parse.
pub const INVALID: &[&str] = &[
    "unclosed-section.ini",
    "key-before-section.ini",
    "missing-delimiter.ini",
    "duplicate-section.ini",
];

/// Absolute path of a fixture.
pub fn path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/documents")
        .join(name)
}

/// Raw contents of a fixture.
///
/// # Panics
/// Panics if the fixture does not exist.
pub fn read(name: &str) -> String {
    let path = path(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Missing fixture {}: {e}", path.display()))
}
