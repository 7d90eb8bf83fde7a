//! Error types for ini-content

use crate::line::LineKind;

/// Result type for ini-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing or editing a document
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Malformed {kind} line: {raw:?}")]
    MalformedLine { kind: LineKind, raw: String },

    #[error("Key line {raw:?} appears before any section")]
    KeyOutsideSection { raw: String },

    #[error("Section name must not be empty")]
    EmptySectionName,

    #[error("Section already exists: [{name}]")]
    DuplicateSection { name: String },

    #[error("Key {key:?} already exists in section [{section}]")]
    DuplicateKey { section: String, key: String },

    #[error("Section not found: [{name}]")]
    SectionNotFound { name: String },

    #[error("Key {key:?} not found in section [{section}]")]
    KeyNotFound { section: String, key: String },

    #[error("Cannot write {what} {text:?} as a single line: {reason}")]
    Unrepresentable {
        what: &'static str,
        text: String,
        reason: &'static str,
    },

    #[error("Invalid dialect: {message}")]
    InvalidDialect { message: String },

    #[error("line {line}: {source}")]
    Syntax {
        line: usize,
        #[source]
        source: Box<Error>,
    },

    #[error(transparent)]
    Fs(#[from] ini_fs::Error),
}

impl Error {
    pub(crate) fn at_line(line: usize, source: Error) -> Self {
        Self::Syntax {
            line,
            source: Box::new(source),
        }
    }

    pub(crate) fn unrepresentable(
        what: &'static str,
        text: impl Into<String>,
        reason: &'static str,
    ) -> Self {
        Self::Unrepresentable {
            what,
            text: text.into(),
            reason,
        }
    }
}
