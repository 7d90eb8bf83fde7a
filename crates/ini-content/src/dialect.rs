//! Delimiter and comment characters

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// The two characters that shape a document's grammar.
///
/// Deserializing runs the same validation as [`Dialect::new`], and missing
/// fields fall back to the defaults (`=` and `#`):
///
/// ```
/// use ini_content::Dialect;
///
/// let dialect: Dialect = serde_json::from_str(r#"{"delimiter": ":"}"#).unwrap();
/// assert_eq!(dialect.delimiter(), ':');
/// assert_eq!(dialect.comment(), '#');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DialectConfig")]
pub struct Dialect {
    delimiter: char,
    comment: char,
}

impl Dialect {
    pub const DEFAULT_DELIMITER: char = '=';
    pub const DEFAULT_COMMENT: char = '#';

    pub fn new(delimiter: char, comment: char) -> Result<Self> {
        for (role, c) in [("delimiter", delimiter), ("comment", comment)] {
            if matches!(c, '[' | '\n' | '\r') {
                return Err(Error::InvalidDialect {
                    message: format!("{role} character {c:?} is reserved"),
                });
            }
        }
        if delimiter == comment {
            return Err(Error::InvalidDialect {
                message: format!("delimiter and comment are both {delimiter:?}"),
            });
        }
        Ok(Self { delimiter, comment })
    }

    /// Splits a key from its value.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Marks a comment line when it is the first character.
    pub fn comment(&self) -> char {
        self.comment
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER,
            comment: Self::DEFAULT_COMMENT,
        }
    }
}

/// Unvalidated serde form of [`Dialect`].
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct DialectConfig {
    delimiter: char,
    comment: char,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            delimiter: Dialect::DEFAULT_DELIMITER,
            comment: Dialect::DEFAULT_COMMENT,
        }
    }
}

impl TryFrom<DialectConfig> for Dialect {
    type Error = Error;

    fn try_from(config: DialectConfig) -> Result<Self> {
        Self::new(config.delimiter, config.comment)
    }
}
