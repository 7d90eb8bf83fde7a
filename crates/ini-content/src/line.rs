//! Line classification and parsing

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::text::LineEnding;

/// What a line is, decided from its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LineKind {
    Section,
    Key,
    Comment,
    Blank,
}

impl LineKind {
    /// Classify a raw line without validating it.
    ///
    /// Only a non-empty line that starts with neither `[` nor the comment
    /// character is a key candidate; an empty line is always blank.
    pub fn classify(raw: &str, dialect: &Dialect) -> Self {
        match raw.chars().next() {
            None => Self::Blank,
            Some('[') => Self::Section,
            Some(c) if c == dialect.comment() => Self::Comment,
            Some(_) => Self::Key,
        }
    }
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Section => "section",
            Self::Key => "key",
            Self::Comment => "comment",
            Self::Blank => "blank",
        };
        f.write_str(name)
    }
}

/// One line of a document.
///
/// Malformed lines can be constructed (so callers can see why a line was
/// refused) but a [`LineStore`](crate::LineStore) never admits them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    kind: LineKind,
    raw: String,
    section: Option<String>,
    key: Option<String>,
    value: Option<String>,
    well_formed: bool,
    ending: Option<LineEnding>,
}

impl Line {
    /// Blank lines are stored in this canonical form and carry their own
    /// separator when serialized.
    pub const BLANK_RAW: &'static str = "\n";

    /// Parse `raw` with `scope` as the section currently in effect.
    pub fn parse(raw: &str, scope: Option<&str>, dialect: &Dialect) -> Self {
        match LineKind::classify(raw, dialect) {
            LineKind::Section => Self::parse_section(raw),
            LineKind::Comment => Self::plain(LineKind::Comment, raw.to_string()),
            LineKind::Blank => Self::plain(LineKind::Blank, Self::BLANK_RAW.to_string()),
            LineKind::Key => Self::parse_key(raw, scope, dialect.delimiter()),
        }
    }

    /// Build the `[name]` line for a new section.
    ///
    /// Fails if the text would not read back as a section of that name.
    pub fn new_section(name: &str, dialect: &Dialect) -> Result<Self> {
        reject_line_breaks("section name", name)?;
        let line = Self::parse(&format!("[{name}]"), None, dialect);
        if line.kind != LineKind::Section || line.section.as_deref() != Some(name) {
            return Err(Error::unrepresentable(
                "section name",
                name,
                "it does not read back as the same section",
            ));
        }
        Ok(line)
    }

    /// Build the `key<delimiter>value` line for a new property of `section`.
    ///
    /// Fails if the text would not read back as the same key, which rules
    /// out keys containing the delimiter or starting with `[` or the comment
    /// character.
    pub fn new_property(section: &str, key: &str, value: &str, dialect: &Dialect) -> Result<Self> {
        reject_line_breaks("key", key)?;
        reject_line_breaks("value", value)?;
        let raw = format!("{key}{}{value}", dialect.delimiter());
        let line = Self::parse(&raw, Some(section), dialect);
        if line.kind != LineKind::Key || line.key.as_deref() != Some(key) {
            return Err(Error::unrepresentable(
                "key",
                key,
                "it does not read back as the same key",
            ));
        }
        Ok(line)
    }

    fn plain(kind: LineKind, raw: String) -> Self {
        Self {
            kind,
            raw,
            section: None,
            key: None,
            value: None,
            well_formed: true,
            ending: None,
        }
    }

    fn parse_section(raw: &str) -> Self {
        let name = raw
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'));
        Self {
            kind: LineKind::Section,
            raw: raw.to_string(),
            section: name.map(str::to_string),
            key: None,
            value: None,
            well_formed: name.is_some(),
            ending: None,
        }
    }

    fn parse_key(raw: &str, scope: Option<&str>, delimiter: char) -> Self {
        let split = raw.split_once(delimiter);
        Self {
            kind: LineKind::Key,
            raw: raw.to_string(),
            section: scope.map(str::to_string),
            key: split.map(|(key, _)| key.to_string()),
            value: split.map(|(_, value)| value.to_string()),
            well_formed: split.is_some(),
            ending: None,
        }
    }

    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// The text written back on serialization.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Own name for a section line, owning section for a key line.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn is_well_formed(&self) -> bool {
        self.well_formed
    }

    /// Terminator this line was read with; `None` for new lines and for an
    /// unterminated last line, which take the store's line ending.
    pub fn ending(&self) -> Option<LineEnding> {
        self.ending
    }

    pub(crate) fn with_ending(mut self, ending: Option<LineEnding>) -> Self {
        self.ending = ending;
        self
    }

    pub(crate) fn is_section_named(&self, name: &str) -> bool {
        self.kind == LineKind::Section && self.section.as_deref() == Some(name)
    }

    pub(crate) fn is_key_named(&self, key: &str) -> bool {
        self.kind == LineKind::Key && self.key.as_deref() == Some(key)
    }

    /// Replace a key line's value and regenerate its raw text.
    pub(crate) fn set_value(&mut self, value: &str, dialect: &Dialect) -> Result<()> {
        reject_line_breaks("value", value)?;
        let key = self.key.as_deref().unwrap_or_default();
        self.raw = format!("{key}{}{value}", dialect.delimiter());
        self.value = Some(value.to_string());
        Ok(())
    }
}

fn reject_line_breaks(what: &'static str, text: &str) -> Result<()> {
    if text.contains(['\n', '\r']) {
        return Err(Error::unrepresentable(what, text, "it contains a line break"));
    }
    Ok(())
}
