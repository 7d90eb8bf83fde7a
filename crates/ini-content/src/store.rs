//! Ordered line storage with section and key operations
//!
//! The store is a flat `Vec<Line>` in document order. A section owns its
//! *span*: its own `[name]` line and every line after it up to the next
//! section line or the end of the store. All lookups are linear scans over
//! that order, which is what keeps keys grouped under their sections:
//!
//! - new sections are appended after everything else;
//! - new keys go to the end of their section's span, after any trailing
//!   comments or blank lines already in it;
//! - deleting a section removes its whole span.

use std::fmt;

use crate::dialect::Dialect;
use crate::error::{Error, Result};
use crate::line::{Line, LineKind};
use crate::text::{LineEnding, SourceText};

/// The lines of one document and the operations that edit them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStore {
    lines: Vec<Line>,
    dialect: Dialect,
    line_ending: LineEnding,
    final_newline: bool,
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new(Dialect::default())
    }
}

impl LineStore {
    /// An empty store that writes `\n` line endings.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            lines: Vec::new(),
            dialect,
            line_ending: LineEnding::default(),
            final_newline: false,
        }
    }

    /// Build a store from a whole document.
    ///
    /// Every line must be admitted: a malformed section or key line, a key
    /// before the first section, an empty or repeated section name, or a
    /// repeated key fails the parse with the 1-based line number in
    /// [`Error::Syntax`].
    pub fn parse(source: &str, dialect: Dialect) -> Result<Self> {
        let text = SourceText::split(source);
        let mut store = Self {
            lines: Vec::with_capacity(text.lines.len()),
            dialect,
            line_ending: text.line_ending,
            final_newline: text.final_newline,
        };

        let mut scope: Option<String> = None;
        for (index, source_line) in text.lines.into_iter().enumerate() {
            let line = Line::parse(source_line.text, scope.as_deref(), &store.dialect)
                .with_ending(source_line.ending);
            if line.kind() == LineKind::Section && line.is_well_formed() {
                scope = line.section().map(str::to_string);
            }
            store
                .add_raw_line(line)
                .map_err(|e| Error::at_line(index + 1, e))?;
        }

        tracing::debug!(
            lines = store.lines.len(),
            sections = store.sections().count(),
            line_ending = ?store.line_ending,
            "Parsed document"
        );
        Ok(store)
    }

    pub fn dialect(&self) -> &Dialect {
        &self.dialect
    }

    /// Ending written after lines that were not read from the source.
    pub fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Section names in document order.
    ///
    /// ```
    /// use ini_content::{Dialect, LineStore};
    ///
    /// let store = LineStore::parse("[b]\n[a]\nk=v", Dialect::default()).unwrap();
    /// assert_eq!(store.sections().collect::<Vec<_>>(), vec!["b", "a"]);
    /// ```
    pub fn sections(&self) -> impl Iterator<Item = &str> + '_ {
        self.lines
            .iter()
            .filter(|line| line.kind() == LineKind::Section)
            .filter_map(Line::section)
    }

    /// `(key, value)` pairs of a section in document order, `None` if the
    /// section does not exist.
    ///
    /// ```
    /// use ini_content::{Dialect, LineStore};
    ///
    /// let store = LineStore::parse("[net]\nhost=a\n# note\nport=80\n", Dialect::default()).unwrap();
    /// let pairs: Vec<_> = store.properties("net").unwrap().collect();
    /// assert_eq!(pairs, vec![("host", "a"), ("port", "80")]);
    /// assert!(store.properties("missing").is_none());
    /// ```
    pub fn properties(&self, section: &str) -> Option<impl Iterator<Item = (&str, &str)> + '_> {
        let start = self.section_index(section)?;
        let end = self.span_end(start);
        Some(
            self.lines[start + 1..end]
                .iter()
                .filter_map(|line| Some((line.key()?, line.value()?))),
        )
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.section_index(name).is_some()
    }

    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.key_index(section, key).is_some()
    }

    /// Current value of `key` in `section`, `None` if either is missing.
    ///
    /// An empty value (`key=`) is `Some("")`.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        let index = self.key_index(section, key)?;
        self.lines[index].value()
    }

    /// Append a new, empty section after all existing content.
    pub fn create_section(&mut self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::EmptySectionName);
        }
        if self.contains_section(name) {
            return Err(Error::DuplicateSection {
                name: name.to_string(),
            });
        }
        let line = Line::new_section(name, &self.dialect)?;
        self.add_raw_line(line)?;
        tracing::debug!(section = name, "Created section");
        Ok(())
    }

    /// Remove a section together with everything in its span.
    pub fn delete_section(&mut self, name: &str) -> Result<()> {
        let start = self
            .section_index(name)
            .ok_or_else(|| Error::SectionNotFound {
                name: name.to_string(),
            })?;
        let end = self.span_end(start);
        self.lines.drain(start..end);
        tracing::debug!(section = name, removed = end - start, "Deleted section");
        Ok(())
    }

    /// Add `key<delimiter>value` at the end of `section`'s span.
    pub fn add_property(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.require_section(section)?;
        let line = Line::new_property(section, key, value, &self.dialect)?;
        self.add_raw_line(line)?;
        tracing::debug!(section, key, "Added property");
        Ok(())
    }

    /// Add a property from its raw `key<delimiter>value` text.
    pub fn add_property_line(&mut self, section: &str, raw: &str) -> Result<()> {
        self.require_section(section)?;
        if raw.contains(['\n', '\r']) {
            return Err(Error::unrepresentable("property line", raw, "it contains a line break"));
        }
        let line = Line::parse(raw, Some(section), &self.dialect);
        if line.kind() != LineKind::Key {
            return Err(Error::MalformedLine {
                kind: LineKind::Key,
                raw: raw.to_string(),
            });
        }
        self.add_raw_line(line)
    }

    /// Replace the value of an existing key, keeping its position.
    pub fn change_property(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        let index = self.locate_key(section, key)?;
        let dialect = self.dialect;
        self.lines[index].set_value(value, &dialect)?;
        tracing::debug!(section, key, "Changed property");
        Ok(())
    }

    /// Remove exactly one key line.
    pub fn delete_property(&mut self, section: &str, key: &str) -> Result<()> {
        let index = self.locate_key(section, key)?;
        self.lines.remove(index);
        tracing::debug!(section, key, "Deleted property");
        Ok(())
    }

    /// Admit one parsed line.
    ///
    /// Key lines land at the end of their section's span; everything else is
    /// appended to the store. The line must be well-formed, and section and
    /// key names must stay unique.
    pub fn add_raw_line(&mut self, line: Line) -> Result<()> {
        if !line.is_well_formed() {
            return Err(Error::MalformedLine {
                kind: line.kind(),
                raw: line.raw().to_string(),
            });
        }

        match line.kind() {
            LineKind::Section => {
                let name = line.section().unwrap_or_default();
                if name.is_empty() {
                    return Err(Error::EmptySectionName);
                }
                if self.contains_section(name) {
                    return Err(Error::DuplicateSection {
                        name: name.to_string(),
                    });
                }
                self.lines.push(line);
            }
            LineKind::Key => {
                let at = self.key_insertion_point(&line)?;
                self.lines.insert(at, line);
            }
            LineKind::Comment | LineKind::Blank => self.lines.push(line),
        }
        Ok(())
    }

    /// Drop every line. The line ending and final-newline style are kept.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Render the document.
    ///
    /// Every line is followed by the terminator it was read with, or the
    /// store's line ending if it is new. The last line gets one only if the
    /// source ended with a terminator; blank lines always carry theirs.
    pub fn serialize(&self) -> String {
        let last = self.lines.len().saturating_sub(1);
        let mut out = String::with_capacity(self.lines.iter().map(|l| l.raw().len() + 2).sum());

        for (index, line) in self.lines.iter().enumerate() {
            let ending = line.ending().unwrap_or(self.line_ending).as_str();
            if line.kind() != LineKind::Blank {
                out.push_str(line.raw());
                if index == last && !self.final_newline {
                    continue;
                }
            }
            out.push_str(ending);
        }
        out
    }

    fn section_index(&self, name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.is_section_named(name))
    }

    /// One past the last line of the span starting at `start`.
    fn span_end(&self, start: usize) -> usize {
        self.lines[start + 1..]
            .iter()
            .position(|line| line.kind() == LineKind::Section)
            .map_or(self.lines.len(), |offset| start + 1 + offset)
    }

    fn key_index(&self, section: &str, key: &str) -> Option<usize> {
        let start = self.section_index(section)?;
        let end = self.span_end(start);
        (start + 1..end).find(|&index| self.lines[index].is_key_named(key))
    }

    fn require_section(&self, section: &str) -> Result<()> {
        if self.contains_section(section) {
            Ok(())
        } else {
            Err(Error::SectionNotFound {
                name: section.to_string(),
            })
        }
    }

    fn locate_key(&self, section: &str, key: &str) -> Result<usize> {
        self.require_section(section)?;
        self.key_index(section, key).ok_or_else(|| Error::KeyNotFound {
            section: section.to_string(),
            key: key.to_string(),
        })
    }

    fn key_insertion_point(&self, line: &Line) -> Result<usize> {
        let Some(section) = line.section() else {
            return Err(Error::KeyOutsideSection {
                raw: line.raw().to_string(),
            });
        };
        let key = line.key().unwrap_or_default();
        let start = self
            .section_index(section)
            .ok_or_else(|| Error::SectionNotFound {
                name: section.to_string(),
            })?;
        let end = self.span_end(start);
        if self.lines[start + 1..end].iter().any(|l| l.is_key_named(key)) {
            return Err(Error::DuplicateKey {
                section: section.to_string(),
                key: key.to_string(),
            });
        }
        Ok(end)
    }
}

impl fmt::Display for LineStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}
