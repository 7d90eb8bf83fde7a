//! A line store bound to the stream it was read from

use std::path::PathBuf;

use ini_fs::{DocumentStream, FileStream};

use crate::dialect::Dialect;
use crate::error::Result;
use crate::store::LineStore;

/// An editable document backed by a [`DocumentStream`].
///
/// Edits happen in memory and reach the stream on [`apply_changes`], or
/// immediately after every successful edit when always-apply is enabled.
///
/// A `Document` is single-owner: nothing here locks, and the store must not
/// be read while another call is mutating it.
///
/// [`apply_changes`]: Document::apply_changes
#[derive(Debug)]
pub struct Document {
    stream: Box<dyn DocumentStream>,
    store: LineStore,
    /// Text last read from or written to the stream.
    synced: String,
    always_apply: bool,
    parsed: bool,
}

impl Document {
    /// Open the document at `path` with the default dialect.
    ///
    /// See [`Document::with_stream`] for how parse failures are handled.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::with_stream(FileStream::new(path), Dialect::default())
    }

    /// Bind a document to `stream` and parse it immediately.
    ///
    /// A failed parse still returns a document; it is empty and
    /// [`is_parsed`](Document::is_parsed) reports `false`.
    pub fn with_stream(stream: impl DocumentStream + 'static, dialect: Dialect) -> Self {
        let mut document = Self {
            stream: Box::new(stream),
            store: LineStore::new(dialect),
            synced: String::new(),
            always_apply: false,
            parsed: false,
        };
        if let Err(e) = document.reparse() {
            tracing::warn!(
                document = %document.stream.identity(),
                error = %e,
                "Document could not be parsed"
            );
        }
        document
    }

    /// Re-read and re-parse the whole document.
    ///
    /// The new contents replace the current store only if every line parses;
    /// on failure the previous store is kept and the document is marked as
    /// unparsed.
    pub fn reparse(&mut self) -> Result<()> {
        let outcome = self.stream.read_text().map_err(Into::into).and_then(|text| {
            LineStore::parse(&text, *self.store.dialect()).map(|store| (text, store))
        });
        match outcome {
            Ok((text, store)) => {
                self.store = store;
                self.synced = text;
                self.parsed = true;
                tracing::debug!(document = %self.stream.identity(), "Reparsed document");
                Ok(())
            }
            Err(e) => {
                self.parsed = false;
                Err(e)
            }
        }
    }

    /// Write the serialized store to the stream.
    pub fn apply_changes(&mut self) -> Result<()> {
        let text = self.store.serialize();
        self.stream.write_text(&text)?;
        self.synced = text;
        tracing::debug!(document = %self.stream.identity(), "Applied changes");
        Ok(())
    }

    /// Write after every successful edit when `value` is true.
    pub fn set_always_apply(&mut self, value: bool) {
        self.always_apply = value;
    }

    pub fn always_apply(&self) -> bool {
        self.always_apply
    }

    /// Whether the most recent reparse succeeded.
    pub fn is_parsed(&self) -> bool {
        self.parsed
    }

    /// Whether the store no longer matches what the stream last held.
    pub fn is_modified(&self) -> bool {
        self.store.serialize() != self.synced
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.store.value(section, key)
    }

    pub fn contains_section(&self, name: &str) -> bool {
        self.store.contains_section(name)
    }

    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.store.contains_key(section, key)
    }

    pub fn create_section(&mut self, name: &str) -> Result<()> {
        self.store.create_section(name)?;
        self.commit()
    }

    pub fn delete_section(&mut self, name: &str) -> Result<()> {
        self.store.delete_section(name)?;
        self.commit()
    }

    /// Add a property; pass `""` for a key without a value.
    pub fn add_property(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.store.add_property(section, key, value)?;
        self.commit()
    }

    pub fn change_property(&mut self, section: &str, key: &str, value: &str) -> Result<()> {
        self.store.change_property(section, key, value)?;
        self.commit()
    }

    pub fn delete_property(&mut self, section: &str, key: &str) -> Result<()> {
        self.store.delete_property(section, key)?;
        self.commit()
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }

    pub fn dialect(&self) -> &Dialect {
        self.store.dialect()
    }

    pub fn identity(&self) -> String {
        self.stream.identity()
    }

    /// The document as it would be written.
    pub fn render(&self) -> String {
        self.store.serialize()
    }

    fn commit(&mut self) -> Result<()> {
        if self.always_apply {
            self.apply_changes()
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ini_fs::MemoryStream;

    #[test]
    fn test_unparsed_document_is_still_usable() {
        let stream = MemoryStream::with_content("bad", "key outside section=1");
        let mut doc = Document::with_stream(stream, Dialect::default());

        assert!(!doc.is_parsed());
        assert!(doc.store().is_empty());

        doc.create_section("fresh").unwrap();
        assert_eq!(doc.render(), "[fresh]");
    }

    #[test]
    fn test_is_modified_tracks_sync_point() {
        let stream = MemoryStream::with_content("doc", "[a]\nk=1\n");
        let mut doc = Document::with_stream(stream, Dialect::default());
        assert!(!doc.is_modified());

        doc.change_property("a", "k", "2").unwrap();
        assert!(doc.is_modified());

        doc.apply_changes().unwrap();
        assert!(!doc.is_modified());
    }
}
