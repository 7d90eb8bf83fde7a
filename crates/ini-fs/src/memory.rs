//! In-memory document stream

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;

use crate::{DocumentStream, Error, Result};

#[derive(Debug, Default)]
struct MemoryState {
    content: Option<String>,
    writes: usize,
    fail_reads: bool,
    fail_writes: bool,
}

/// A document held in memory.
///
/// Clones share one buffer, so a caller can hand one clone to a document and
/// keep another to inspect what was written. Not `Send`: a stream belongs to
/// one thread, like the document that owns it.
#[derive(Debug, Clone, Default)]
pub struct MemoryStream {
    label: String,
    state: Rc<RefCell<MemoryState>>,
}

impl MemoryStream {
    /// A stream with nothing in it yet; reading fails until something is
    /// written, like a file that does not exist.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            state: Rc::default(),
        }
    }

    /// A stream pre-loaded with `content`.
    pub fn with_content(label: impl Into<String>, content: impl Into<String>) -> Self {
        let stream = Self::new(label);
        stream.set_content(content);
        stream
    }

    /// Current content, if any has been set or written.
    pub fn content(&self) -> Option<String> {
        self.state.borrow().content.clone()
    }

    /// Replace the content without counting it as a write.
    pub fn set_content(&self, content: impl Into<String>) {
        self.state.borrow_mut().content = Some(content.into());
    }

    /// Number of successful `write_text` calls.
    pub fn writes(&self) -> usize {
        self.state.borrow().writes
    }

    /// Make every subsequent read fail.
    pub fn fail_reads(&self, fail: bool) {
        self.state.borrow_mut().fail_reads = fail;
    }

    /// Make every subsequent write fail.
    pub fn fail_writes(&self, fail: bool) {
        self.state.borrow_mut().fail_writes = fail;
    }

    fn error(&self, kind: io::ErrorKind, message: &str) -> Error {
        Error::io(PathBuf::from(&self.label), io::Error::new(kind, message))
    }
}

impl DocumentStream for MemoryStream {
    fn identity(&self) -> String {
        self.label.clone()
    }

    fn read_text(&self) -> Result<String> {
        let state = self.state.borrow();
        if state.fail_reads {
            return Err(self.error(io::ErrorKind::PermissionDenied, "reads disabled"));
        }
        state
            .content
            .clone()
            .ok_or_else(|| self.error(io::ErrorKind::NotFound, "no content"))
    }

    fn write_text(&self, content: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.fail_writes {
            return Err(self.error(io::ErrorKind::PermissionDenied, "writes disabled"));
        }
        state.content = Some(content.to_string());
        state.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_content() {
        let stream = MemoryStream::new("shared");
        let observer = stream.clone();

        stream.write_text("[a]\nk=v").unwrap();

        assert_eq!(observer.content().as_deref(), Some("[a]\nk=v"));
        assert_eq!(observer.writes(), 1);
    }

    #[test]
    fn test_empty_stream_read_fails() {
        let stream = MemoryStream::new("empty");
        let err = stream.read_text().unwrap_err();
        assert!(matches!(err, Error::Io { ref source, .. } if source.kind() == io::ErrorKind::NotFound));
    }

    #[test]
    fn test_set_content_is_not_a_write() {
        let stream = MemoryStream::with_content("doc", "x=1");
        stream.set_content("x=2");
        assert_eq!(stream.writes(), 0);
        assert_eq!(stream.read_text().unwrap(), "x=2");
    }

    #[test]
    fn test_failing_writes_leave_content() {
        let stream = MemoryStream::with_content("doc", "original");
        stream.fail_writes(true);

        assert!(stream.write_text("changed").is_err());
        assert_eq!(stream.content().as_deref(), Some("original"));
        assert_eq!(stream.writes(), 0);
    }
}
