//! The byte-stream seam between a document and its storage

use std::fmt;
use std::path::{Path, PathBuf};

use crate::{Result, io};

/// Source and sink of a document's text.
///
/// Implementations open, fully consume, and close their backing resource
/// within each call; no handle is held between calls.
pub trait DocumentStream: fmt::Debug {
    /// Human-readable identity of the document (a path, a label).
    fn identity(&self) -> String;

    /// Read the whole document.
    fn read_text(&self) -> Result<String>;

    /// Replace the whole document with `content`.
    fn write_text(&self, content: &str) -> Result<()>;
}

/// A document stored in a file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStream {
    path: PathBuf,
}

impl FileStream {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DocumentStream for FileStream {
    fn identity(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String> {
        io::read_text(&self.path)
    }

    fn write_text(&self, content: &str) -> Result<()> {
        io::write_text(&self.path, content)
    }
}
