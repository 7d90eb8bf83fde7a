//! [`TestDocument`] for tests that need a real file on disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A document file inside its own temporary directory.
///
/// # Example
///
/// ```rust,no_run
/// use ini_test_utils::document::TestDocument;
///
/// let doc = TestDocument::new("[core]\nname=demo\n");
/// doc.assert_contents("[core]\nname=demo\n");
/// ```
pub struct TestDocument {
    temp_dir: TempDir,
    path: PathBuf,
}

impl TestDocument {
    /// Create `settings.ini` containing `content`.
    pub fn new(content: &str) -> Self {
        Self::named("settings.ini", content)
    }

    /// Create a document file called `name` containing `content`.
    pub fn named(name: &str, content: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(name);
        fs::write(&path, content).unwrap();
        Self { temp_dir, path }
    }

    /// A path inside the temp dir where no file exists yet.
    pub fn missing(name: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(name);
        Self { temp_dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Current file contents.
    ///
    /// # Panics
    /// Panics if the file cannot be read.
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", self.path.display()))
    }

    /// Overwrite the file, as another program editing it would.
    pub fn write(&self, content: &str) {
        fs::write(&self.path, content).unwrap();
    }

    /// Replace the file with a directory so every open fails.
    pub fn make_unreadable(&self) {
        if self.path.exists() {
            fs::remove_file(&self.path).unwrap();
        }
        fs::create_dir(&self.path).unwrap();
    }

    /// Assert the file holds exactly `expected`.
    ///
    /// # Panics
    /// Panics with both texts if they differ.
    pub fn assert_contents(&self, expected: &str) {
        let actual = self.read();
        assert_eq!(
            actual,
            expected,
            "Unexpected contents in {}",
            self.path.display()
        );
    }
}
