//! Document streams and safe file I/O for inip
//!
//! The line store never touches the filesystem directly. Everything it needs
//! from the outside world goes through a [`DocumentStream`]: read the whole
//! document, or replace it with new text.
//!
//! - [`FileStream`] backs a document with a file and writes atomically.
//! - [`MemoryStream`] keeps the document in memory (tests, embedding).
//! - [`ConfigStore`] loads serde settings such as a dialect from TOML/JSON.

pub mod config;
pub mod error;
pub mod io;
pub mod memory;
pub mod stream;

pub use config::ConfigStore;
pub use error::{Error, Result};
pub use memory::MemoryStream;
pub use stream::{DocumentStream, FileStream};
