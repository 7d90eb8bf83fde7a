//! Format-preserving INI line store
//!
//! Parses a sectioned `key=value` document into an ordered store of typed
//! lines, applies structural edits (sections and properties), and writes the
//! document back with every untouched byte preserved: comments, blank lines,
//! ordering and line endings.
//!
//! # Layers
//!
//! - [`line`]: classifies one raw line into a [`Line`] record
//! - [`LineStore`]: ordered lines with section/key-aware operations
//! - [`Document`]: a store bound to a [`DocumentStream`](ini_fs::DocumentStream),
//!   with reparse, apply and the always-apply policy
//!
//! ```
//! use ini_content::{Dialect, LineStore};
//!
//! let mut store = LineStore::parse("# server\n[net]\nport=80\n", Dialect::default()).unwrap();
//! store.add_property("net", "host", "localhost").unwrap();
//! assert_eq!(store.value("net", "port"), Some("80"));
//! assert_eq!(store.serialize(), "# server\n[net]\nport=80\nhost=localhost\n");
//! ```
//!
//! None of these types lock. A document and its store are meant to be owned
//! and mutated by one caller on one thread.

pub mod dialect;
pub mod document;
pub mod error;
pub mod line;
pub mod logging;
pub mod store;
pub mod text;

pub use dialect::Dialect;
pub use document::Document;
pub use error::{Error, Result};
pub use line::{Line, LineKind};
pub use store::LineStore;
pub use text::{LineEnding, SourceLine, SourceText};
