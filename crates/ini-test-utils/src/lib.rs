//! Shared test utilities for the inip workspace.
//!
//! This crate is a dev-dependency only; it is never published.
//!
//! # Modules
//!
//! - [`document`]: [`TestDocument`](document::TestDocument), a document file in a temp dir
//! - [`fixtures`]: sample documents under `test-fixtures/documents`

pub mod document;
pub mod fixtures;
