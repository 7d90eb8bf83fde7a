//! End-to-end tests across ini-fs and ini-content
//!
//! These exercise the complete flow: settings file -> dialect -> document on
//! disk -> edits -> write -> reparse.

use std::fs;

use ini_content::{Dialect, Document, Error, LineStore};
use ini_fs::{ConfigStore, FileStream};
use ini_test_utils::document::TestDocument;
use ini_test_utils::fixtures;
use pretty_assertions::assert_eq;

#[test]
fn test_edit_fixture_on_disk() {
    let file = TestDocument::new(&fixtures::read("app.ini"));
    let mut doc = Document::open(file.path());
    assert!(doc.is_parsed());

    doc.change_property("server", "port", "9090").unwrap();
    doc.add_property("server", "tls", "on").unwrap();
    doc.delete_section("features").unwrap();
    doc.create_section("logging").unwrap();
    doc.add_property("logging", "level", "debug").unwrap();
    doc.apply_changes().unwrap();

    file.assert_contents(
        "# Application settings\n\
         \n\
         [server]\n\
         host=localhost\n\
         port=9090\n\
         \n\
         # Database connection\n\
         tls=on\n\
         [database]\n\
         url=postgres://db/app?sslmode=require\n\
         pool=\n\
         \n\
         [logging]\n\
         level=debug\n",
    );
}

#[test]
fn test_unmodified_documents_are_written_back_identically() {
    for name in fixtures::VALID {
        let original = fixtures::read(name);
        let file = TestDocument::new(&original);
        let mut doc = Document::open(file.path());
        assert!(doc.is_parsed(), "fixture {name}");
        assert!(!doc.is_modified(), "fixture {name}");

        doc.apply_changes().unwrap();

        file.assert_contents(&original);
    }
}

#[test]
fn test_dialect_from_settings_file() {
    let file = TestDocument::new("; generated\n[paths]\nhome: /home/demo\n");
    let settings = file.dir().join("dialect.toml");
    fs::write(&settings, "delimiter = \":\"\ncomment = \";\"\n").unwrap();

    let dialect: Dialect = ConfigStore::new().load(&settings).unwrap();
    let mut doc = Document::with_stream(FileStream::new(file.path()), dialect);
    doc.set_always_apply(true);

    assert_eq!(doc.value("paths", "home"), Some(" /home/demo"));
    doc.add_property("paths", "tmp", "/tmp").unwrap();

    file.assert_contents("; generated\n[paths]\nhome: /home/demo\ntmp:/tmp\n");
}

#[test]
fn test_invalid_dialect_in_settings_file() {
    let file = TestDocument::named("dialect.json", r##"{"delimiter": "[", "comment": "#"}"##);

    let result: ini_fs::Result<Dialect> = ConfigStore::new().load(file.path());

    assert!(matches!(result, Err(ini_fs::Error::ConfigParse { .. })));
}

#[test]
fn test_external_edit_then_reparse() {
    let file = TestDocument::new("[core]\nname=demo\n");
    let mut doc = Document::open(file.path());

    file.write("[core]\nname=edited\n# by hand\n");
    doc.reparse().unwrap();
    doc.add_property("core", "extra", "1").unwrap();
    doc.apply_changes().unwrap();

    file.assert_contents("[core]\nname=edited\n# by hand\nextra=1\n");
}

#[test]
fn test_broken_file_keeps_last_good_state() {
    let file = TestDocument::new("[core]\nname=demo\n");
    let mut doc = Document::open(file.path());

    file.write("[core\nname=demo\n");
    let err = doc.reparse().unwrap_err();
    assert!(matches!(err, Error::Syntax { line: 1, .. }));
    assert!(!doc.is_parsed());

    // Writing back restores the last good document.
    doc.apply_changes().unwrap();
    file.assert_contents("[core]\nname=demo\n");
}

#[test]
fn test_invalid_fixture_opens_unparsed() {
    for name in fixtures::INVALID {
        let doc = Document::open(fixtures::path(name));
        assert!(!doc.is_parsed(), "fixture {name}");
        assert!(doc.store().is_empty(), "fixture {name}");
    }
}

#[test]
fn test_store_matches_document_render() {
    let source = fixtures::read("comments.ini");
    let store = LineStore::parse(&source, Dialect::default()).unwrap();
    let doc = Document::open(fixtures::path("comments.ini"));

    assert_eq!(doc.render(), store.to_string());
    assert_eq!(store.sections().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_mixed_line_endings_on_disk() {
    let file = TestDocument::new("[core]\r\nname=demo\n# hand edited\r\n");
    let mut doc = Document::open(file.path());
    assert!(doc.is_parsed());

    doc.apply_changes().unwrap();
    file.assert_contents("[core]\r\nname=demo\n# hand edited\r\n");

    doc.change_property("core", "name", "renamed").unwrap();
    doc.apply_changes().unwrap();
    file.assert_contents("[core]\r\nname=renamed\n# hand edited\r\n");
}
