use assert_fs::TempDir;
use assert_fs::prelude::*;
use ini_fs::{ConfigStore, Error};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Settings {
    delimiter: char,
    comment: char,
}

#[rstest]
#[case("settings.toml", "delimiter = \":\"\ncomment = \";\"\n")]
#[case("settings.json", r#"{"delimiter": ":", "comment": ";"}"#)]
fn test_load_by_extension(#[case] name: &str, #[case] content: &str) {
    let temp = TempDir::new().unwrap();
    let file = temp.child(name);
    file.write_str(content).unwrap();

    let settings: Settings = ConfigStore::new().load(file.path()).unwrap();

    assert_eq!(
        settings,
        Settings {
            delimiter: ':',
            comment: ';'
        }
    );
}

#[rstest]
#[case("settings.toml")]
#[case("settings.json")]
fn test_save_then_load(#[case] name: &str) {
    let temp = TempDir::new().unwrap();
    let file = temp.child(name);
    let store = ConfigStore::new();
    let settings = Settings {
        delimiter: '=',
        comment: '#',
    };

    store.save(file.path(), &settings).unwrap();
    let loaded: Settings = store.load(file.path()).unwrap();

    assert_eq!(loaded, settings);
}

#[test]
fn test_load_invalid_toml_reports_format() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("settings.toml");
    file.write_str("delimiter = [").unwrap();

    let err = ConfigStore::new().load::<Settings>(file.path()).unwrap_err();

    assert!(matches!(err, Error::ConfigParse { ref format, .. } if format == "TOML"));
}

#[test]
fn test_unsupported_extension() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("settings.yaml");
    file.write_str("delimiter: '='").unwrap();

    let err = ConfigStore::new().load::<Settings>(file.path()).unwrap_err();

    assert!(matches!(err, Error::UnsupportedFormat { extension } if extension == "yaml"));
}
