//! Integration tests for bundles and catalog loading.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::PathBuf;

use lingo::{Bundle, Catalog, LoadError, MessageNode};
use tempfile::{NamedTempFile, TempDir};

// =========================================================================
// Bundle Walk
// =========================================================================

#[test]
fn bundle_from_pairs_walks_nested_groups() {
    let bundle: Bundle = [
        (
            "ui",
            MessageNode::group([
                ("salvar", MessageNode::message("Salvar")),
                ("menu", MessageNode::group([("abrir", MessageNode::message("Abrir"))])),
            ]),
        ),
        ("titulo", "Agenda".into()),
    ]
    .into_iter()
    .collect();

    assert_eq!(bundle.message("ui.salvar"), Some("Salvar"));
    assert_eq!(bundle.message("ui.menu.abrir"), Some("Abrir"));
    assert_eq!(bundle.message("titulo"), Some("Agenda"));
    assert!(bundle.lookup("ui.menu").is_some_and(MessageNode::is_group));
    assert_eq!(bundle.message("ui.menu"), None);
}

#[test]
fn insert_creates_intermediate_groups() {
    let mut bundle = Bundle::new();
    bundle.insert("a.b.c", "deep");
    bundle.insert("a.d", "shallow");

    assert_eq!(bundle.message("a.b.c"), Some("deep"));
    assert_eq!(bundle.message("a.d"), Some("shallow"));
    assert_eq!(bundle.keys(), vec!["a.b.c", "a.d"]);
    assert_eq!(bundle.len(), 2);
}

#[test]
fn insert_replaces_leaf_standing_in_the_path() {
    let mut bundle = Bundle::new();
    bundle.insert("a", "leaf");
    bundle.insert("a.b", "nested");

    assert_eq!(bundle.message("a"), None);
    assert_eq!(bundle.message("a.b"), Some("nested"));
}

#[test]
fn empty_key_names_nothing() {
    let mut bundle = Bundle::new();
    bundle.insert("x", "X");
    assert!(bundle.lookup("").is_none());
    assert!(!bundle.contains(""));
}

#[test]
fn non_group_root_misses_everything() {
    let bundle = Bundle::from_root(MessageNode::message("solo"));
    assert_eq!(bundle.message("solo"), None);
    assert!(bundle.is_empty());
}

#[test]
fn leaves_list_messages_and_unsupported_values_in_key_order() {
    let bundle =
        Bundle::from_json_str(r#"{ "b": { "y": 1, "x": "X" }, "a": "A", "vazio": {} }"#).unwrap();

    let keys: Vec<String> = bundle.leaves().into_iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["a", "b.x", "b.y"]);
    assert_eq!(bundle.keys(), vec!["a", "b.x"]);
    assert_eq!(bundle.unsupported_keys(), vec!["b.y"]);
}

#[test]
fn dotted_member_names_are_not_listed_as_keys() {
    let bundle =
        Bundle::from_json_str(r#"{ "a.b": "X", "g": { "c.d": { "e": "E" } }, "ok": "OK" }"#)
            .unwrap();

    assert_eq!(bundle.keys(), vec!["ok"]);
    assert_eq!(bundle.unreachable_keys(), vec!["a.b", "g.c.d.e"]);
    assert_eq!(bundle.message("a.b"), None);
    assert_eq!(bundle.len(), 1);
}

#[test]
fn insert_replaces_non_group_root() {
    let mut bundle = Bundle::from_root(MessageNode::message("solo"));
    bundle.insert("ui.ok", "OK");

    assert_eq!(bundle.message("ui.ok"), Some("OK"));
    assert_eq!(bundle.keys(), vec!["ui.ok"]);
}

// =========================================================================
// Loading from Strings
// =========================================================================

#[test]
fn load_str_counts_string_messages() {
    let mut catalog = Catalog::new();
    let count = catalog
        .load_str(
            "pt",
            r#"{ "ui": { "salvar": "Salvar", "sair": "Sair", "max": 5 }, "ok": "OK" }"#,
        )
        .unwrap();

    assert_eq!(count, 3);
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["pt"]);
}

#[test]
fn load_str_keeps_malformed_leaves_as_misses() {
    let mut catalog = Catalog::new();
    catalog
        .load_str(
            "pt",
            r#"{ "n": 1, "b": true, "l": ["x"], "z": null, "ok": "OK" }"#,
        )
        .unwrap();
    let bundle = catalog.bundle("pt").unwrap();

    for key in ["n", "b", "l", "z"] {
        assert_eq!(bundle.message(key), None, "{key} should miss");
        assert!(bundle.lookup(key).is_some());
    }
    assert_eq!(bundle.message("ok"), Some("OK"));
}

#[test]
fn loading_same_locale_twice_replaces_bundle() {
    let mut catalog = Catalog::new();
    catalog.load_str("pt", r#"{ "ola": "Olá" }"#).unwrap();
    catalog.load_str("pt", r#"{ "tchau": "Tchau" }"#).unwrap();

    let bundle = catalog.bundle("pt").unwrap();
    assert_eq!(bundle.message("ola"), None);
    assert_eq!(bundle.message("tchau"), Some("Tchau"));
    assert_eq!(catalog.len(), 1);
}

#[test]
fn load_str_reports_syntax_error_location() {
    let mut catalog = Catalog::new();
    let err = catalog
        .load_str("pt", "{\n  \"ok\": \"OK\",\n  oops\n}")
        .unwrap_err();

    match err {
        LoadError::Parse {
            path, line, column, ..
        } => {
            assert_eq!(path, PathBuf::from("<pt>"));
            assert_eq!(line, 3);
            assert!(column > 0);
        }
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(catalog.is_empty());
}

#[test]
fn load_str_rejects_non_object_root() {
    let mut catalog = Catalog::new();
    let err = catalog.load_str("pt", r#"["not", "a", "tree"]"#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnObject { .. }));

    let err = Bundle::from_json_str(r#""text""#).unwrap_err();
    assert!(matches!(err, LoadError::NotAnObject { .. }));
}

// =========================================================================
// Loading from Files
// =========================================================================

#[test]
fn load_file_reads_json_bundle() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), r#"{ "ui": { "salvar": "Save" } }"#).unwrap();

    let mut catalog = Catalog::new();
    let count = catalog.load_file("en", file.path()).unwrap();

    assert_eq!(count, 1);
    assert_eq!(
        catalog.bundle("en").and_then(|b| b.message("ui.salvar")),
        Some("Save")
    );
}

#[test]
fn load_file_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let mut catalog = Catalog::new();
    let err = catalog.load_file("pt", &path).unwrap_err();
    match err {
        LoadError::Io { path: err_path, .. } => assert_eq!(err_path, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn load_file_parse_error_names_file() {
    let file = NamedTempFile::new().unwrap();
    fs::write(file.path(), "{ \"ok\": }").unwrap();

    let mut catalog = Catalog::new();
    let err = catalog.load_file("pt", file.path()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.starts_with(&file.path().display().to_string()));
    assert!(msg.contains(":1:"));
}

#[test]
fn load_dir_loads_every_json_file_by_stem() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pt.json"), r#"{ "ok": "Certo" }"#).unwrap();
    fs::write(dir.path().join("en.json"), r#"{ "ok": "Right" }"#).unwrap();
    fs::write(dir.path().join("README.md"), "not a bundle").unwrap();
    fs::create_dir(dir.path().join("nested.json")).unwrap();

    let mut catalog = Catalog::new();
    let locales = catalog.load_dir(dir.path()).unwrap();

    assert_eq!(locales, vec!["en", "pt"]);
    assert_eq!(catalog.locales().collect::<Vec<_>>(), vec!["en", "pt"]);
    assert_eq!(
        catalog.bundle("pt").and_then(|b| b.message("ok")),
        Some("Certo")
    );
}

#[test]
fn load_dir_stops_at_first_broken_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("en.json"), "{").unwrap();
    fs::write(dir.path().join("pt.json"), r#"{ "ok": "Certo" }"#).unwrap();

    let mut catalog = Catalog::new();
    let err = catalog.load_dir(dir.path()).unwrap_err();
    assert!(matches!(err, LoadError::Parse { .. }));
}

#[test]
fn load_dir_missing_directory_is_io_error() {
    let dir = TempDir::new().unwrap();
    let mut catalog = Catalog::new();
    let err = catalog.load_dir(dir.path().join("missing")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

// =========================================================================
// Error Display
// =========================================================================

#[test]
fn load_error_io_display() {
    let err = LoadError::Io {
        path: PathBuf::from("i18n/pt.json"),
        source: io::Error::new(ErrorKind::NotFound, "file not found"),
    };
    insta::assert_snapshot!(err.to_string(), @"failed to read 'i18n/pt.json': file not found");
}

#[test]
fn load_error_parse_display() {
    let err = LoadError::Parse {
        path: PathBuf::from("i18n/en.json"),
        line: 4,
        column: 12,
        message: "expected value".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"i18n/en.json:4:12: expected value");
}

#[test]
fn load_error_not_an_object_display() {
    let err = LoadError::NotAnObject {
        path: PathBuf::from("<pt>"),
    };
    insta::assert_snapshot!(err.to_string(), @"<pt>: bundle root must be a JSON object");
}
