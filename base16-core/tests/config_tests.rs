//! Template config error-message and layout integration tests.

use assert_fs::prelude::*;
use base16_core::{config, document, ConfigError, ParseError};
use predicates::prelude::predicate;
use rstest::rstest;

// ---------------------------------------------------------------------------
// 1. Load error messages
// ---------------------------------------------------------------------------

#[test]
fn missing_config_names_the_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let err = config::load_templates_at(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::NotFound { .. }), "got: {err}");
    let msg = err.to_string();
    assert!(msg.contains("template config not found"));
    assert!(msg.contains("config.yaml"));
}

#[test]
fn corrupt_config_returns_parse_error_with_path() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("templates/config.yaml")
        .write_str(": : corrupt : yaml : !!!\n  - broken: [unclosed")
        .expect("write");

    let err = config::load_templates_at(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
    assert!(err.to_string().contains("config.yaml"));
}

#[rstest]
#[case::list("- cfg\n- other\n")]
#[case::scalar("just a string\n")]
fn non_mapping_config_is_a_parse_error(#[case] body: &str) {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("templates/config.yaml").write_str(body).expect("write");
    let err = config::load_templates_at(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }), "got: {err}");
}

#[rstest]
#[case::no_extension("cfg:\n  output: out\n")]
#[case::no_output("cfg:\n  extension: .conf\n")]
#[case::not_a_mapping("cfg: oops\n")]
fn malformed_entry_names_the_template(#[case] body: &str) {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("templates/config.yaml").write_str(body).expect("write");
    let err = config::load_templates_at(root.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidEntry { .. }), "got: {err}");
    assert!(err.to_string().contains("'cfg'"));
}

// ---------------------------------------------------------------------------
// 2. Successful loads
// ---------------------------------------------------------------------------

#[test]
fn loads_every_template_with_resolved_paths() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    root.child("templates/config.yaml")
        .write_str(
            "default:\n  extension: .conf\n  output: out/conf\nshell:\n  extension: .sh\n  output: out/shell\n",
        )
        .expect("write");

    let templates = config::load_templates_at(root.path()).expect("load");
    assert_eq!(templates.len(), 2);

    let templates_dir = config::templates_dir_at(root.path());
    let shell = &templates[1];
    assert_eq!(shell.name, "shell");
    assert_eq!(shell.source_path(&templates_dir), root.path().join("templates/shell.mustache"));
    assert_eq!(
        shell.output_path("ocean"),
        root.path().join("out/shell/base16-ocean.sh")
    );

    root.child("templates/config.yaml").assert(predicate::path::is_file());
}

// ---------------------------------------------------------------------------
// 3. Scheme documents
// ---------------------------------------------------------------------------

#[test]
fn scheme_document_with_nested_value_is_rejected() {
    let root = assert_fs::TempDir::new().expect("tempdir");
    let file = root.child("nested.yaml");
    file.write_str("scheme: Nested\npalette:\n  base00: \"000000\"\n").expect("write");

    let err = document::read_scheme_document(file.path()).unwrap_err();
    assert!(matches!(err, ParseError::Yaml { .. }), "got: {err}");
    assert!(err.to_string().contains("nested.yaml"));
}
