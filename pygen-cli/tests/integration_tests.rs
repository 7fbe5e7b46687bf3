//! Integration tests for pygen-cli.
//!
//! These tests verify end-to-end functionality of the CLI library:
//! loading documents, checking, formatting, rendering and writing.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use pygen_cli::{
    commands,
    config::{CliArgs, Config, ConfigManager},
    error::{CliError, LoadError},
    load_module,
    writer::{FileWriter, WriteResult},
};
use pygen_ir::{ConsistencyIssue, IrError};

/// Get the path to test fixtures.
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy a fixture into a fresh temporary directory.
fn temp_copy(name: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(name);
    fs::copy(fixtures_path().join(name), &path).unwrap();
    (dir, path)
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn test_load_fixture() {
    let module = load_module(&fixtures_path().join("mathx.json")).unwrap();
    assert_eq!(module.name(), "mathx");
    assert_eq!(module.functions()[0].name(), "add");
    assert_eq!(module.variables()[0].sig(), "float");
}

#[test]
fn test_load_rejects_empty_symbol_name() {
    let err = load_module(&fixtures_path().join("empty_name.json")).unwrap_err();
    assert!(matches!(err, LoadError::Invalid { .. }));
    assert!(err.to_string().contains("symbol name must not be empty"));
}

// =============================================================================
// Check
// =============================================================================

#[test]
fn test_check_clean_fixture() {
    let outcome = commands::check(&fixtures_path().join("mathx.json")).unwrap();
    assert!(outcome.report.is_clean());
    assert!(outcome.passes(true));
}

#[test]
fn test_check_reports_conflicts() {
    let outcome = commands::check(&fixtures_path().join("conflicts.json")).unwrap();
    let issues = outcome.report.issues();

    assert_eq!(issues.len(), 3);
    assert!(issues.iter().any(|i| matches!(
        i,
        ConsistencyIssue::DuplicateName { name, count: 2, .. } if name == "load"
    )));
    assert!(issues.iter().any(|i| matches!(
        i,
        ConsistencyIssue::CrossPartition { name } if name == "VERSION"
    )));
    assert!(issues.iter().any(|i| matches!(
        i,
        ConsistencyIssue::KindMismatch { name, .. } if name == "MAX_SIZE"
    )));

    assert!(outcome.passes(false));
    assert!(!outcome.passes(true));

    // Findings never alter the decoded module.
    assert_eq!(outcome.module.functions().len(), 3);
    assert_eq!(outcome.module.variables().len(), 2);
}

#[test]
fn test_check_missing_file() {
    let err = commands::check(&fixtures_path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CliError::Load(LoadError::NotFound { .. })));
    assert_eq!(err.exit_code(), 1);
}

// =============================================================================
// Fmt
// =============================================================================

#[test]
fn test_fmt_fixture_is_canonical() {
    let outcome = commands::format(&fixtures_path().join("mathx.json"), true).unwrap();
    assert!(outcome.is_canonical());
}

#[test]
fn test_fmt_rewrites_non_canonical_document() {
    let (_dir, path) = temp_copy("conflicts.json");

    let outcome = commands::format(&path, true).unwrap();
    assert!(!outcome.is_canonical());
    assert!(!outcome.canonical.contains("classes"));

    let result = FileWriter::new(false).write(&path, &outcome.canonical).unwrap();
    assert!(result.was_written());

    let again = commands::format(&path, true).unwrap();
    assert!(again.is_canonical());
    assert_eq!(
        load_module(&path).unwrap(),
        load_module(&fixtures_path().join("conflicts.json")).unwrap()
    );
}

#[test]
fn test_fmt_compact() {
    let outcome = commands::format(&fixtures_path().join("mathx.json"), false).unwrap();
    assert!(!outcome.is_canonical());
    assert_eq!(outcome.canonical.lines().count(), 1);
}

// =============================================================================
// Render
// =============================================================================

#[test]
fn test_render_stub_to_directory() {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::merge_cli_args(
        Config::default(),
        &CliArgs {
            output: Some(dir.path().to_path_buf()),
            ..Default::default()
        },
    );

    let file = commands::render(&fixtures_path().join("mathx.json"), &config).unwrap();
    let result = FileWriter::new(false)
        .write_emitted(&config.output.dir, &file)
        .unwrap();

    assert!(result.was_written());
    let written = fs::read_to_string(dir.path().join("mathx.pyi")).unwrap();
    assert!(written.contains("def add(a: int, b: int) -> int:"));
    assert!(written.contains("PI: float"));
}

#[test]
fn test_render_markdown_without_docs() {
    let config = ConfigManager::merge_cli_args(
        Config::default(),
        &CliArgs {
            format: Some("markdown".to_string()),
            include_docs: Some(false),
            ..Default::default()
        },
    );

    let file = commands::render(&fixtures_path().join("mathx.json"), &config).unwrap();
    assert_eq!(file.path, PathBuf::from("mathx.md"));
    assert!(file.content.contains("## Functions"));
    assert!(!file.content.contains("Adds two numbers."));
}

#[test]
fn test_render_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let config = ConfigManager::merge_cli_args(
        Config::default(),
        &CliArgs {
            output: Some(dir.path().join("out")),
            ..Default::default()
        },
    );

    let file = commands::render(&fixtures_path().join("conflicts.json"), &config).unwrap();
    let result = FileWriter::new(true)
        .write_emitted(&config.output.dir, &file)
        .unwrap();

    assert!(matches!(result, WriteResult::DryRun { .. }));
    assert!(!dir.path().join("out").exists());
    assert_eq!(file.path, PathBuf::from("legacy/util.pyi"));
}

#[test]
fn test_render_rejects_module_names_that_leave_the_output_dir() {
    let dir = TempDir::new().unwrap();
    let out_dir = dir.path().join("out");
    let absolute = dir.path().join("abs.escape");
    let names = [
        "..".to_string(),
        ".hidden".to_string(),
        "pkg..sub".to_string(),
        absolute.display().to_string(),
    ];

    for format in ["stub", "markdown"] {
        let config = ConfigManager::merge_cli_args(
            Config::default(),
            &CliArgs {
                output: Some(out_dir.clone()),
                format: Some(format.to_string()),
                ..Default::default()
            },
        );

        for name in &names {
            let doc = dir.path().join("doc.json");
            let text = serde_json::json!({"name": name, "functions": [], "variables": []});
            fs::write(&doc, text.to_string()).unwrap();

            let err = commands::render(&doc, &config).unwrap_err();
            assert!(
                matches!(err, CliError::Ir(IrError::Emit { .. })),
                "{} accepted {:?}",
                format,
                name
            );
        }
    }

    assert!(!out_dir.exists());
    assert!(!dir.path().join("abs").exists());
}

#[test]
fn test_render_unknown_format() {
    let mut config = Config::default();
    config.render.format = "go".to_string();
    let err = commands::render(&fixtures_path().join("mathx.json"), &config).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

// =============================================================================
// Config
// =============================================================================

#[test]
fn test_config_file_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pygen.toml");
    fs::write(&path, ConfigManager::default_config_content()).unwrap();

    let config = ConfigManager::load(Some(&path)).unwrap();
    assert_eq!(config.render.format, "stub");
    assert!(config.output.pretty);
}

#[test]
fn test_config_explicit_path_must_exist() {
    let err = ConfigManager::load(Some(&fixtures_path().join("missing.toml"))).unwrap_err();
    assert!(matches!(err, CliError::Config(_)));
}

#[test]
fn test_config_invalid_values() {
    let dir = TempDir::new().unwrap();

    let bad_toml = dir.path().join("bad.toml");
    fs::write(&bad_toml, "[render\nformat = 1").unwrap();
    assert!(ConfigManager::load(Some(&bad_toml)).is_err());

    let bad_format = dir.path().join("format.toml");
    fs::write(&bad_format, "[render]\nformat = \"go\"\n").unwrap();
    let err = ConfigManager::load(Some(&bad_format)).unwrap_err();
    assert!(err.to_string().contains("render.format"));
}
