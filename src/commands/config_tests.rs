use std::path::PathBuf;

use clap::Parser;
use tempfile::TempDir;

use super::*;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("config.toml");
    fs::write(&path, content).unwrap();
    path
}

fn cli(no_config: bool) -> Cli {
    if no_config {
        Cli::parse_from(["archive-guard", "--no-config", "config", "show"])
    } else {
        Cli::parse_from(["archive-guard", "config", "show"])
    }
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn validate_accepts_valid_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(
        &temp_dir,
        r#"
continue_on_error = true

[source]
roots = ["/mnt/scan"]

[images]
extensions = ["jpg", "tif"]
number_length = 4
"#,
    );

    assert!(run_config_validate_impl(&path).is_ok());
    assert_eq!(run_config_validate(&path), EXIT_SUCCESS);
}

#[test]
fn validate_rejects_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("nope.toml");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(err.to_string().contains("not found"));
    assert_eq!(run_config_validate(&path), EXIT_CONFIG_ERROR);
}

#[test]
fn validate_rejects_unknown_keys() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[source]\nrootz = []\n");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, ArchiveGuardError::TomlParse(_)));
}

#[test]
fn validate_rejects_out_of_range_number_length() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[images]\nnumber_length = 0\n");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, ArchiveGuardError::Config(_)));
}

#[test]
fn validate_compiles_naming_patterns() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[naming]\nunit_pattern = '[0-9'\n");

    let err = run_config_validate_impl(&path).unwrap_err();
    assert!(matches!(err, ArchiveGuardError::InvalidPattern { .. }));
}

// =============================================================================
// show
// =============================================================================

#[test]
fn show_text_renders_toml_sections() {
    let output = run_config_show_impl(None, ConfigOutputFormat::Text, &cli(true)).unwrap();

    assert!(output.starts_with("=== Effective Configuration ==="));
    assert!(output.contains("[naming]"));
    assert!(output.contains("number_length = 6"));
}

#[test]
fn show_json_is_parseable() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "[source]\nexclude = [\"tmp\"]\n");

    let output = run_config_show_impl(Some(&path), ConfigOutputFormat::Json, &cli(false)).unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["source"]["exclude"][0], "tmp");
    assert_eq!(value["images"]["extensions"][0], ".jpg");
    assert_eq!(value["continue_on_error"], false);
}

#[test]
fn show_text_round_trips_through_loader() {
    let mut config = Config::default();
    config.source.roots = vec![PathBuf::from("/mnt/scan")];
    config.images.tool_dir = Some(PathBuf::from("/opt/im"));

    let text = format_config_text(&config).unwrap();
    let body = text.trim_start_matches("=== Effective Configuration ===\n\n");

    let parsed: Config = toml::from_str(body).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn show_reports_broken_config() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_config(&temp_dir, "continue_on_error = \"yes\"\n");

    assert!(run_config_show_impl(Some(&path), ConfigOutputFormat::Text, &cli(false)).is_err());
}

#[test]
fn run_config_dispatches_show() {
    let args = ConfigArgs {
        action: ConfigAction::Show {
            config: None,
            format: ConfigOutputFormat::Json,
        },
    };
    assert_eq!(run_config(&args, &cli(true)), EXIT_SUCCESS);
}
