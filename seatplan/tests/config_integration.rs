//! Integration tests for the configuration system.
//!
//! These tests exercise file discovery, merging, environment overrides and
//! validation together through `ConfigBuilder`.
//!
//! Tests that modify environment variables are marked with `#[serial]`;
//! environment variables are process-global, so concurrent access would
//! race. Every test points the user directory at a temporary location so the
//! developer's own `~/.seatplan/config.yaml` never leaks in.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use seatplan::config::{
    Config, ConfigBuilder, InputConfig, LimitsConfig, OutputFormat, SelectionKind,
    PROJECT_CONFIG_FILE,
};
use seatplan::error::Error;
use seatplan::records::{read_flights, ReadOptions};

// ============================================================================
// Test Utilities
// ============================================================================

fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `SEATPLAN_*` variable for the duration of a test.
fn clear_seatplan_env_vars() -> Vec<EnvGuard> {
    [
        "SEATPLAN_SELECTION",
        "SEATPLAN_MAX_FLIGHTS",
        "SEATPLAN_MAX_RESERVATIONS",
        "SEATPLAN_INPUT_DELIMITER",
        "SEATPLAN_INPUT_HAS_HEADERS",
        "SEATPLAN_OUTPUT_FORMAT",
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

/// A builder isolated from the real home directory.
fn isolated(working_dir: &Path, user_dir: &Path) -> ConfigBuilder {
    ConfigBuilder::new()
        .with_working_dir(working_dir)
        .with_user_dir(user_dir)
}

// ============================================================================
// File discovery and precedence
// ============================================================================

#[test]
fn test_file_discovery_upward_traversal() {
    let temp = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    let child = temp.path().join("nested").join("deeply");
    fs::create_dir_all(&child).unwrap();
    create_temp_config(temp.path(), PROJECT_CONFIG_FILE, "selection: tightest-fit\n");

    let config = isolated(&child, user.path()).skip_env().build().unwrap();

    assert_eq!(config.selection(), SelectionKind::TightestFit);
}

#[test]
fn test_project_overrides_user() {
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    create_temp_config(
        user.path(),
        "config.yaml",
        "output_format: csv\nlimits:\n  max_flights: 10\n  max_reservations: 20\n",
    );
    create_temp_config(
        project.path(),
        PROJECT_CONFIG_FILE,
        "output_format: table\nlimits:\n  max_flights: 30\n",
    );

    let config = isolated(project.path(), user.path()).skip_env().build().unwrap();

    assert_eq!(config.output_format(), OutputFormat::Table);
    assert_eq!(config.max_flights(), 30);
    assert_eq!(config.max_reservations(), 20);
}

#[test]
fn test_explicit_file_overrides_project() {
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    create_temp_config(project.path(), PROJECT_CONFIG_FILE, "output_format: table\n");
    let explicit = create_temp_config(user.path(), "run.yaml", "output_format: csv\n");

    let config = isolated(project.path(), user.path())
        .with_config_file(&explicit)
        .skip_env()
        .build()
        .unwrap();

    assert_eq!(config.output_format(), OutputFormat::Csv);
}

#[test]
fn test_invalid_project_file_is_an_error() {
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    create_temp_config(project.path(), PROJECT_CONFIG_FILE, "selection: greedy\n");

    let result = isolated(project.path(), user.path()).skip_env().build();

    assert!(matches!(result, Err(Error::Configuration(_))));
}

#[test]
fn test_semantically_invalid_file_fails_validation() {
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    create_temp_config(
        project.path(),
        PROJECT_CONFIG_FILE,
        "input:\n  delimiter: \"x\"\n",
    );

    let result = isolated(project.path(), user.path()).skip_env().build();

    assert!(matches!(
        result,
        Err(Error::Validation { ref field, .. }) if field == "input.delimiter"
    ));
}

// ============================================================================
// Environment overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_files() {
    let _clean = clear_seatplan_env_vars();
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    create_temp_config(
        project.path(),
        PROJECT_CONFIG_FILE,
        "selection: lookahead\nlimits:\n  max_reservations: 5\n",
    );

    let _selection = EnvGuard::new("SEATPLAN_SELECTION", "tightest-fit");
    let _flights = EnvGuard::new("SEATPLAN_MAX_FLIGHTS", "7");

    let config = isolated(project.path(), user.path()).build().unwrap();

    assert_eq!(config.selection(), SelectionKind::TightestFit);
    assert_eq!(config.max_flights(), 7);
    assert_eq!(config.max_reservations(), 5);
}

#[test]
#[serial]
fn test_programmatic_overrides_env() {
    let _clean = clear_seatplan_env_vars();
    let project = TempDir::new().unwrap();
    let _format = EnvGuard::new("SEATPLAN_OUTPUT_FORMAT", "csv");

    let config = isolated(project.path(), project.path())
        .with_config(Config {
            output_format: Some(OutputFormat::Table),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.output_format(), OutputFormat::Table);
}

#[test]
#[serial]
fn test_invalid_env_value() {
    let _clean = clear_seatplan_env_vars();
    let project = TempDir::new().unwrap();
    let _headers = EnvGuard::new("SEATPLAN_INPUT_HAS_HEADERS", "sometimes");

    let result = isolated(project.path(), project.path()).build();

    assert!(matches!(
        result,
        Err(Error::Validation { ref field, .. }) if field == "SEATPLAN_INPUT_HAS_HEADERS"
    ));
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let _clean = clear_seatplan_env_vars();
    let project = TempDir::new().unwrap();
    let _format = EnvGuard::new("SEATPLAN_OUTPUT_FORMAT", "csv");

    let config = isolated(project.path(), project.path()).skip_env().build().unwrap();

    assert_eq!(config.output_format(), OutputFormat::Json);
}

// ============================================================================
// Effective configuration drives record reading
// ============================================================================

#[test]
#[serial]
fn test_env_delimiter_reaches_reader() {
    let _clean = clear_seatplan_env_vars();
    let project = TempDir::new().unwrap();
    let _delimiter = EnvGuard::new("SEATPLAN_INPUT_DELIMITER", ";");
    let _limit = EnvGuard::new("SEATPLAN_MAX_FLIGHTS", "1");

    let config = isolated(project.path(), project.path()).build().unwrap();
    assert_eq!(
        config.input,
        Some(InputConfig {
            delimiter: Some(';'),
            has_headers: None,
        })
    );

    let options = ReadOptions::for_flights(&config);
    let flights = read_flights("F1;A;B;3\n".as_bytes(), &options).unwrap();
    assert_eq!(flights[0].capacity(), 3);

    let err = read_flights("F1;A;B;3\nF2;B;C;3\n".as_bytes(), &options).unwrap_err();
    assert!(matches!(err, Error::InputTooLarge { limit: 1, .. }));
}

#[test]
fn test_limits_default_when_unset() {
    let config = ConfigBuilder::new()
        .skip_files()
        .skip_env()
        .with_config(Config {
            limits: Some(LimitsConfig::default()),
            ..Default::default()
        })
        .build()
        .unwrap();

    assert_eq!(config.max_flights(), LimitsConfig::DEFAULT_MAX_FLIGHTS);
    assert_eq!(config.max_reservations(), LimitsConfig::DEFAULT_MAX_RESERVATIONS);
}
