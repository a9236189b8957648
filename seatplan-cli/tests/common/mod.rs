//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders isolated from the developer's own configuration
//! - Record file fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Nine reservations whose greedy resolution assigns every one.
pub const RESERVATIONS: &str = "\
PNR01,3,A,B
PNR02,4,A,C
PNR04,8,A,B
PNR05,1,A,C
PNR06,1,A,B
PNR07,2,A,B
PNR08,2,A,C
PNR09,2,A,C
PNR10,4,C,B
";

/// Five flights between A, B and C.
pub const FLIGHTS: &str = "\
F1,A,B,8
F2,A,B,4
F4,A,C,5
F5,C,B,7
F6,A,C,6
";

/// Every environment variable the binary reads.
const SEATPLAN_ENV_VARS: [&str; 8] = [
    "SEATPLAN_CONFIG",
    "SEATPLAN_LOG_MODE",
    "SEATPLAN_SELECTION",
    "SEATPLAN_MAX_FLIGHTS",
    "SEATPLAN_MAX_RESERVATIONS",
    "SEATPLAN_INPUT_DELIMITER",
    "SEATPLAN_INPUT_HAS_HEADERS",
    "SEATPLAN_OUTPUT_FORMAT",
];

/// Test environment rooted in a temporary directory.
///
/// Commands run with the temporary directory as both working directory and
/// `HOME`, so neither a project `seatplan.yaml` nor a user config outside it
/// can affect results.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a command builder for the seatplan binary.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("seatplan").expect("Failed to find seatplan binary");
        cmd.current_dir(&self.temp_path).env("HOME", &self.temp_path);
        for var in SEATPLAN_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the standard reservation and flight fixtures.
    pub fn fixtures(&self) -> (PathBuf, PathBuf) {
        (
            self.write_file("reservations.csv", RESERVATIONS),
            self.write_file("flights.csv", FLIGHTS),
        )
    }

    /// A `resolve` command over the given files.
    pub fn resolve(&self, reservations: &Path, flights: &Path) -> Command {
        let mut cmd = self.command();
        cmd.arg("resolve")
            .arg("--reservations")
            .arg(reservations)
            .arg("--flights")
            .arg(flights);
        cmd
    }

    /// A `search` command for one reservation over the given files.
    pub fn search(&self, reservations: &Path, flights: &Path, id: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("search")
            .arg("--reservations")
            .arg(reservations)
            .arg("--flights")
            .arg(flights)
            .arg("--reservation")
            .arg(id);
        cmd
    }
}

/// Parse stdout as JSON.
#[allow(dead_code)]
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
