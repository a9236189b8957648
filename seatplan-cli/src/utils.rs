//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including configuration loading, record loading and output emission.

use crate::error::CliError;
use seatplan::records::{load_flights, load_reservations, ReadOptions};
use seatplan::{Config, ConfigBuilder, Flight, Reservation};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // `verbose` is consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file, applied above discovered files.
    pub config: Option<PathBuf>,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (`overrides`, highest priority)
/// 2. Environment variables
/// 3. The `--config` file
/// 4. The nearest `seatplan.yaml` and the user config
/// 5. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions, overrides: Config) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new().with_config(overrides);

    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }

    builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Read both record files using the effective configuration.
pub fn load_records(
    reservations: &Path,
    flights: &Path,
    config: &Config,
) -> Result<(Vec<Reservation>, Vec<Flight>), CliError> {
    let reservations = load_reservations(reservations, &ReadOptions::for_reservations(config))?;
    let flights = load_flights(flights, &ReadOptions::for_flights(config))?;
    log::debug!(
        "loaded {} reservations and {} flights",
        reservations.len(),
        flights.len()
    );
    Ok((reservations, flights))
}

/// Write formatted output to stdout, ending with a newline.
pub fn emit(text: &str) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(text.as_bytes())?;
    if !text.ends_with('\n') {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}
