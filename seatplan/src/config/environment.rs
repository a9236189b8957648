//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `SEATPLAN_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::env;

/// Selection strategy (`lookahead` or `tightest-fit`).
pub const SELECTION: &str = "SEATPLAN_SELECTION";
/// Flight count limit.
pub const MAX_FLIGHTS: &str = "SEATPLAN_MAX_FLIGHTS";
/// Reservation count limit.
pub const MAX_RESERVATIONS: &str = "SEATPLAN_MAX_RESERVATIONS";
/// Record field delimiter.
pub const INPUT_DELIMITER: &str = "SEATPLAN_INPUT_DELIMITER";
/// Whether record files carry a header row.
pub const INPUT_HAS_HEADERS: &str = "SEATPLAN_INPUT_HAS_HEADERS";
/// Output format (`json`, `table` or `csv`).
pub const OUTPUT_FORMAT: &str = "SEATPLAN_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use seatplan::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric limit, unknown strategy).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |name| env::var(name).ok())
    }

    /// Apply overrides looked up through `var` instead of the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::apply_overrides`].
    pub fn apply_from<F>(config: &mut Config, var: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = var(SELECTION) {
            config.selection = Some(val.trim().parse().map_err(|message| Error::Validation {
                field: SELECTION.into(),
                message,
            })?);
        }

        if let Some(val) = var(OUTPUT_FORMAT) {
            config.output_format =
                Some(val.trim().parse().map_err(|message| Error::Validation {
                    field: OUTPUT_FORMAT.into(),
                    message,
                })?);
        }

        if let Some(val) = var(MAX_FLIGHTS) {
            let limits = config.limits.get_or_insert_with(Default::default);
            limits.max_flights = Some(Self::parse_count(MAX_FLIGHTS, &val)?);
        }

        if let Some(val) = var(MAX_RESERVATIONS) {
            let limits = config.limits.get_or_insert_with(Default::default);
            limits.max_reservations = Some(Self::parse_count(MAX_RESERVATIONS, &val)?);
        }

        if let Some(val) = var(INPUT_DELIMITER) {
            let input = config.input.get_or_insert_with(Default::default);
            input.delimiter = Some(Self::parse_delimiter(&val)?);
        }

        if let Some(val) = var(INPUT_HAS_HEADERS) {
            let input = config.input.get_or_insert_with(Default::default);
            input.has_headers = Some(Self::parse_bool(INPUT_HAS_HEADERS, &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_count(field: &str, s: &str) -> Result<usize> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }

    /// A delimiter is exactly one character; `\t` is accepted for tab.
    fn parse_delimiter(s: &str) -> Result<char> {
        if s == "\\t" {
            return Ok('\t');
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(Error::Validation {
                field: INPUT_DELIMITER.into(),
                message: format!("Must be a single character, got '{s}'"),
            }),
        }
    }
}
