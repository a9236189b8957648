//! Configuration validation.
//!
//! Serde already rejects unknown keys and ill-typed values; this module
//! checks the values that parse but make no sense.

use crate::config::schema::{Config, InputConfig, LimitsConfig};
use crate::error::{Error, Result};

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use seatplan::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref limits) = config.limits {
            Self::validate_limits(limits)?;
        }

        if let Some(ref input) = config.input {
            Self::validate_input(input)?;
        }

        Ok(())
    }

    fn validate_limits(limits: &LimitsConfig) -> Result<()> {
        if limits.max_flights == Some(0) {
            return Err(Error::Validation {
                field: "limits.max_flights".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if limits.max_reservations == Some(0) {
            return Err(Error::Validation {
                field: "limits.max_reservations".into(),
                message: "Must be greater than 0".into(),
            });
        }

        Ok(())
    }

    /// The delimiter must be a single ASCII byte that cannot occur inside a
    /// field or be mistaken for a line break.
    fn validate_input(input: &InputConfig) -> Result<()> {
        let Some(delimiter) = input.delimiter else {
            return Ok(());
        };

        if !delimiter.is_ascii() {
            return Err(Error::Validation {
                field: "input.delimiter".into(),
                message: format!("Must be an ASCII character, got '{delimiter}'"),
            });
        }

        if delimiter.is_ascii_alphanumeric() || matches!(delimiter, '\n' | '\r' | '"') {
            return Err(Error::Validation {
                field: "input.delimiter".into(),
                message: format!("Cannot be {delimiter:?}"),
            });
        }

        Ok(())
    }
}
