//! Configuration merging and precedence handling.
//!
//! Scalars are replaced when the higher source sets them; nested sections
//! merge field by field.

use crate::config::loader::ConfigSource;
use crate::config::schema::{Config, InputConfig, LimitsConfig};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use seatplan::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Table), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Table));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.selection.is_some() {
            target.selection = source.selection;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_limits) = source.limits {
            target.limits = Some(match &target.limits {
                Some(target_limits) => Self::merge_limits(target_limits, source_limits),
                None => source_limits.clone(),
            });
        }

        if let Some(ref source_input) = source.input {
            target.input = Some(match &target.input {
                Some(target_input) => Self::merge_input(target_input, source_input),
                None => source_input.clone(),
            });
        }
    }

    fn merge_limits(target: &LimitsConfig, source: &LimitsConfig) -> LimitsConfig {
        LimitsConfig {
            max_flights: source.max_flights.or(target.max_flights),
            max_reservations: source.max_reservations.or(target.max_reservations),
        }
    }

    fn merge_input(target: &InputConfig, source: &InputConfig) -> InputConfig {
        InputConfig {
            delimiter: source.delimiter.or(target.delimiter),
            has_headers: source.has_headers.or(target.has_headers),
        }
    }
}
