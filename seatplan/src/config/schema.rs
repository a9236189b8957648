//! Configuration schema definitions.
//!
//! This module defines the configuration structure for seatplan: the
//! selection strategy, input limits, record file format, and output format.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::{LookaheadSelector, SelectionStrategy, TightestFitSelector};

/// Complete configuration structure.
///
/// Every field is optional so that partial files can be layered; the
/// accessor methods resolve unset fields to their defaults.
///
/// # Examples
///
/// ```
/// use seatplan::config::{Config, SelectionKind};
///
/// let config = Config {
///     selection: Some(SelectionKind::TightestFit),
///     ..Default::default()
/// };
/// assert_eq!(config.selection(), SelectionKind::TightestFit);
/// assert_eq!(config.max_flights(), 256);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Itinerary selection strategy.
    pub selection: Option<SelectionKind>,

    /// Caps on input size.
    pub limits: Option<LimitsConfig>,

    /// Record file format.
    pub input: Option<InputConfig>,

    /// Output format for resolutions.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The configured selection strategy, or lookahead.
    #[must_use]
    pub fn selection(&self) -> SelectionKind {
        self.selection.unwrap_or_default()
    }

    /// The configured output format, or JSON.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// Maximum number of flights accepted per run.
    #[must_use]
    pub fn max_flights(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|l| l.max_flights)
            .unwrap_or(LimitsConfig::DEFAULT_MAX_FLIGHTS)
    }

    /// Maximum number of reservations accepted per run.
    #[must_use]
    pub fn max_reservations(&self) -> usize {
        self.limits
            .as_ref()
            .and_then(|l| l.max_reservations)
            .unwrap_or(LimitsConfig::DEFAULT_MAX_RESERVATIONS)
    }
}

/// Input size limits.
///
/// Search is exponential in the worst case, so runs refuse inputs above
/// these counts.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LimitsConfig {
    /// Maximum number of flights.
    pub max_flights: Option<usize>,

    /// Maximum number of reservations.
    pub max_reservations: Option<usize>,
}

impl LimitsConfig {
    /// Flight limit when none is configured.
    pub const DEFAULT_MAX_FLIGHTS: usize = 256;

    /// Reservation limit when none is configured.
    pub const DEFAULT_MAX_RESERVATIONS: usize = 4096;
}

/// Record file format.
///
/// # Examples
///
/// ```
/// use seatplan::config::InputConfig;
///
/// let input: InputConfig = serde_yaml::from_str("delimiter: ';'\nhas_headers: true\n").unwrap();
/// assert_eq!(input.delimiter, Some(';'));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct InputConfig {
    /// Field delimiter; must be a single ASCII character.
    pub delimiter: Option<char>,

    /// Whether the first row of each file is a header.
    pub has_headers: Option<bool>,
}

/// Which itinerary selection strategy a run uses.
///
/// # Examples
///
/// ```
/// use seatplan::config::SelectionKind;
///
/// let kind: SelectionKind = "tightest-fit".parse().unwrap();
/// assert_eq!(kind.strategy().name(), "tightest-fit");
/// assert_eq!(SelectionKind::default().to_string(), "lookahead");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionKind {
    /// One-ply lookahead with tightest-fit tie-break.
    #[default]
    Lookahead,
    /// Least aggregate capacity only.
    TightestFit,
}

impl SelectionKind {
    /// Builds the strategy this kind names.
    #[must_use]
    pub fn strategy(self) -> Box<dyn SelectionStrategy> {
        match self {
            Self::Lookahead => Box::new(LookaheadSelector),
            Self::TightestFit => Box::new(TightestFitSelector),
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lookahead => write!(f, "lookahead"),
            Self::TightestFit => write!(f, "tightest-fit"),
        }
    }
}

impl FromStr for SelectionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "lookahead" => Ok(Self::Lookahead),
            "tightest-fit" => Ok(Self::TightestFit),
            _ => Err(format!(
                "invalid selection strategy: {s} (expected lookahead or tightest-fit)"
            )),
        }
    }
}

/// Output format for resolutions.
///
/// # Examples
///
/// ```
/// use seatplan::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON document with the mapping and final flights.
    #[default]
    Json,
    /// Human-readable tab-separated table.
    Table,
    /// One CSV row per reservation.
    Csv,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "csv" => Ok(Self::Csv),
            _ => Err(format!("invalid output format: {s} (expected json, table or csv)")),
        }
    }
}
