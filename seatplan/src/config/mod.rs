//! Configuration system for seatplan.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project `seatplan.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`SEATPLAN_*`)
//! 3. Explicit file (via `ConfigBuilder::with_config_file`)
//! 4. Project config (nearest `seatplan.yaml`)
//! 5. User config (`~/.seatplan/config.yaml`)
//! 6. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use seatplan::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("selection: {}", config.selection());
//! ```
//!
//! Programmatic configuration:
//!
//! ```
//! use seatplan::config::{Config, ConfigBuilder, LimitsConfig};
//!
//! let custom = Config {
//!     limits: Some(LimitsConfig {
//!         max_flights: Some(64),
//!         max_reservations: None,
//!     }),
//!     ..Default::default()
//! };
//!
//! let config = ConfigBuilder::new()
//!     .skip_files()
//!     .skip_env()
//!     .with_config(custom)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_flights(), 64);
//! assert_eq!(config.max_reservations(), 4096);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(test)]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, InputConfig, LimitsConfig, OutputFormat, SelectionKind};
pub use validator::ConfigValidator;
