//! Configuration builder.
//!
//! Assembles the final [`Config`] from files, the environment, and
//! programmatic overrides, then validates it.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::env;
use std::path::{Path, PathBuf};

/// Builder for the effective configuration.
///
/// # Examples
///
/// ```
/// use seatplan::config::{Config, ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_format: Some(OutputFormat::Table),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.output_format(), OutputFormat::Table);
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that loads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the project file search starts from (defaults to the
    /// current directory).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` (defaults to `~/.seatplan`).
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// An explicit configuration file, layered above discovered files.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Programmatic overrides, layered above everything else.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read the user or project files. An explicit file set with
    /// [`Self::with_config_file`] is still read.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `SEATPLAN_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Loads, merges and validates.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, the explicit
    /// file is missing, an environment variable is invalid, or the merged
    /// result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();

        if !self.skip_files {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;
        }

        if let Some(ref path) = self.config_file {
            sources.push(ConfigLoader::load_explicit(path)?);
        }

        for source in &sources {
            log::debug!(
                "config source {} (precedence {})",
                source.path.display(),
                source.precedence
            );
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
