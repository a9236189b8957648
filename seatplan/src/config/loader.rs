//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading seatplan configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the project configuration file.
pub const PROJECT_CONFIG_FILE: &str = "seatplan.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use seatplan::config::ConfigSource;
/// use std::path::PathBuf;
///
/// // User config has lowest precedence
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.seatplan/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use seatplan::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.seatplan/config.yaml` (precedence 1)
    /// 2. The nearest `seatplan.yaml` walking up from `working_dir` (precedence 2)
    ///
    /// The `user_dir` parameter overrides where the user config is loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        if let Some(project_config) = Self::discover_project_config(working_dir)? {
            sources.push(project_config);
        }

        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load an explicitly named configuration file (precedence 3).
    ///
    /// Unlike discovered files, a missing explicit file is an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist, or an
    /// error if it cannot be read or parsed.
    pub fn load_explicit(path: &Path) -> Result<ConfigSource> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        Ok(ConfigSource {
            path: path.to_path_buf(),
            precedence: 3,
            config: Self::load_file(path)?,
        })
    }

    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => match Self::user_config_path() {
                Some(path) => path,
                None => {
                    log::debug!("no home directory, skipping user config");
                    return Ok(None);
                }
            },
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Find the nearest project configuration by walking up directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the discovered file cannot be read or parsed.
    pub fn discover_project_config(start_dir: &Path) -> Result<Option<ConfigSource>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let candidate = current.join(PROJECT_CONFIG_FILE);
            if candidate.exists() {
                let config = Self::load_file(&candidate)?;
                return Ok(Some(ConfigSource {
                    path: candidate,
                    precedence: 2,
                    config,
                }));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read and
    /// [`Error::Configuration`] if it is not a valid configuration document.
    pub fn load_file(path: &Path) -> Result<Config> {
        log::debug!("loading configuration from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&contents)?)
    }

    /// Default user configuration path, `~/.seatplan/config.yaml`.
    #[must_use]
    pub fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".seatplan").join("config.yaml"))
    }
}
