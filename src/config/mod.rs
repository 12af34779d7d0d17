//! Configuration management module.
//!
//! This module handles loading, saving, and validating application
//! configuration: where the catalogue lives, how the layout breaks, the theme
//! and the log level.

mod error;

pub use error::ConfigError;

use crate::error::AppResult;
use crate::layout::Breakpoints;
use crate::ui::Theme;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/moviebuffs-tui";

/// Oversees management of configuration file.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub movies_path: String,
    pub request_timeout_secs: u64,
    pub breakpoints: Breakpoints,
    pub theme_name: String,
    pub log_level: String,
    file_path: Option<PathBuf>,
}

/// Define specification for configuration file.
///
#[derive(Serialize, Deserialize)]
struct FileSpec {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_movies_path")]
    pub movies_path: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    #[serde(default)]
    pub breakpoints: Breakpoints,
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_movies_path() -> String {
    "photos".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

fn default_theme_name() -> String {
    "rose-pine-dawn".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Return a new instance holding the defaults.
    ///
    pub fn new() -> Config {
        Config {
            base_url: default_base_url(),
            movies_path: default_movies_path(),
            request_timeout_secs: default_request_timeout_secs(),
            breakpoints: Breakpoints::default(),
            theme_name: default_theme_name(),
            log_level: default_log_level(),
            file_path: None,
        }
    }

    /// Load the configuration from the default directory or the custom one
    /// if provided. A missing file is created holding the defaults.
    ///
    pub fn load(&mut self, custom_path: Option<&str>) -> AppResult<()> {
        // Use default path unless custom path provided
        let dir_path = match custom_path {
            Some(path) => Path::new(&path).to_path_buf(),
            None => Config::default_path()?,
        };

        if !dir_path.exists() {
            fs::create_dir_all(&dir_path).map_err(|e| ConfigError::CreateDirectoryFailed {
                path: dir_path.clone(),
                source: e,
            })?;
        }

        let file_path = dir_path.join(Path::new(FILE_NAME));
        self.file_path = Some(file_path.clone());

        if file_path.exists() {
            let contents = fs::read_to_string(&file_path).map_err(|e| ConfigError::ReadFailed {
                path: file_path.clone(),
                source: e,
            })?;
            let data: FileSpec =
                serde_yaml::from_str(&contents).map_err(|e| ConfigError::Malformed {
                    path: file_path.clone(),
                    source: e,
                })?;
            self.base_url = data.base_url;
            self.movies_path = data.movies_path;
            self.request_timeout_secs = data.request_timeout_secs;
            self.breakpoints = data.breakpoints;
            self.theme_name = data.theme_name;
            self.log_level = data.log_level;
        } else {
            self.save()?;
        }

        self.validate()?;
        Ok(())
    }

    /// Save the current configuration to disk.
    ///
    pub fn save(&self) -> AppResult<()> {
        let file_path = self.file_path.as_ref().ok_or(ConfigError::FilePathNotSet)?;
        let data = FileSpec {
            base_url: self.base_url.clone(),
            movies_path: self.movies_path.clone(),
            request_timeout_secs: self.request_timeout_secs,
            breakpoints: self.breakpoints,
            theme_name: self.theme_name.clone(),
            log_level: self.log_level.clone(),
        };
        let content = serde_yaml::to_string(&data).map_err(ConfigError::from)?;

        if let Some(parent) = file_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| ConfigError::CreateDirectoryFailed {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let mut file = fs::File::create(file_path).map_err(|e| ConfigError::WriteFailed {
            path: file_path.clone(),
            source: e,
        })?;
        write!(file, "{}", content)
            .and_then(|_| file.flush())
            .map_err(|e| ConfigError::WriteFailed {
                path: file_path.clone(),
                source: e,
            })?;
        Ok(())
    }

    /// Check values that deserialize fine but cannot be used.
    ///
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "base_url".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "request_timeout_secs".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if !self.breakpoints.is_ordered() {
            return Err(ConfigError::InvalidValue {
                field: "breakpoints".to_string(),
                message: format!(
                    "medium ({}) must not exceed expanded ({})",
                    self.breakpoints.medium, self.breakpoints.expanded
                ),
            });
        }
        self.log_level_filter()?;
        Ok(())
    }

    /// Returns the configured log level.
    ///
    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidValue {
                field: "log_level".to_string(),
                message: format!("unknown level '{}'", self.log_level),
            })
    }

    /// Returns the configured theme, or the default one for unknown names.
    ///
    pub fn theme(&self) -> Theme {
        Theme::from_name(&self.theme_name).unwrap_or_else(|| {
            log::warn!(
                "Unknown theme '{}', falling back to default (available: {}).",
                self.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        })
    }

    /// Returns the timeout applied to every request.
    ///
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Returns the path of the loaded configuration file, if any.
    ///
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Returns the path buffer for the default path to the configuration file
    /// or an error if the home directory could not be found.
    ///
    fn default_path() -> AppResult<PathBuf> {
        match dirs::home_dir() {
            Some(home) => Ok(home.join(Path::new(DEFAULT_DIRECTORY_PATH))),
            None => Err(ConfigError::HomeDirectoryNotFound.into()),
        }
    }
}
