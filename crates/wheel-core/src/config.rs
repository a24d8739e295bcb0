//! Configuration loading and typed config structures for the prize wheel
//! service.
//!
//! The configuration lives in `wheel-config.yaml` in the working directory.
//! Every field has a default, so an absent file or an empty document yields a
//! fully usable configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use wheel_types::structs::{DEFAULT_GLOBAL_TIME_SET, DEFAULT_RESULT_DURATION};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is not usable.
    #[error("invalid config value: {message}")]
    Invalid {
        /// Which value was rejected and why.
        message: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level service configuration.
///
/// Mirrors the structure of `wheel-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WheelConfig {
    /// Listen address.
    #[serde(default)]
    pub server: ListenConfig,

    /// Static files, wheel images and display-text overrides.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Startup values for the game state.
    #[serde(default)]
    pub game: GameConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl WheelConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `WHEEL_HOST` overrides `server.host`
    /// - `WHEEL_PORT` overrides `server.port`
    /// - `WHEEL_STATIC_DIR` overrides `assets.static_dir`
    /// - `WHEEL_OVERRIDES_FILE` overrides `assets.overrides_file`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string.
    ///
    /// Environment overrides are not applied.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::Invalid`] if a value is out of range.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        // An empty document deserializes to unit, not to an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `WHEEL_PORT` is not a port number.
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// [`apply_env_overrides`](Self::apply_env_overrides) passes the process
    /// environment; tests pass a map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `WHEEL_PORT` is not a port number.
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("WHEEL_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("WHEEL_PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::Invalid {
                message: format!("WHEEL_PORT is not a port number ({port:?}): {e}"),
            })?;
        }
        if let Some(dir) = lookup("WHEEL_STATIC_DIR") {
            self.assets.static_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup("WHEEL_OVERRIDES_FILE") {
            self.assets.overrides_file = PathBuf::from(file);
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.game.result_duration == 0 {
            return Err(ConfigError::Invalid {
                message: "game.result_duration must be at least 1 second".to_owned(),
            });
        }
        if self.game.global_time_set == 0 {
            return Err(ConfigError::Invalid {
                message: "game.global_time_set must be at least 1 second".to_owned(),
            });
        }
        Ok(())
    }
}

/// Address the HTTP server binds to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListenConfig {
    /// Host or IP to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ListenConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Where the static files and wheel images live.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetsConfig {
    /// Root served under `/static`.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,

    /// Directory of wheel images, relative to `static_dir`.
    #[serde(default = "default_image_subdir")]
    pub image_subdir: String,

    /// JSON file mapping image file names to display text.
    #[serde(default = "default_overrides_file")]
    pub overrides_file: PathBuf,
}

impl AssetsConfig {
    /// Full path of the wheel image directory.
    pub fn image_dir(&self) -> PathBuf {
        self.static_dir.join(&self.image_subdir)
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            static_dir: default_static_dir(),
            image_subdir: default_image_subdir(),
            overrides_file: default_overrides_file(),
        }
    }
}

/// Startup values for the game state.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Seconds the result screen counts down after a spin.
    #[serde(default = "default_result_duration")]
    pub result_duration: u32,

    /// Seconds on the global countdown.
    #[serde(default = "default_global_time_set")]
    pub global_time_set: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            result_duration: default_result_duration(),
            global_time_set: default_global_time_set(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level used when `RUST_LOG` is unset (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

const fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_image_subdir() -> String {
    "wheel_images".to_owned()
}

fn default_overrides_file() -> PathBuf {
    PathBuf::from("wheel_data.json")
}

const fn default_result_duration() -> u32 {
    DEFAULT_RESULT_DURATION
}

const fn default_global_time_set() -> u32 {
    DEFAULT_GLOBAL_TIME_SET
}

fn default_log_level() -> String {
    "info".to_owned()
}
