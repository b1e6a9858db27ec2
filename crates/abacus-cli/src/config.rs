use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::level_filters::LevelFilter;
use tracing::{info, warn};

const CONFIG_PATH_ENV: &str = "ABACUS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "abacus.toml";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Default level when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter> {
        self.level
            .parse::<LevelFilter>()
            .with_context(|| format!("Invalid log level '{}'", self.level))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ReplConfig {
    #[serde(default = "default_prompt")]
    pub prompt: String,
    /// Print the welcome line when the shell starts
    #[serde(default = "default_true")]
    pub banner: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self { prompt: default_prompt(), banner: true }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct AbacusConfig {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub repl: ReplConfig,
}

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    /// The file was absent, so built-in defaults apply
    Defaults(PathBuf),
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Defaults(path) => write!(f, "defaults ({} not found)", path.display()),
        }
    }
}

impl ConfigSource {
    /// Log where the configuration came from. Call once the subscriber is
    /// installed, since loading happens before logging is configured.
    pub fn report(&self) {
        match self {
            ConfigSource::File(path) => {
                info!(path = %path.display(), "Configuration loaded");
            }
            ConfigSource::Defaults(path) => {
                warn!(path = %path.display(), "Configuration file not found, using defaults");
            }
        }
    }
}

impl AbacusConfig {
    /// Load configuration from `path`, falling back to `ABACUS_CONFIG_PATH`
    /// and then `abacus.toml`. A missing file yields the defaults; an
    /// unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<(Self, ConfigSource)> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => std::env::var(CONFIG_PATH_ENV)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH)),
        };

        match fs::read_to_string(&path) {
            Ok(contents) => {
                let config = Self::from_toml_str(&contents)
                    .with_context(|| format!("Failed to parse '{}'", path.display()))?;
                Ok((config, ConfigSource::File(path)))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Ok((Self::default(), ConfigSource::Defaults(path)))
            }
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read '{}'", path.display()))
            }
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).context("Invalid configuration")?;
        config.logging.level_filter()?;
        Ok(config)
    }

    /// Apply a command-line log level override
    pub fn with_log_level(mut self, level: Option<String>) -> Self {
        if let Some(level) = level {
            self.logging.level = level;
        }
        self
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
fn default_prompt() -> String {
    ">> ".to_string()
}
fn default_true() -> bool {
    true
}
