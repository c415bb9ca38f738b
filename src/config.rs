use crate::game::Theme;
use ratatui::style::Style;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    /// Where & how much to log
    pub(crate) logging: LogConfig,

    /// Overrides for the styles used to draw the board
    pub(crate) styles: StyleConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("gridsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's contents
    /// could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(try_from = "RawLogConfig")]
pub(crate) struct LogConfig {
    /// File to append log messages to.  If this is not set, nothing is
    /// logged.
    pub(crate) file: Option<PathBuf>,

    /// Filter directive (as for `RUST_LOG`) used when `RUST_LOG` is not set
    pub(crate) level: Option<String>,
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields)]
struct RawLogConfig {
    file: Option<String>,
    level: Option<String>,
}

impl TryFrom<RawLogConfig> for LogConfig {
    type Error = std::io::Error;

    fn try_from(value: RawLogConfig) -> Result<LogConfig, std::io::Error> {
        Ok(LogConfig {
            file: value.file.map(expanduser::expanduser).transpose()?,
            level: value.level,
        })
    }
}

/// Style strings like `"bold green"` or `"red on white"`, parsed as the file
/// is read; unset entries keep their defaults
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct StyleConfig {
    snake_head: Option<parse_style::Style>,
    snake_body: Option<parse_style::Style>,
    food: Option<parse_style::Style>,
    collision: Option<parse_style::Style>,
}

impl StyleConfig {
    /// Combine the configured styles with the defaults
    pub(crate) fn theme(&self) -> Theme {
        let default = Theme::default();
        Theme {
            snake_head: self.snake_head.map_or(default.snake_head, Style::from),
            snake_body: self.snake_body.map_or(default.snake_body, Style::from),
            food: self.food.map_or(default.food, Style::from),
            collision: self.collision.map_or(default.collision, Style::from),
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}
