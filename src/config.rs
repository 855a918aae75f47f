//! Settings for the `arbiter` command-line tool, read from an optional YAML file
//
//  This Source Code Form is subject to the terms of the Mozilla Public
//  License, v. 2.0. If a copy of the MPL was not distributed with this
//  file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
////////////////////////////////////////////////////////////////////////////////////////////////////
use std::fmt;
use std::fs::read_to_string;
use std::io;
use std::path::{Path, PathBuf};
use log::LevelFilter;
use serde::Deserialize;
use crate::rules::START_FEN;

/// Name of the directory under the home directory that holds the config file
pub const APP_DIR: &str = ".arbiter";

/// Name of the config file within [`APP_DIR`](constant.APP_DIR.html)
pub const CONFIG_FILE: &str = "config.yaml";

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Settings that command-line flags fall back on.
///
/// Every field is optional in the file:
///
/// ```yaml
/// log: true
/// log_file: /tmp/arbiter.log
/// log_level: debug
/// start_fen: "4k3/8/8/8/8/8/8/4K2R w K - 0 1"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Turns on logging
    pub log: bool,
    /// File to log to
    pub log_file: PathBuf,
    /// One of `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
    /// Position used when a command is not given one
    pub start_fen: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log: false,
            log_file: PathBuf::from("arbiter.log"),
            log_level: "info".to_owned(),
            start_fen: START_FEN.to_owned(),
        }
    }
}

impl Config {
    /// Returns the default config file location, `~/.arbiter/config.yaml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Reads the config from `path`, or from the default location if `path` is `None`.
    ///
    /// A missing file at the default location gives the default config; a missing file that was
    /// asked for explicitly is an error.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Config::read(path),
            None => match Config::default_path() {
                Some(ref path) if path.is_file() => Config::read(path),
                _ => Ok(Config::default()),
            },
        }
    }

    fn read(path: &Path) -> Result<Config, ConfigError> {
        let s = read_to_string(path)
            .map_err(|err| ConfigError::Io(path.to_owned(), err))?;
        Config::from_yaml(&s)
    }

    /// Parses a config from YAML text. An empty document gives the default config.
    pub fn from_yaml(s: &str) -> Result<Config, ConfigError> {
        if s.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_yaml::from_str(s)?)
    }

    /// Converts `log_level` to a filter
    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        parse_level(&self.log_level)
    }
}

/// Converts a log level name to a filter
pub fn parse_level(level: &str) -> Result<LevelFilter, ConfigError> {
    match level {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(ConfigError::LogLevel(level.to_owned())),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////
/// Error loading the configuration
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read
    Io(PathBuf, io::Error),
    /// The file is not valid config YAML
    Yaml(serde_yaml::Error),
    /// Unknown log level name
    LogLevel(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(path, err) => write!(f, "{}: {}", path.display(), err),
            ConfigError::Yaml(err) => write!(f, "invalid config: {}", err),
            ConfigError::LogLevel(level) => write!(f, "{}: invalid log level", level),
        }
    }
}

impl std::error::Error for ConfigError { }

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::Yaml(err)
    }
}
