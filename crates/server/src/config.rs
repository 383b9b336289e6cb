// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Configuration file loading.

use clearingway_domain::Config;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// The file path.
        path: PathBuf,
        /// The underlying error.
        source: std::io::Error,
    },
    /// The file is not valid TOML for the configuration shape.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parses configuration from TOML text.
///
/// # Errors
///
/// Returns `ConfigError::Parse` if the text is not valid configuration.
pub fn parse_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}

/// Reads and parses the configuration file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let contents: String = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&contents)
}

/// Reads and parses the configuration file without blocking the runtime.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_config_async(path: &Path) -> Result<Config, ConfigError> {
    let contents: String =
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
    parse_config(&contents)
}
