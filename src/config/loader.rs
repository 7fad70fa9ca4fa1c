use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use thiserror::Error;
use tracing::debug;

use crate::config::builder::FromYaml;
use crate::config::paths::{EXAMPLE_CONFIG_FILE, Paths};
use crate::config::schema::HeraldConfig;
use crate::config::validation::validate_config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Config file not found: {path}\nCopy {EXAMPLE_CONFIG_FILE} to that location and edit it to get started."
    )]
    Missing { path: PathBuf },

    #[error("Failed to read config file {path}: {source}")]
    Read { path: PathBuf, source: io::Error },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration:\n{}", .violations.join("\n"))]
    Invalid { violations: Vec<String> },
}

/// Reads and decodes the config file into a fully-populated [`HeraldConfig`].
///
/// `path` of `None` resolves the conventional location (see [`Paths`]). An
/// empty or null document yields the defaults; YAML syntax errors are fatal.
/// No semantic checking happens here.
pub fn load_config(path: Option<&Path>) -> Result<HeraldConfig, ConfigError> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(Paths::config_file);

    if !path.exists() {
        return Err(ConfigError::Missing { path });
    }

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let document: Value = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.clone(),
        source,
    })?;

    debug!(path = %path.display(), "Loaded configuration");
    Ok(HeraldConfig::from_yaml(Some(&document)))
}

/// Loads the config and enforces every semantic rule.
///
/// The single entry point the rest of the application should use. Fails once
/// with the full violation list rather than one problem per run.
pub fn load_and_validate_config(path: Option<&Path>) -> Result<HeraldConfig, ConfigError> {
    let config = load_config(path)?;
    let violations = validate_config(&config);
    if violations.is_empty() {
        Ok(config)
    } else {
        Err(ConfigError::Invalid { violations })
    }
}
