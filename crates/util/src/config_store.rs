//! Loading and saving list configuration files.
//!
//! A list configuration lives in a JSON (or YAML) file, by default
//! `~/.config/relist/list.json` on most platforms. The location can be
//! overridden with `RELIST_CONFIG_PATH`. A missing file is not an error: the
//! defaults are returned and flags supplied on the command line fill in the
//! rest.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use relist_types::ListConfig;
use thiserror::Error;
use tracing::{debug, warn};

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "RELIST_CONFIG_PATH";

/// Default filename for the list configuration.
pub const CONFIG_FILE_NAME: &str = "list.json";

/// Error surfaced when reading or writing a configuration file fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON config at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid YAML config at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Returns the path used when no explicit `--config` is given.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("relist")
        .join(CONFIG_FILE_NAME)
}

/// Loads the configuration from [`default_config_path`].
pub fn load_config() -> Result<ListConfig, ConfigError> {
    load_config_from_path(&default_config_path())
}

/// Loads a configuration file, returning defaults when it does not exist.
///
/// Files ending in `.yaml` or `.yml` are parsed as YAML; everything else as JSON.
pub fn load_config_from_path(path: &Path) -> Result<ListConfig, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "config file not found; using defaults");
            return Ok(ListConfig::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        warn!(path = %path.display(), "config file is empty; using defaults");
        return Ok(ListConfig::default());
    }

    let config = if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })?
    } else {
        serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?
    };
    debug!(path = %path.display(), "loaded list config");
    Ok(config)
}

/// Writes a configuration as pretty JSON, creating parent directories.
pub fn save_config_to_path(config: &ListConfig, path: &Path) -> Result<(), ConfigError> {
    let io_error = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    let content = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(io_error)
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"))
}
