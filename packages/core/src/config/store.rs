//! Configuration persistence
//!
//! Load/save for config.json. A missing file yields the defaults; an
//! invalid file is surfaced so typos never silently fall back.

use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use super::paths::get_config_path;
use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine the sitestack config directory")]
    NoConfigDir,

    #[error("failed to read config at {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("failed to write config at {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("config at {path} is not valid: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Load the config from its default location, or defaults when no file
/// exists yet.
pub fn load_config_or_default() -> Result<Config, ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    load_config_from(&path)
}

/// Load the config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        debug!("no config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Save the config to its default location, creating parent directories.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoConfigDir)?;
    let write_err = |source| ConfigError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let json = serde_json::to_string_pretty(config).expect("config serializes");
    fs::write(&path, json + "\n").map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn explicit_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"version": 1, "compose_program": "podman-compose"}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.compose_program, "podman-compose");
    }

    #[test]
    fn invalid_config_is_surfaced_not_defaulted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"version": 1, "unknown_knob": true}"#).unwrap();

        let error = load_config_from(&path).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }
}
