//! Configuration schema for sitestack
//!
//! Defines the structure and defaults for the config.json file.

use serde::{Deserialize, Serialize};

/// Main configuration structure for sitestack
///
/// Serialized to/from `~/.config/sitestack/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config file version for migrations
    pub version: u32,

    /// Program used to drive site stacks (default: "docker-compose")
    /// Multi-word values such as "docker compose" are supported.
    #[serde(default = "default_compose_program")]
    pub compose_program: String,
}

fn default_compose_program() -> String {
    "docker-compose".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: 1,
            compose_program: default_compose_program(),
        }
    }
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.compose_program, "docker-compose");
    }

    #[test]
    fn test_serialize_deserialize_roundtrip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let json = r#"{"version": 1}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.compose_program, "docker-compose");
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let json = r#"{"version": 1, "compose_programme": "docker compose"}"#;
        assert!(serde_json::from_str::<Config>(json).is_err());
    }

    #[test]
    fn test_compose_plugin_form_accepted() {
        let json = r#"{"version": 1, "compose_program": "docker compose"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.compose_program, "docker compose");
    }
}
