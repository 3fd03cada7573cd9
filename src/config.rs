//! Configuration module for Beacon.
//!
//! Loads configuration from optional files and environment variables.

use config::{Config as ConfigLoader, ConfigError, Environment, File};
use serde::{Deserialize, Deserializer};

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to bind.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Development mode: verbose logging. Enabled only by a
    /// case-insensitive "true".
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub debug: bool,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5001
}

/// Accepts a bool or any string; only "true" (any casing) enables.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Text(s) => s.eq_ignore_ascii_case("true"),
    })
}

impl Config {
    /// Load configuration from files and environment.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (HOST, PORT, DEBUG)
    /// 2. config/local.yaml (if exists)
    /// 3. config/default.yaml
    pub fn load() -> Result<Self, ConfigError> {
        let config = ConfigLoader::builder()
            // Start with default config
            .add_source(File::with_name("config/default").required(false))
            // Layer on local overrides
            .add_source(File::with_name("config/local").required(false))
            // Layer on environment variables
            .add_source(Environment::default().try_parsing(true))
            .build()?;

        config.try_deserialize()
    }

    /// Socket address string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            debug: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5001);
        assert!(!config.debug);
    }

    #[test]
    fn test_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:5001");
    }

    #[test]
    fn test_debug_flag_parsing() {
        let parse = |json: &str| -> Config { serde_json::from_str(json).unwrap() };

        assert!(parse(r#"{"debug": "true"}"#).debug);
        assert!(parse(r#"{"debug": "TRUE"}"#).debug);
        assert!(parse(r#"{"debug": "TrUe"}"#).debug);
        assert!(parse(r#"{"debug": true}"#).debug);

        assert!(!parse(r#"{"debug": "yes"}"#).debug);
        assert!(!parse(r#"{"debug": "1"}"#).debug);
        assert!(!parse(r#"{"debug": "false"}"#).debug);
        assert!(!parse(r#"{}"#).debug);
    }
}
