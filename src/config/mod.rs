#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::utils::error::{InventoryError, Result};
use crate::utils::validation::{validate_host, validate_path, Validate};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_QUESTIONS_PATH: &str = "data/questions.txt";

/// Resolved runtime settings for the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub questions_path: String,
    pub strict_answers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            questions_path: DEFAULT_QUESTIONS_PATH.to_string(),
            strict_answers: false,
        }
    }
}

impl ServerConfig {
    /// Overlays `PORT`, `HOST`, `QUESTIONS_PATH` and `STRICT_ANSWERS` as
    /// returned by `lookup`.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT").filter(|v| !v.is_empty()) {
            self.port = parse_port("PORT", &port)?;
        }
        if let Some(host) = lookup("HOST").filter(|v| !v.is_empty()) {
            self.host = host;
        }
        if let Some(path) = lookup("QUESTIONS_PATH").filter(|v| !v.is_empty()) {
            self.questions_path = path;
        }
        if let Some(strict) = lookup("STRICT_ANSWERS").filter(|v| !v.is_empty()) {
            self.strict_answers = parse_flag("STRICT_ANSWERS", &strict)?;
        }
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        if self.host.contains(':') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_host("host", &self.host)?;
        validate_path("questions_path", &self.questions_path)?;
        Ok(())
    }
}

fn parse_port(field: &str, value: &str) -> Result<u16> {
    value
        .trim()
        .parse()
        .map_err(|e| InventoryError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: format!("Port must be an integer between 0 and 65535: {}", e),
        })
}

fn parse_flag(field: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(InventoryError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: "Expected true/false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(!config.strict_answers);
        assert_eq!(config.questions_path, "data/questions.txt");
    }

    #[test]
    fn test_default_questions_path_is_shipped_catalog() {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(DEFAULT_QUESTIONS_PATH);
        assert!(path.is_file(), "{} should exist", path.display());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServerConfig::default();
        config
            .apply_env_from(env(&[
                ("PORT", "3000"),
                ("QUESTIONS_PATH", "/srv/questions.txt"),
                ("STRICT_ANSWERS", "yes"),
            ]))
            .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.questions_path, "/srv/questions.txt");
        assert!(config.strict_answers);
    }

    #[test]
    fn test_empty_port_keeps_default() {
        let mut config = ServerConfig::default();
        config.apply_env_from(env(&[("PORT", "")])).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = ServerConfig::default();
        assert!(config.apply_env_from(env(&[("PORT", "http")])).is_err());
        assert!(config.apply_env_from(env(&[("PORT", "70000")])).is_err());
        assert!(config
            .apply_env_from(env(&[("STRICT_ANSWERS", "maybe")]))
            .is_err());
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = ServerConfig {
            host: "::1".to_string(),
            ..ServerConfig::default()
        };
        assert_eq!(config.bind_address(), "[::1]:8080");
    }

    #[test]
    fn test_validation() {
        assert!(ServerConfig::default().validate().is_ok());

        let config = ServerConfig {
            questions_path: String::new(),
            ..ServerConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
