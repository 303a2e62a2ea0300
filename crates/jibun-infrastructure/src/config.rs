//! Server configuration loading.
//!
//! Reads `config.toml` from the config directory; every field has a default
//! so an absent or partial file is fine.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use jibun_core::error::Result;

use crate::paths::JibunPaths;

fn default_listen_addr() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

/// Configuration for the proxy server binary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the proxy listens on. Localhost only by default.
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    /// Gemini model used when `secret.json` does not override it.
    #[serde(default = "default_model")]
    pub model: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            model: default_model(),
        }
    }
}

impl ServerConfig {
    /// Loads the configuration from the default `config.toml` location.
    ///
    /// A missing file yields the defaults; a malformed file is an error.
    pub fn load_default() -> Result<Self> {
        match JibunPaths::config_file() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Loads the configuration from `path`, defaulting when absent.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ServerConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.listen_addr, "127.0.0.1:3000");
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "listen_addr = \"0.0.0.0:8080\"\n").unwrap();

        let config = ServerConfig::load_from(&path).unwrap();
        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.model, "gemini-2.5-flash");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "listen_addr = [oops\n").unwrap();
        assert!(ServerConfig::load_from(&path).is_err());
    }
}
