//! Gemini credential loading.
//!
//! The API key is read from the `GEMINI_API_KEY` environment variable or,
//! failing that, from `secret.json` in the config directory. A missing key is
//! not an error here: the server degrades to a configuration error response
//! per request, and the client to the fixed fallback advice text.

use std::fs;

use serde::{Deserialize, Serialize};

use jibun_core::error::Result;

use crate::paths::JibunPaths;

/// Environment variable that overrides `secret.json`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Gemini credentials and model override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key for the generative-language API
    pub api_key: String,
    /// Optional model override, defaults to the client's built-in model
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
}

/// Contents of `secret.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiConfig>,
}

/// Loads the Gemini configuration, environment first, then `secret.json`.
///
/// Returns `Ok(None)` when no credential is configured anywhere. Error
/// messages never contain the key material.
pub fn load_gemini_config() -> Result<Option<GeminiConfig>> {
    if let Ok(key) = std::env::var(GEMINI_API_KEY_ENV) {
        if !key.trim().is_empty() {
            return Ok(Some(GeminiConfig {
                api_key: key,
                model_name: None,
            }));
        }
    }

    let path = match JibunPaths::secret_file() {
        Ok(path) => path,
        Err(_) => return Ok(None),
    };
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: SecretConfig = serde_json::from_str(&content)?;
    Ok(config.gemini.filter(|g| !g.api_key.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_secret_config_parses_gemini_section() {
        let json = r#"{ "gemini": { "api_key": "k", "model_name": "gemini-2.5-flash" } }"#;
        let config: SecretConfig = serde_json::from_str(json).unwrap();
        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "k");
        assert_eq!(gemini.model_name.as_deref(), Some("gemini-2.5-flash"));
    }

    #[test]
    fn test_secret_config_tolerates_missing_section() {
        let config: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(config.gemini.is_none());
    }
}
