//! Unified path management for Jibun Timer files.
//!
//! All persisted state, configuration, and secrets live under the platform
//! config directory (e.g. `~/.config/jibun-timer/` on Linux).
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/jibun-timer/
//! ├── config.toml                    # Server configuration
//! ├── secret.json                    # Gemini API key
//! ├── jibun_timer_history.json       # Persisted history slice
//! ├── jibun_timer_ai_mode.json       # Persisted AI mode slice
//! ├── jibun_timer_personality.json   # Persisted persona slice (absent when unset)
//! └── jibun_timer_user_name.json     # Persisted user name slice (absent when unset)
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Config directory could not be determined.
    ConfigDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::ConfigDirNotFound => write!(f, "Cannot find config directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for Jibun Timer.
pub struct JibunPaths;

impl JibunPaths {
    /// Returns the application configuration directory.
    ///
    /// # Returns
    ///
    /// - `Ok(PathBuf)`: Path to config directory (e.g. `~/.config/jibun-timer/`)
    /// - `Err(PathError::ConfigDirNotFound)`: Could not determine directory
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join("jibun-timer"))
            .ok_or(PathError::ConfigDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the secrets file.
    ///
    /// # Security Note
    ///
    /// Ensure this file has appropriate permissions to prevent unauthorized
    /// access; it holds the Gemini API key.
    pub fn secret_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = JibunPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("jibun-timer"));
    }

    #[test]
    fn test_config_file_is_under_config_dir() {
        let config_file = JibunPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        assert!(config_file.starts_with(JibunPaths::config_dir().unwrap()));
    }

    #[test]
    fn test_secret_file_is_under_config_dir() {
        let secret_file = JibunPaths::secret_file().unwrap();
        assert!(secret_file.ends_with("secret.json"));
        assert!(secret_file.starts_with(JibunPaths::config_dir().unwrap()));
    }
}
