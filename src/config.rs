//! # Application Configuration
//!
//! Paths and addresses for the CLI and server. Every field has a default, so
//! a config file only needs the values it changes:
//!
//! ```toml
//! logo_path = "assets/logo.png"
//! listen_addr = "0.0.0.0:8080"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::CardError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logo drawn at the top of every card
    pub logo_path: PathBuf,
    /// TrueType font for card text
    pub font_path: PathBuf,
    /// Where generated sheets are written
    pub output_dir: PathBuf,
    /// Where log files are written
    pub log_dir: PathBuf,
    /// trace, debug, info, warn or error
    pub log_level: String,
    /// Address the HTTP server binds to
    pub listen_addr: String,
    /// Base URL of the password service; `/simple` or `/strong` is appended
    pub password_service_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logo_path: PathBuf::from("static/logo.png"),
            font_path: PathBuf::from("static/arial.ttf"),
            output_dir: PathBuf::from("static/generated_cards"),
            log_dir: PathBuf::from("logs"),
            log_level: "info".to_string(),
            listen_addr: "127.0.0.1:5000".to_string(),
            password_service_url: "http://www.dinopass.com/password".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from a TOML file; missing keys keep their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CardError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| CardError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| CardError::Config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Load from `path` if given, otherwise use defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, CardError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cardpress.toml");
        std::fs::write(&path, "listen_addr = \"0.0.0.0:8080\"\nlog_level = \"debug\"\n").unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(
            config,
            AppConfig {
                listen_addr: "0.0.0.0:8080".to_string(),
                log_level: "debug".to_string(),
                ..AppConfig::default()
            }
        );
    }

    #[test]
    fn test_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "listen_addr = ").unwrap();
        assert!(matches!(AppConfig::from_file(&path), Err(CardError::Config(_))));
    }

    #[test]
    fn test_load_without_file() {
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }
}
