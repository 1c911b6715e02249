//! Configuration management using config.toml

use bookmybox_core::{BookMyBoxError, Result, DEFAULT_API_BASE_URL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "config.toml";

/// Overrides `api_base_url` when set (also read from `.env`)
pub const API_BASE_URL_ENV: &str = "BOOKMYBOX_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Host that relative facility image paths resolve against
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// JSON file holding the persisted session entries
    #[serde(default = "default_storage_path")]
    pub storage_path: PathBuf,

    /// Default tracing filter; `RUST_LOG` wins when set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("session.json")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            storage_path: default_storage_path(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load config.toml from the working directory, then apply env overrides
    pub fn load() -> Self {
        let mut config = Self::load_from(Path::new(CONFIG_PATH));
        config.apply_env_override(std::env::var(API_BASE_URL_ENV).ok());
        config
    }

    /// Load from `path`, creating it with defaults if missing or unreadable.
    /// Runs before logging is up, so problems go to stderr.
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => eprintln!("Error parsing {}: {}", path.display(), e),
                },
                Err(e) => eprintln!("Error reading {}: {}", path.display(), e),
            }
            return Config::default();
        }

        let config = Config::default();
        if let Err(e) = config.save_to(path) {
            eprintln!("Could not write default {}: {}", path.display(), e);
        }
        config
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(Path::new(CONFIG_PATH))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| BookMyBoxError::Config(e.to_string()))?;
        fs::write(path, content).map_err(|e| BookMyBoxError::Config(e.to_string()))?;
        Ok(())
    }

    fn apply_env_override(&mut self, api_base_url: Option<String>) {
        if let Some(url) = api_base_url.filter(|u| !u.trim().is_empty()) {
            self.api_base_url = url.trim().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load_from(&path);
        assert_eq!(config, Config::default());
        assert!(path.exists());
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "log_level = \"debug\"\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.api_base_url, "http://localhost:8000");
        assert_eq!(config.storage_path, PathBuf::from("session.json"));
    }

    #[test]
    fn unparseable_file_falls_back_without_overwriting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_base_url = [").unwrap();

        assert_eq!(Config::load_from(&path), Config::default());
        assert_eq!(fs::read_to_string(&path).unwrap(), "api_base_url = [");
    }

    #[test]
    fn env_override_replaces_api_base() {
        let mut config = Config::default();
        config.apply_env_override(Some(" https://api.bookmybox.in ".into()));
        assert_eq!(config.api_base_url, "https://api.bookmybox.in");

        config.apply_env_override(Some("".into()));
        assert_eq!(config.api_base_url, "https://api.bookmybox.in");
    }
}
