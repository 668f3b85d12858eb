use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{catalog::CityCatalog, model::City, provider::brightsky::DEFAULT_BASE_URL};

/// Weather provider connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl ProviderConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), timeout_seconds: default_timeout_seconds() }
    }
}

/// HTTP server bind settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// log_level = "debug"
///
/// [provider]
/// base_url = "https://api.brightsky.dev"
///
/// [[cities]]
/// name = "Berlin"
/// lat = 52.52
/// lon = 13.405
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Fallback filter when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub provider: ProviderConfig,

    #[serde(default)]
    pub server: ServerConfig,

    /// Replaces the built-in city list when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cities: Option<Vec<City>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            provider: ProviderConfig::default(),
            server: ServerConfig::default(),
            cities: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        cfg.validate()?;
        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "realfeel", "realfeel")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// City catalog from the config, or the built-in one.
    pub fn catalog(&self) -> CityCatalog {
        match &self.cities {
            Some(cities) => CityCatalog::new(cities.clone()),
            None => CityCatalog::default(),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.provider.base_url.trim().is_empty() {
            return Err(anyhow!("provider.base_url must not be empty"));
        }
        if self.provider.timeout_seconds == 0 {
            return Err(anyhow!("provider.timeout_seconds must be greater than zero"));
        }

        for city in self.cities.iter().flatten() {
            city.coordinate()
                .with_context(|| format!("City '{}' has invalid coordinates", city.name))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("nope.toml")).unwrap();

        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.provider.base_url, "https://api.brightsky.dev");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.catalog().all().len(), 23);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
            [server]
            port = 8080

            [[cities]]
            name = "Potsdam"
            lat = 52.39
            lon = 13.06
            "#,
        )
        .unwrap();

        let cfg = Config::load_from(&path).unwrap();

        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.provider.timeout(), Duration::from_secs(10));
        assert_eq!(cfg.log_level, "info");

        let catalog = cfg.catalog();
        assert_eq!(catalog.all().len(), 1);
        assert_eq!(catalog.all()[0].name, "Potsdam");
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.provider.base_url = "http://localhost:9999".into();
        cfg.log_level = "debug".into();
        cfg.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), cfg);
    }

    #[test]
    fn rejects_invalid_city_coordinates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[[cities]]\nname = \"Nowhere\"\nlat = 123.0\nlon = 0.0\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Nowhere"));
    }

    #[test]
    fn rejects_zero_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[provider]\ntimeout_seconds = 0\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }
}
