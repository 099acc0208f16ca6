use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

use crate::provider::openweather::OpenWeatherProvider;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

/// Top-level configuration stored on disk.
///
/// Loaded once at startup and treated as read-only for the process lifetime;
/// the credential is injected into the provider at construction.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// OpenWeather API key. The `OPENWEATHER_API_KEY` environment variable
    /// takes precedence over this value.
    pub api_key: Option<String>,

    /// Endpoint override; defaults to the public OpenWeather API.
    pub base_url: Option<String>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weatherboard", "weatherboard")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    /// Effective API key: environment variable first, then the stored value.
    pub fn effective_api_key(&self) -> Option<String> {
        env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()).or_else(|| self.api_key.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.effective_api_key().is_some()
    }
}

/// Construct the OpenWeather provider from config.
pub fn provider_from_config(config: &Config) -> Result<OpenWeatherProvider> {
    let api_key = config.effective_api_key().ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: run `weatherboard configure` and enter your OpenWeather API key,\n\
             or set the {API_KEY_ENV} environment variable."
        )
    })?;

    let provider = match &config.base_url {
        Some(base_url) => OpenWeatherProvider::with_base_url(api_key, base_url.clone()),
        None => OpenWeatherProvider::new(api_key),
    };

    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_api_key_is_used_when_env_is_unset() {
        if env::var(API_KEY_ENV).is_ok() {
            // Environment carries a real key; it would shadow the stored one.
            return;
        }

        let mut cfg = Config::default();
        assert!(!cfg.is_configured());

        cfg.set_api_key("KEY".to_string());
        assert_eq!(cfg.effective_api_key().as_deref(), Some("KEY"));
        assert!(cfg.is_configured());
    }

    #[test]
    fn provider_from_config_errors_when_missing_api_key() {
        let cfg = Config { api_key: None, base_url: None };
        if cfg.effective_api_key().is_some() {
            // Environment carries a real key; nothing to assert here.
            return;
        }

        let err = provider_from_config(&cfg).unwrap_err();
        assert!(err.to_string().contains("No API key configured"));
    }

    #[test]
    fn provider_from_config_works_when_key_is_set() {
        let mut cfg = Config::default();
        cfg.set_api_key("KEY".to_string());

        assert!(provider_from_config(&cfg).is_ok());
    }
}
