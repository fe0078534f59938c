//! Configuration management for deliverycheck

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::OutputFormat;
use crate::client::models::Credential;
use crate::client::syrve::DEFAULT_TIMEOUT_SECS;
use crate::error::{ConfigError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Syrve API login
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_login: Option<String>,

    /// Custom API host (defaults to the EU cloud)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Request timeout in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// User preferences
    #[serde(default)]
    pub preferences: Preferences,
}

/// User preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    /// Default output format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".deliverycheck").join("config.yaml"))
    }

    /// Resolve an explicit path, falling back to the default location
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration, returning defaults when the file does not exist
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        let path = Self::resolve_path(path)?;
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an explicit path or the default location
    pub fn save_at(&self, path: Option<&str>) -> Result<PathBuf> {
        let path = Self::resolve_path(path)?;
        self.save_to(&path)?;
        Ok(path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(path, contents)?;

        // The file holds the API login
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(path, perms)?;
        }

        Ok(())
    }

    /// Apply CLI/environment overrides on top of file values
    pub fn apply_overrides(
        &mut self,
        api_login: Option<&str>,
        api_host: Option<&str>,
        timeout_secs: Option<u64>,
    ) {
        if let Some(login) = api_login {
            self.api_login = Some(login.to_string());
        }
        if let Some(host) = api_host {
            self.api_host = Some(host.to_string());
        }
        if let Some(secs) = timeout_secs {
            self.timeout_secs = Some(secs);
        }
    }

    /// Credential to authenticate with, required for every API command
    pub fn credential(&self) -> Result<Credential> {
        match self.api_login.as_deref().map(str::trim) {
            Some(login) if !login.is_empty() => Ok(Credential::new(login)),
            _ => Err(ConfigError::MissingApiLogin.into()),
        }
    }

    /// Request timeout, validated to be non-zero
    pub fn timeout(&self) -> Result<Duration> {
        match self.timeout_secs {
            Some(0) => {
                Err(ConfigError::Invalid("timeout_secs must be greater than 0".into()).into())
            }
            Some(secs) => Ok(Duration::from_secs(secs)),
            None => Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }
}
