//! Configuration management for the login screen.
//!
//! Loads configuration from ${NUBER_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Timing of deferred UI actions.
///
/// These delays sequence with screen transitions; they carry no login logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Wait after selecting mobile login before focusing the phone input.
    pub focus_delay_ms: u64,
    /// Wait after blurring the phone input before collapsing back.
    pub collapse_delay_ms: u64,
    /// Wait after "SMS Sent." before moving to the verification screen.
    pub verify_redirect_delay_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            focus_delay_ms: 500,
            collapse_delay_ms: 300,
            verify_redirect_delay_ms: 4000,
        }
    }
}

impl TimingConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus_delay_ms)
    }

    pub fn collapse_delay(&self) -> Duration {
        Duration::from_millis(self.collapse_delay_ms)
    }

    pub fn verify_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.verify_redirect_delay_ms)
    }
}

/// Sign-in API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// GraphQL endpoint.
    pub endpoint: String,
    /// Per-request timeout in seconds (0 disables)
    pub timeout_secs: u64,
    /// Attempts per request including the first; only transport failures retry.
    pub max_attempts: u32,
    /// Delay before the first retry, doubled for each later one.
    pub retry_base_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: Config::DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
            max_attempts: 1,
            retry_base_delay_ms: 250,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Dial code preselected when the screen mounts
    pub default_country_code: String,

    /// Route of the phone verification screen
    pub verify_path: String,

    #[serde(default)]
    pub timing: TimingConfig,

    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_country_code: Self::DEFAULT_COUNTRY_CODE.to_string(),
            verify_path: Self::DEFAULT_VERIFY_PATH.to_string(),
            timing: TimingConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    const DEFAULT_COUNTRY_CODE: &str = "+82";
    const DEFAULT_VERIFY_PATH: &str = "/verify-phone";
    const DEFAULT_ENDPOINT: &str = "http://localhost:4000/graphql";

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Writes a default config file, creating parent directories.
    ///
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        let contents =
            toml::to_string(&Config::default()).context("Failed to serialize default config to TOML")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Resolves the API endpoint: `NUBER_API_URL` first, then the config file.
    pub fn api_endpoint(&self) -> Result<String> {
        let from_env = std::env::var("NUBER_API_URL").ok();
        resolve_endpoint(from_env.as_deref(), &self.api.endpoint)
    }
}

fn resolve_endpoint(env_url: Option<&str>, config_url: &str) -> Result<String> {
    let chosen = env_url
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| config_url.trim());
    url::Url::parse(chosen).with_context(|| format!("Invalid API endpoint: {chosen}"))?;
    Ok(chosen.to_string())
}

pub mod paths {
    use std::path::PathBuf;

    use anyhow::{Context, Result};

    /// Returns the nuber home directory.
    ///
    /// Checks NUBER_HOME env var first, falls back to ~/.config/nuber
    pub fn nuber_home() -> Result<PathBuf> {
        if let Ok(home) = std::env::var("NUBER_HOME") {
            return Ok(PathBuf::from(home));
        }

        dirs::home_dir()
            .map(|h| h.join(".config").join("nuber"))
            .context("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> Result<PathBuf> {
        Ok(nuber_home()?.join("config.toml"))
    }
}
