use serde::{Deserialize, Serialize};
use tokio::fs;
use std::path::{Path, PathBuf};
use directories::ProjectDirs;
use tracing::debug;

use crate::shared::error::{AppError, AppResult};

pub const API_KEY_ENV: &str = "EXCHANGE_RATE_API_KEY";
pub const API_URL_ENV: &str = "EXCHANGE_RATE_API_URL";
pub const DEFAULT_RATES_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub api_keys: ApiKeys,
    #[serde(default)]
    pub preferences: UserPreferences,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiKeys {
    #[serde(default)]
    pub currency_api_key: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPreferences {
    #[serde(default = "default_rates_base_url")]
    pub rates_base_url: String,
}

fn default_rates_base_url() -> String {
    DEFAULT_RATES_BASE_URL.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            rates_base_url: default_rates_base_url(),
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "antigravity", "universal-converter")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    /// Load from the platform config directory, writing defaults on first run
    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "settings file missing, writing defaults");
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await
            .map_err(|e| AppError::Config(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&content)
            .map_err(|e| AppError::Config(format!("Failed to parse settings: {}", e)))
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await
                .map_err(|e| AppError::Config(format!("Failed to create config directory: {}", e)))?;
        }

        let content = serde_json::to_string_pretty(self)?;

        fs::write(path, content).await
            .map_err(|e| AppError::Config(format!("Failed to write settings file: {}", e)))
    }

    /// Currency API credential: environment first, then the settings file.
    /// Empty values count as absent.
    pub fn currency_api_key(&self) -> Option<String> {
        resolve(std::env::var(API_KEY_ENV).ok(), &self.api_keys.currency_api_key)
    }

    pub fn rates_base_url(&self) -> String {
        resolve(std::env::var(API_URL_ENV).ok(), &self.preferences.rates_base_url)
            .unwrap_or_else(default_rates_base_url)
    }
}

fn resolve(env_value: Option<String>, file_value: &str) -> Option<String> {
    env_value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .or_else(|| Some(file_value.trim().to_string()).filter(|v| !v.is_empty()))
}
