use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionConfig {
    pub noise_seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub database: Option<DatabaseConfig>,
    pub prediction: Option<PredictionConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppConfig {
    /// Load configuration from AIRQ_CONFIG path (TOML) if present, with reasonable defaults
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("AIRQ_CONFIG").unwrap_or_else(|_| "config.toml".to_string());
        Self::from_path(path)
    }

    /// Load configuration from a TOML file, falling back to defaults when
    /// the file does not exist
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let cfg = if path.exists() {
            let s = fs::read_to_string(path)?;
            toml::from_str::<AppConfig>(&s)?
        } else {
            AppConfig::default()
        };
        Ok(cfg)
    }

    /// Database URL: the DATABASE_URL environment variable wins, then the
    /// TOML value, then a local file default
    pub fn database_url(&self) -> String {
        if let Ok(url) = std::env::var("DATABASE_URL") {
            return url;
        }
        self.database
            .as_ref()
            .and_then(|d| d.url.clone())
            .unwrap_or_else(|| "sqlite:air_quality.db?mode=rwc".to_string())
    }

    /// Fixed prediction-noise seed, for reproducible estimates
    pub fn noise_seed(&self) -> Option<u64> {
        self.prediction.as_ref().and_then(|p| p.noise_seed)
    }
}
