// src/infra/config.rs — Configuration loading (TOML)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::risk::RiskConfig;
use crate::infra::paths;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,

    #[serde(default)]
    pub risk: RiskConfig,

    #[serde(default)]
    pub providers: ProvidersConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

/// Who the plan is for: where they live, where class is, when it starts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub location: String,
    pub class_start_time: String,
    pub timezone: String,
    pub food_budget: f64,
    #[serde(default)]
    pub cuisine_preferences: Vec<String>,
    pub travel_preference: String,
    pub home_latitude: f64,
    pub home_longitude: f64,
    pub class_latitude: f64,
    pub class_longitude: f64,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            location: "IIT Madras".into(),
            class_start_time: "09:00".into(),
            timezone: "Asia/Kolkata".into(),
            food_budget: 200.0,
            cuisine_preferences: vec!["South Indian".into(), "Fast Food".into()],
            travel_preference: "fastest".into(),
            home_latitude: 13.0827,
            home_longitude: 80.2707,
            class_latitude: 13.1939,
            class_longitude: 80.1180,
        }
    }
}

/// Upstream delivery/ride lookups. With no keys configured the mock tables
/// are used directly and no network calls are made.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub food_api_key: Option<String>,
    pub ride_api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            food_api_key: None,
            ride_api_key: None,
            request_timeout_secs: 5,
        }
    }
}

/// API server settings. `token` enables bearer auth when set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    pub token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 8787,
            token: None,
        }
    }
}

impl Config {
    /// Load config from file, falling back to defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = paths::config_file_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
