//! Configuration management for the Fleet Ops Dashboard
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FLEET_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Remote API configuration
    pub api: ApiConfig,

    /// Dashboard behavior configuration
    pub ui: UiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the remote REST API, e.g. `https://api.example.com/api/v1`
    pub base_url: String,

    /// Optional bearer token for authenticated requests
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UiConfig {
    /// Default page size for list screens
    pub page_size: u32,

    /// Path of the persisted user-management filter slice
    pub filter_store_path: String,

    /// Directory exported report files are saved to
    pub export_dir: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FLEET_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("api.base_url", "http://localhost:8000/api/v1")?
            .set_default("api.timeout_secs", 30)?
            .set_default("ui.page_size", 20)?
            .set_default("ui.filter_store_path", ".fleet-dash/user_filters.json")?
            .set_default("ui.export_dir", "exports")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FLEET_ prefix)
            .add_source(
                Environment::with_prefix("FLEET")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: 20,
            filter_store_path: ".fleet-dash/user_filters.json".to_string(),
            export_dir: "exports".to_string(),
        }
    }
}
