use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub default_limit: Option<u16>,
    pub max_limit: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_credentials_weight")]
    pub credentials: f64,
    #[serde(default = "default_preferred_weight")]
    pub preferred: f64,
    #[serde(default = "default_proximity_weight")]
    pub proximity: f64,
    #[serde(default = "default_availability_weight")]
    pub availability: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            credentials: default_credentials_weight(),
            preferred: default_preferred_weight(),
            proximity: default_proximity_weight(),
            availability: default_availability_weight(),
        }
    }
}

fn default_credentials_weight() -> f64 { 0.40 }
fn default_preferred_weight() -> f64 { 0.20 }
fn default_proximity_weight() -> f64 { 0.20 }
fn default_availability_weight() -> f64 { 0.20 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with CAREMATCH__)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with CAREMATCH__)
            // e.g., CAREMATCH__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("CAREMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("CAREMATCH")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
