use std::path::Path;
use std::time::Duration;

use client::ClientConfig;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Prefix of the environment variables read into `Settings`
pub const ENV_PREFIX: &str = "GDP_FORECASTING";

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "gdp_forecasting";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Client settings, layered from defaults, an optional config file and
/// `GDP_FORECASTING_*` environment variables.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    /// Root URL of the Frappe site
    pub site_url: String,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub csrf_token: Option<String>,
    /// Pause between a successful reply and the follow-up navigation
    pub navigation_delay_ms: u64,
    pub request_timeout_secs: u64,
}

impl Settings {
    /// Load settings after reading `.env` into the environment.
    pub fn load(config_file: Option<&Path>) -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();
        Self::load_from(config_file, Environment::with_prefix(ENV_PREFIX))
    }

    pub fn load_from(config_file: Option<&Path>, environment: Environment) -> Result<Self, SettingsError> {
        let file = match config_file {
            Some(path) => {
                debug!("Reading settings from {}", path.display());
                File::from(path).required(true)
            }
            None => File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let settings: Settings = Config::builder()
            .set_default("site_url", "http://localhost:8000")?
            .set_default("navigation_delay_ms", 1000)?
            .set_default("request_timeout_secs", 30)?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        info!("Using Frappe site {}", settings.site_url);
        Ok(settings)
    }

    pub fn navigation_delay(&self) -> Duration {
        Duration::from_millis(self.navigation_delay_ms)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            site_url: self.site_url.clone(),
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            csrf_token: self.csrf_token.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}
