//! Service configuration

use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

/// Service configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    /// HTTP API port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Optional JSON file of completed tasks used to fit the duration
    /// model at startup; the service runs on the cold-start heuristic
    /// when unset
    #[serde(default)]
    pub training_data_path: Option<PathBuf>,
}

fn default_api_port() -> u16 {
    8000
}

impl ServiceConfig {
    /// Load configuration from the environment (prefix `PREDICTOR_`)
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::Environment::with_prefix("PREDICTOR"))
            .build()?;

        Ok(config.try_deserialize().unwrap_or_else(|_| ServiceConfig {
            api_port: default_api_port(),
            training_data_path: None,
        }))
    }
}
