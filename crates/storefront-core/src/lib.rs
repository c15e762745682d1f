mod app_config;
mod catalog;
mod config;

pub use app_config::{AppConfig, Environment};
pub use catalog::{CatalogItem, Dimensions, Review};
pub use config::{load_app_config, load_app_config_from_env};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("invalid catalog base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
