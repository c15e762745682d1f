use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

pub(crate) const DEFAULT_CATALOG_BASE_URL: &str = "https://dummyjson.com";
pub(crate) const DEFAULT_USER_AGENT: &str = "storefront/0.1 (catalog-browser)";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable holds an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let env = parse_environment(&or_default("STOREFRONT_ENV", "development"))?;

    let catalog_base_url = or_default("STOREFRONT_CATALOG_BASE_URL", DEFAULT_CATALOG_BASE_URL);
    check_catalog_base_url(&catalog_base_url).map_err(|reason| ConfigError::InvalidEnvVar {
        var: "STOREFRONT_CATALOG_BASE_URL".to_string(),
        reason,
    })?;

    let user_agent = or_default("STOREFRONT_USER_AGENT", DEFAULT_USER_AGENT);
    let log_level = or_default("STOREFRONT_LOG_LEVEL", "warn");

    Ok(AppConfig {
        env,
        catalog_base_url,
        user_agent,
        log_level,
    })
}

impl AppConfig {
    /// Replaces the catalog base URL, applying the same check as the
    /// `STOREFRONT_CATALOG_BASE_URL` variable.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` if `url` is not an http(s) URL.
    pub fn with_catalog_base_url(mut self, url: String) -> Result<Self, ConfigError> {
        check_catalog_base_url(&url).map_err(|reason| ConfigError::InvalidBaseUrl {
            url: url.clone(),
            reason,
        })?;
        self.catalog_base_url = url;
        Ok(self)
    }
}

/// The catalog is only reachable over http(s).
fn check_catalog_base_url(url: &str) -> Result<(), String> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(format!("expected an http(s) URL, got \"{url}\""))
    }
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test`, or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "STOREFRONT_ENV".to_string(),
            reason: format!("unknown environment \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
