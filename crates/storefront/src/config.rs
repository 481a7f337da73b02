//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOPIFY_CUSTOMER_SHOP_ID` - Customer Account API numeric shop ID (found in Shopify admin URL)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `SHOPIFY_API_VERSION` - API version (default: 2026-01)
//! - `SHOPIFY_CUSTOMER_API_BASE_URL` - Customer Account API origin (default: <https://shopify.com>)
//! - `CUSTOMER_API_MAX_ATTEMPTS` - Attempts per Customer Account API call (default: 3)
//! - `CUSTOMER_API_TIMEOUT_MS` - Per-attempt timeout in milliseconds (default: 10000)
//! - `CUSTOMER_API_BACKOFF_BASE_MS` - First retry delay in milliseconds, doubling after (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Performance trace sample rate (default: 0.0)

use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::shopify::RetryPolicy;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shopify Customer Account API configuration
    pub shopify: ShopifyCustomerConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. production, staging)
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions traced
    pub sentry_traces_sample_rate: f32,
}

/// Shopify Customer Account API configuration.
#[derive(Debug, Clone)]
pub struct ShopifyCustomerConfig {
    /// Customer Account API numeric shop ID
    pub shop_id: String,
    /// Shopify API version (e.g., 2026-01)
    pub api_version: String,
    /// Origin of the Customer Account API (no trailing path)
    pub api_base_url: String,
    /// Retry policy for every Customer Account API call
    pub retry: RetryPolicy,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_parsed_or_default("STOREFRONT_HOST", "127.0.0.1")?;
        let port = get_parsed_or_default("STOREFRONT_PORT", "3000")?;
        let shopify = ShopifyCustomerConfig::from_env()?;

        Ok(Self {
            host,
            port,
            shopify,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sentry_sample_rate: get_parsed_or_default("SENTRY_SAMPLE_RATE", "1.0")?,
            sentry_traces_sample_rate: get_parsed_or_default("SENTRY_TRACES_SAMPLE_RATE", "0.0")?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ShopifyCustomerConfig {
    /// Load the Customer Account API settings from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the shop ID is missing or a retry setting is
    /// not a valid number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            shop_id: get_required_env("SHOPIFY_CUSTOMER_SHOP_ID")?,
            api_version: get_env_or_default("SHOPIFY_API_VERSION", "2026-01"),
            api_base_url: get_env_or_default("SHOPIFY_CUSTOMER_API_BASE_URL", "https://shopify.com"),
            retry: retry_policy_from_env()?,
        })
    }
}

/// Build the retry policy from `CUSTOMER_API_*` variables.
fn retry_policy_from_env() -> Result<RetryPolicy, ConfigError> {
    let max_attempts: u32 = get_parsed_or_default("CUSTOMER_API_MAX_ATTEMPTS", "3")?;
    if max_attempts == 0 {
        return Err(ConfigError::InvalidEnvVar(
            "CUSTOMER_API_MAX_ATTEMPTS".to_string(),
            "must be at least 1".to_string(),
        ));
    }
    let timeout_ms: u64 = get_parsed_or_default("CUSTOMER_API_TIMEOUT_MS", "10000")?;
    let backoff_ms: u64 = get_parsed_or_default("CUSTOMER_API_BACKOFF_BASE_MS", "1000")?;

    Ok(RetryPolicy::new(
        max_attempts,
        Duration::from_millis(timeout_ms),
        Duration::from_millis(backoff_ms),
    ))
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get an environment variable (or default) parsed into `T`.
fn get_parsed_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

/// Parse a raw value, naming the variable in the error.
fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_trims() {
        let port: u16 = parse_value("STOREFRONT_PORT", " 8080 ").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn test_parse_value_invalid() {
        let result: Result<u16, _> = parse_value("STOREFRONT_PORT", "http");
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_PORT"));
    }

    #[test]
    fn test_parse_value_ip() {
        let host: IpAddr = parse_value("STOREFRONT_HOST", "0.0.0.0").unwrap();
        assert!(host.is_unspecified());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            shopify: ShopifyCustomerConfig {
                shop_id: "12345678901".to_string(),
                api_version: "2026-01".to_string(),
                api_base_url: "https://shopify.com".to_string(),
                retry: RetryPolicy::default(),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 0.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("SHOPIFY_CUSTOMER_SHOP_ID".to_string());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHOPIFY_CUSTOMER_SHOP_ID"
        );
    }
}
