//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `STOREFRONT_SESSION_SECRET` - Session signing secret (min 32 chars)
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_BASE_URL` - Public URL (default: http://localhost:3000)
//! - `SHOPEASE_DATA_DIR` - Key-value storage directory (default: .shopease-data)
//! - `SIMULATED_LATENCY_MS` - Override every simulated backend delay with
//!   one value; set to 0 for instant responses in local development

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the storefront
    pub base_url: String,
    /// Directory backing the key-value store
    pub data_dir: PathBuf,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Uniform override for all simulated backend latencies
    pub latency_override: Option<Duration>,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, a value fails
    /// to parse, or the session secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional_parsed("STOREFRONT_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = optional_parsed("STOREFRONT_PORT", 3000)?;

        let base_url =
            std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".into());
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_BASE_URL".into(), e.to_string()))?;

        let data_dir = std::env::var("SHOPEASE_DATA_DIR")
            .map_or_else(|_| PathBuf::from(".shopease-data"), PathBuf::from);

        let session_secret = require_secret("STOREFRONT_SESSION_SECRET")?;

        let latency_override = match std::env::var("SIMULATED_LATENCY_MS") {
            Ok(raw) => {
                let ms: u64 = raw.parse().map_err(|_| {
                    ConfigError::InvalidEnvVar("SIMULATED_LATENCY_MS".into(), raw.clone())
                })?;
                Some(Duration::from_millis(ms))
            }
            Err(_) => None,
        };

        Ok(Self {
            host,
            port,
            base_url,
            data_dir,
            session_secret,
            latency_override,
        })
    }

    /// Socket address to bind.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

/// Read an optional env var, parsing it into `T` or falling back.
fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.into(), raw)),
        Err(_) => Ok(default),
    }
}

/// Read a required secret env var, enforcing a minimum length.
fn require_secret(name: &str) -> Result<SecretString, ConfigError> {
    let raw = std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.into()))?;
    if raw.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            name.into(),
            format!("must be at least {MIN_SESSION_SECRET_LENGTH} characters"),
        ));
    }
    Ok(SecretString::from(raw))
}

#[cfg(test)]
#[allow(unsafe_code)] // env::set_var is unsafe in edition 2024; test-only
mod tests {
    use super::*;

    // Each test uses its own variable name so parallel tests don't race
    // on the process environment.

    #[test]
    fn test_missing_secret() {
        assert!(matches!(
            require_secret("TEST_SECRET_UNSET"),
            Err(ConfigError::MissingEnvVar(_))
        ));
    }

    #[test]
    fn test_short_secret_rejected() {
        unsafe { std::env::set_var("TEST_SECRET_SHORT", "short") };
        assert!(matches!(
            require_secret("TEST_SECRET_SHORT"),
            Err(ConfigError::InsecureSecret(..))
        ));
    }

    #[test]
    fn test_long_secret_accepted() {
        unsafe { std::env::set_var("TEST_SECRET_OK", "x".repeat(48)) };
        assert!(require_secret("TEST_SECRET_OK").is_ok());
    }

    #[test]
    fn test_optional_parsed_falls_back() {
        let port: u16 = optional_parsed("TEST_PORT_UNSET", 3000).expect("default");
        assert_eq!(port, 3000);
    }

    #[test]
    fn test_optional_parsed_rejects_garbage() {
        unsafe { std::env::set_var("TEST_PORT_BAD", "not-a-port") };
        assert!(matches!(
            optional_parsed::<u16>("TEST_PORT_BAD", 3000),
            Err(ConfigError::InvalidEnvVar(..))
        ));
    }
}
