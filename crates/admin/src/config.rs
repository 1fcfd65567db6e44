//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `ADMIN_SESSION_SECRET` - Session signing secret (min 32 chars)
//!
//! ## Optional
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL (default: http://localhost:3001)
//! - `SIMULATED_LATENCY_MS` - Override every simulated backend delay

use std::net::{IpAddr, SocketAddr};
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

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin panel
    pub base_url: String,
    /// Session signing secret
    pub session_secret: SecretString,
    /// Uniform override for all simulated backend latencies
    pub latency_override: Option<Duration>,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing, a value fails
    /// to parse, or the session secret is too short.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = optional_parsed("ADMIN_HOST", IpAddr::from([127, 0, 0, 1]))?;
        let port = optional_parsed("ADMIN_PORT", 3001)?;

        let base_url =
            std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".into());
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_BASE_URL".into(), e.to_string()))?;

        let session_secret = require_secret("ADMIN_SESSION_SECRET")?;

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

fn optional_parsed<T: std::str::FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar(name.into(), raw)),
        Err(_) => Ok(default),
    }
}

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
