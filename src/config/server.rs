//! Listener, request timeout, and log output.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

use super::error::ValidationError;

/// Bounds for `SERVER__REQUEST_TIMEOUT_SECS`.
pub const REQUEST_TIMEOUT_BOUNDS_SECS: (u64, u64) = (1, 300);

/// Server settings. Every field has a default, so an empty environment works.
///
/// `host` is decoded as an IP address, so a hostname fails at load time.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub log_format: LogFormat,
    pub request_timeout_secs: u64,
}

/// Deployment stage. Production tightens URL checks.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Log line format.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8080,
            environment: Environment::default(),
            log_filter: "info,checkout_relay=debug".to_string(),
            log_format: LogFormat::default(),
            request_timeout_secs: 30,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::OutOfRange {
                key: "SERVER__PORT",
                value: 0,
                min: 1,
                max: u64::from(u16::MAX),
            });
        }

        let (min, max) = REQUEST_TIMEOUT_BOUNDS_SECS;
        if !(min..=max).contains(&self.request_timeout_secs) {
            return Err(ValidationError::OutOfRange {
                key: "SERVER__REQUEST_TIMEOUT_SECS",
                value: self.request_timeout_secs,
                min,
                max,
            });
        }
        Ok(())
    }
}
