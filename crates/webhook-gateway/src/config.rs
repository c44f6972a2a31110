//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;

/// Webhook gateway configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Capacity of the ingestion queue.
    pub queue_capacity: usize,
    /// Public webhook URL to register with Telegram at startup, if any.
    pub webhook_url: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `GATEWAY_ADDR` | Server bind address | `127.0.0.1:8081` |
    /// | `QUEUE_CAPACITY` | Ingestion queue capacity | `1024` |
    /// | `WEBHOOK_URL` | Public URL registered via setWebhook | (unset) |
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("GATEWAY_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8081".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let queue_capacity = env::var("QUEUE_CAPACITY")
            .unwrap_or_else(|_| "1024".to_string())
            .parse::<usize>()
            .ok()
            .filter(|&capacity| capacity > 0)
            .ok_or(ConfigError::InvalidQueueCapacity)?;

        let webhook_url = env::var("WEBHOOK_URL").ok().filter(|url| !url.trim().is_empty());

        Ok(Self {
            addr,
            queue_capacity,
            webhook_url,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid GATEWAY_ADDR format")]
    InvalidAddr,

    #[error("QUEUE_CAPACITY must be a positive integer")]
    InvalidQueueCapacity,
}
