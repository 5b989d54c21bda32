use std::net::SocketAddr;

use reqwest::Url;

use crate::errors::ConfigError;

const DEFAULT_ORIGIN: &str = "http://hammie.local";
const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_LOG: &str = "debug";

#[derive(Debug, Clone)]
pub struct Config {
    /// Origin the device API is served from.
    pub origin: Url,
    pub listen: SocketAddr,
    /// Filter directive used when `RUST_LOG` is not set.
    pub log: String,
}

impl Config {
    /// Reads `HAMMIE_ORIGIN`, `HAMMIE_LISTEN` and `HAMMIE_LOG`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let origin = lookup("HAMMIE_ORIGIN").unwrap_or_else(|| DEFAULT_ORIGIN.to_string());
        let listen = lookup("HAMMIE_LISTEN").unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let log = lookup("HAMMIE_LOG").unwrap_or_else(|| DEFAULT_LOG.to_string());

        let origin = Url::parse(&origin)
            .map_err(|e| ConfigError::InvalidOrigin(origin.clone(), e.to_string()))?;
        if origin.cannot_be_a_base() {
            return Err(ConfigError::InvalidOrigin(
                origin.to_string(),
                "origin cannot be a base url".to_string(),
            ));
        }

        let listen = listen
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidListen(listen.clone()))?;

        Ok(Self { origin, listen, log })
    }
}
