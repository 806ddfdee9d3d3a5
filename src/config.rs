//! Host configuration.
//!
//! The base comes from `get_configuration(None)`, which reads the `LEPTOS_*`
//! variables `cargo leptos` exports (site address, output name, site root).
//! `HOST` and `PORT` override the IP and port of that site address.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use leptos::prelude::{LeptosOptions, get_configuration};

pub const DEFAULT_OUTPUT_NAME: &str = "recipe-frontend";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("leptos configuration: {0}")]
    Leptos(String),

    #[error("invalid PORT: {value:?}")]
    InvalidPort { value: String },

    #[error("invalid HOST: {value:?}")]
    InvalidHost { value: String },
}

#[derive(Debug, Clone)]
pub struct HostConfig {
    pub addr: SocketAddr,
    pub leptos_options: LeptosOptions,
}

impl HostConfig {
    /// Load Leptos options from the environment and apply overrides.
    ///
    /// Optional:
    /// - `HOST`: replaces the IP of `LEPTOS_SITE_ADDR`
    /// - `PORT`: replaces the port of `LEPTOS_SITE_ADDR`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the Leptos configuration cannot be loaded
    /// or `HOST`/`PORT` is set but unparsable.
    pub fn from_env() -> Result<Self, ConfigError> {
        let conf = get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        Self::from_options(conf.leptos_options, |key| std::env::var(key).ok())
    }

    /// Apply `HOST`/`PORT` from `lookup` on top of already-loaded options.
    ///
    /// An empty output name (binary built without `cargo leptos`) falls back
    /// to [`DEFAULT_OUTPUT_NAME`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `HOST` or `PORT` is set but unparsable.
    pub fn from_options<F>(mut leptos_options: LeptosOptions, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut addr = leptos_options.site_addr;
        if let Some(raw) = non_empty(lookup("HOST")) {
            let ip = raw.parse::<IpAddr>().map_err(|_| ConfigError::InvalidHost { value: raw.clone() })?;
            addr.set_ip(ip);
        }
        if let Some(raw) = non_empty(lookup("PORT")) {
            let port = raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort { value: raw.clone() })?;
            addr.set_port(port);
        }

        leptos_options.site_addr = addr;
        if leptos_options.output_name.is_empty() {
            leptos_options.output_name = Arc::from(DEFAULT_OUTPUT_NAME);
        }

        Ok(Self { addr, leptos_options })
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}
