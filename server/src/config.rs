//! Host configuration parsed from environment variables.
//!
//! Leptos settings (site root, asset directory, bind address) come from
//! `LEPTOS_*` variables that `cargo leptos` derives from the workspace
//! manifest. `PORT` overrides the bind port so the host can run behind
//! platforms that assign one.

use std::net::SocketAddr;

use leptos::config::LeptosOptions;

pub const PORT_ENV: &str = "PORT";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub leptos: LeptosOptions,
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Load `.env` (if present), Leptos options, and the optional port override.
    ///
    /// # Errors
    ///
    /// Returns an error if the Leptos configuration cannot be loaded or `PORT`
    /// is not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let conf = leptos::config::get_configuration(None).map_err(|e| ConfigError::Leptos(e.to_string()))?;
        let leptos = conf.leptos_options;
        let port = parse_port(std::env::var(PORT_ENV).ok().as_deref())?;
        let addr = with_port(leptos.site_addr, port);
        Ok(Self { leptos, addr })
    }
}

pub(crate) fn parse_port(raw: Option<&str>) -> Result<Option<u16>, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse::<u16>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

pub(crate) fn with_port(mut addr: SocketAddr, port: Option<u16>) -> SocketAddr {
    if let Some(port) = port {
        addr.set_port(port);
    }
    addr
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
