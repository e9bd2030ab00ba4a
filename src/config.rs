//! Server configuration parsed from environment variables.
//!
//! Leptos reads its own settings (site root, package dir) from the
//! `[[workspace.metadata.leptos]]` table; this module only covers where the
//! HTTP listener binds.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT '{0}': expected an integer between 1 and 65535")]
    InvalidPort(String),
    #[error("invalid BIND_ADDR '{0}': expected an IPv4 or IPv6 address")]
    InvalidBindAddr(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteConfig {
    pub addr: SocketAddr,
}

impl SiteConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `BIND_ADDR`: default `0.0.0.0`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::from_env`] with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let ip = parse_bind_addr(lookup("BIND_ADDR").as_deref())?;
        Ok(Self { addr: SocketAddr::new(ip, port) })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self { addr: SocketAddr::new(DEFAULT_BIND_ADDR, DEFAULT_PORT) }
    }
}

/// Blank values count as unset.
fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_PORT),
        Some(v) => match v.parse::<u16>() {
            Ok(0) | Err(_) => Err(ConfigError::InvalidPort(v.to_string())),
            Ok(port) => Ok(port),
        },
    }
}

fn parse_bind_addr(raw: Option<&str>) -> Result<IpAddr, ConfigError> {
    match non_blank(raw) {
        None => Ok(DEFAULT_BIND_ADDR),
        Some(v) => v.parse().map_err(|_| ConfigError::InvalidBindAddr(v.to_string())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
