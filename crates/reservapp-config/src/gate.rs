//! Route gate configuration.
//!
//! # Environment Variables
//!
//! - `GATE_AUTH_COOKIE`: Primary session cookie name (default: `authToken`)
//! - `GATE_LEGACY_COOKIE`: Fallback cookie name, empty to disable (default: `token`)
//! - `GATE_JWT_SECRET`: HS256 secret; when set, token signatures are verified
//! - `GATE_BIND_ADDR`: Listener address for the gate (default: `0.0.0.0:3000`)
//! - `METRICS_BIND_ADDR`: Listener address for `/metrics` (default: `0.0.0.0:9090`)

use std::env;
use std::net::SocketAddr;

pub const DEFAULT_AUTH_COOKIE: &str = "authToken";
pub const DEFAULT_LEGACY_COOKIE: &str = "token";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_METRICS_BIND_ADDR: &str = "0.0.0.0:9090";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub auth_cookie: String,
    pub legacy_cookie: Option<String>,
    pub jwt_secret: Option<String>,
    pub bind_addr: SocketAddr,
    pub metrics_bind_addr: SocketAddr,
}

impl GateConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let auth_cookie = match lookup("GATE_AUTH_COOKIE") {
            Some(name) if name.trim().is_empty() => {
                return Err(ConfigError::Empty("GATE_AUTH_COOKIE"));
            }
            Some(name) => name.trim().to_string(),
            None => DEFAULT_AUTH_COOKIE.to_string(),
        };

        let legacy_cookie = match lookup("GATE_LEGACY_COOKIE") {
            Some(name) if name.trim().is_empty() => None,
            Some(name) => Some(name.trim().to_string()),
            None => Some(DEFAULT_LEGACY_COOKIE.to_string()),
        };

        let jwt_secret = lookup("GATE_JWT_SECRET").filter(|s| !s.is_empty());

        Ok(Self {
            auth_cookie,
            legacy_cookie,
            jwt_secret,
            bind_addr: parse_addr(&lookup, "GATE_BIND_ADDR", DEFAULT_BIND_ADDR)?,
            metrics_bind_addr: parse_addr(&lookup, "METRICS_BIND_ADDR", DEFAULT_METRICS_BIND_ADDR)?,
        })
    }

    /// Cookie names in lookup order.
    pub fn cookie_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.auth_cookie.as_str()).chain(self.legacy_cookie.as_deref())
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            auth_cookie: DEFAULT_AUTH_COOKIE.to_string(),
            legacy_cookie: Some(DEFAULT_LEGACY_COOKIE.to_string()),
            jwt_secret: None,
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            metrics_bind_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
        }
    }
}

fn parse_addr<F>(lookup: &F, var: &'static str, default: &str) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(var).unwrap_or_else(|| default.to_string());
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidAddr { var, value })
}
