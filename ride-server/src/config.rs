//! Server configuration from the environment.

use std::net::{IpAddr, SocketAddr};
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Default registry file, relative to the working directory.
const DEFAULT_STATIONS_PATH: &str = "data/stops.json";

const DEFAULT_HOST: &str = "0.0.0.0";

const DEFAULT_PORT: u16 = 8000;

const DEFAULT_DIRECTIONS_TIMEOUT_SECS: u64 = 10;

const DEFAULT_MIN_SHARED_WORDS: NonZeroUsize = NonZeroUsize::MIN;

/// A setting that is present but unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {name} '{value}': {reason}")]
pub struct ConfigError {
    pub name: &'static str,
    pub value: String,
    pub reason: String,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directions API key; `None` means every directions call will fail
    pub api_key: Option<String>,
    pub stations_path: PathBuf,
    /// Serve canned directions from this file instead of calling the API
    pub mock_directions_path: Option<PathBuf>,
    pub host: IpAddr,
    pub port: u16,
    pub directions_timeout_secs: u64,
    /// Never zero
    pub transfer_min_shared_words: NonZeroUsize,
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if it is set.
    ///
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        Ok(Self {
            api_key: get("GOOGLE_MAPS_API_KEY"),
            stations_path: get("STATIONS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIONS_PATH)),
            mock_directions_path: get("MOCK_DIRECTIONS_PATH").map(PathBuf::from),
            host: parse_or("HOST", get("HOST"), DEFAULT_HOST.parse().ok())?,
            port: parse_or("PORT", get("PORT"), Some(DEFAULT_PORT))?,
            directions_timeout_secs: parse_or(
                "DIRECTIONS_TIMEOUT_SECS",
                get("DIRECTIONS_TIMEOUT_SECS"),
                Some(DEFAULT_DIRECTIONS_TIMEOUT_SECS),
            )?,
            transfer_min_shared_words: parse_or(
                "TRANSFER_MIN_SHARED_WORDS",
                get("TRANSFER_MIN_SHARED_WORDS"),
                Some(DEFAULT_MIN_SHARED_WORDS),
            )?,
        })
    }

    /// Address to listen on.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

fn parse_or<T>(name: &'static str, value: Option<String>, default: Option<T>) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match (value, default) {
        (Some(value), _) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            name,
            reason: e.to_string(),
            value,
        }),
        (None, Some(default)) => Ok(default),
        (None, None) => Err(ConfigError {
            name,
            value: String::new(),
            reason: "no value and no default".to_string(),
        }),
    }
}
