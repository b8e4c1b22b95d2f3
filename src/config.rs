//! Env-driven configuration for the web UI, the CLI, and the library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. Defaults are provided for convenience during development.
use std::env;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use crate::error::{AppError, AppResult};

pub const DEFAULT_GENIMG_URL: &str = "http://localhost:3000/api/genimg";
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8190;

const ENV_KEYS: &[&str] = &[
    "PROMPTPIX_GENIMG_URL",
    "PROMPTPIX_REQUEST_TIMEOUT_SECS",
    "API_HOST",
    "API_PORT",
];

#[derive(Debug, Clone)]
pub struct Config {
    pub genimg_url: String,
    /// Unset means the transport default (no timeout).
    pub request_timeout: Option<Duration>,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        let request_timeout = match env::var("PROMPTPIX_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => Some(parse_timeout(&raw)?),
            Err(_) => None,
        };
        Ok(Config {
            genimg_url: env::var("PROMPTPIX_GENIMG_URL").unwrap_or_else(|_| DEFAULT_GENIMG_URL.to_string()),
            request_timeout,
            api_host: env::var("API_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| DEFAULT_PORT.to_string()),
        })
    }

    /// Resolve the listen address, falling back on unparsable values.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip: IpAddr = self.api_host.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid API_HOST '{}', falling back to {}", self.api_host, DEFAULT_HOST);
            IpAddr::from([127, 0, 0, 1])
        });
        let port: u16 = self.api_port.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid API_PORT '{}', falling back to {}", self.api_port, DEFAULT_PORT);
            DEFAULT_PORT
        });
        SocketAddr::new(ip, port)
    }

    pub fn log_env_vars() {
        for key in ENV_KEYS {
            let value = env::var(key).unwrap_or_else(|_| "<unset>".to_string());
            tracing::info!("{}: {}", key, value);
        }
    }
}

fn parse_timeout(raw: &str) -> AppResult<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(AppError::Config(format!(
            "PROMPTPIX_REQUEST_TIMEOUT_SECS must be a positive integer, got '{}'",
            raw
        ))),
    }
}
