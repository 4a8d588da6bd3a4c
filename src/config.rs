//! Application configuration loaded from environment variables.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::{env, net::SocketAddr};

const DEFAULT_LISTEN: &str = "0.0.0.0:8000";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    /// Anything other than `json` (case-insensitive) falls back to text.
    pub fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Service configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN` is not a valid socket address.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(
            env::var("LISTEN").ok(),
            env::var("RUST_LOG").ok(),
            env::var("LOG_FORMAT").ok(),
        )
    }

    fn from_vars(
        listen: Option<String>,
        log_level: Option<String>,
        log_format: Option<String>,
    ) -> Result<Self> {
        let listen = listen.unwrap_or_else(|| DEFAULT_LISTEN.to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("LISTEN is not a valid socket address: {listen}"))?;

        Ok(Self {
            listen_addr,
            log_level: log_level.unwrap_or_else(|| "info".to_string()),
            log_format: log_format
                .as_deref()
                .map(LogFormat::parse)
                .unwrap_or(LogFormat::Text),
        })
    }
}
