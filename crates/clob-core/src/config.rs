//! Configuration management for the order signer.

use crate::signing::POLYGON_CHAIN_ID;
use crate::{Error, Result};
use std::env;
use std::str::FromStr;

/// Output format for diagnostic logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(Error::Config {
                message: format!("unknown log format '{}', expected text or json", other),
            }),
        }
    }
}

/// Signer configuration.
#[derive(Debug, Clone)]
pub struct SignerConfig {
    /// Chain the orders are signed for.
    pub chain_id: u64,
    /// Diagnostic log format.
    pub log_format: LogFormat,
}

impl Default for SignerConfig {
    fn default() -> Self {
        Self {
            chain_id: POLYGON_CHAIN_ID,
            log_format: LogFormat::default(),
        }
    }
}

impl SignerConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let chain_id = match lookup("SIGNER_CHAIN_ID") {
            Some(raw) => raw.trim().parse().map_err(|_| Error::Config {
                message: format!("SIGNER_CHAIN_ID must be an integer, got '{}'", raw),
            })?,
            None => POLYGON_CHAIN_ID,
        };

        let log_format = match lookup("SIGNER_LOG_FORMAT") {
            Some(raw) => raw.trim().parse()?,
            None => LogFormat::default(),
        };

        Ok(Self {
            chain_id,
            log_format,
        })
    }
}
