//! Credential resolution.
//!
//! Credentials come from individual flags, optionally overridden key by key
//! by a JSON object read from standard input. They live only for the
//! lifetime of the process and are never printed.

use serde_json::{Map, Value};
use std::io::Read;
use thiserror::Error;

use crate::error::SignerError;

/// Raw wallet and API credentials.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub private_key: Option<String>,
    pub api_key: Option<String>,
    pub api_secret: Option<String>,
    pub api_passphrase: Option<String>,
}

/// Credentials required to sign, borrowed after validation.
#[derive(Clone, Copy)]
pub struct SigningCredentials<'a> {
    pub private_key: &'a str,
    pub api_key: &'a str,
}

/// A required credential that no source supplied.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCredential {
    #[error("missing private_key")]
    PrivateKey,
    #[error("missing api_key")]
    ApiKey,
}

impl Credentials {
    /// Read one JSON object from `reader` and apply it over the current values.
    pub fn apply_stdin<R: Read>(&mut self, mut reader: R) -> Result<(), SignerError> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        let overrides: Map<String, Value> = serde_json::from_str(&raw)?;
        self.apply_overrides(&overrides);
        Ok(())
    }

    /// Replace every field whose key is present in `overrides`.
    ///
    /// A `null` value clears the field; absent keys keep the current value.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        let fields = [
            ("private_key", &mut self.private_key),
            ("api_key", &mut self.api_key),
            ("api_secret", &mut self.api_secret),
            ("api_passphrase", &mut self.api_passphrase),
        ];
        for (key, field) in fields {
            if let Some(value) = overrides.get(key) {
                *field = match value {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                };
            }
        }
    }

    /// Check that the private key and API key are present and non-empty.
    pub fn require(&self) -> Result<SigningCredentials<'_>, MissingCredential> {
        let private_key = non_empty(&self.private_key).ok_or(MissingCredential::PrivateKey)?;
        let api_key = non_empty(&self.api_key).ok_or(MissingCredential::ApiKey)?;
        Ok(SigningCredentials {
            private_key,
            api_key,
        })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn presence(value: &Option<String>) -> &'static str {
    if value.is_some() {
        "[REDACTED]"
    } else {
        "None"
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("private_key", &presence(&self.private_key))
            .field("api_key", &presence(&self.api_key))
            .field("api_secret", &presence(&self.api_secret))
            .field("api_passphrase", &presence(&self.api_passphrase))
            .finish()
    }
}

impl std::fmt::Debug for SigningCredentials<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningCredentials")
            .field("private_key", &"[REDACTED]")
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}
