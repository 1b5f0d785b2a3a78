//! Errors raised while resolving credentials or signing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignerError {
    #[error("failed to read credentials from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    /// Only the position is kept; serde_json messages can quote the input.
    #[error("invalid credentials JSON at line {line} column {column}")]
    CredentialsJson { line: usize, column: usize },

    #[error(transparent)]
    Provider(#[from] clob_core::Error),
}

impl From<serde_json::Error> for SignerError {
    fn from(err: serde_json::Error) -> Self {
        SignerError::CredentialsJson {
            line: err.line(),
            column: err.column(),
        }
    }
}

impl SignerError {
    /// Name reported in place of a message that had to be redacted.
    pub fn kind(&self) -> &'static str {
        match self {
            SignerError::Stdin(_) => "Stdin",
            SignerError::CredentialsJson { .. } => "CredentialsJson",
            SignerError::Provider(e) => e.kind(),
        }
    }
}
