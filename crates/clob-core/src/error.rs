//! Error types for order construction and signing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("invalid private key")]
    InvalidPrivateKey,

    #[error("unsupported chain id: {0}")]
    UnsupportedChain(u64),

    #[error("invalid token id: {0}")]
    InvalidTokenId(String),

    #[error("invalid order size: {0}")]
    InvalidSize(String),

    #[error("invalid order amount: {message}")]
    InvalidAmount { message: String },

    #[error("Order error: {message}")]
    Order { message: String },

    #[error("Signing error: {message}")]
    Signing { message: String },
}

impl Error {
    /// Stable name of the error variant, used when a message has to be
    /// replaced by a generic one.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config { .. } => "Config",
            Error::InvalidPrivateKey => "InvalidPrivateKey",
            Error::UnsupportedChain(_) => "UnsupportedChain",
            Error::InvalidTokenId(_) => "InvalidTokenId",
            Error::InvalidSize(_) => "InvalidSize",
            Error::InvalidAmount { .. } => "InvalidAmount",
            Error::Order { .. } => "Order",
            Error::Signing { .. } => "Signing",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
