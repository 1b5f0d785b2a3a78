//! CLOB Core Library
//!
//! EIP-712 order construction and signing for the Polymarket CLOB.
//! Nothing in this crate performs network I/O; signed orders are handed
//! back to the caller for submission.

pub mod config;
pub mod error;
pub mod signing;

pub use error::{Error, Result};
