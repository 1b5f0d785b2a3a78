//! CLOB Order Signer
//!
//! This is the root crate that provides test and benchmark access to the
//! workspace members:
//!
//! - `clob-core`: order construction, tick-size rounding, EIP-712 signing
//! - `order-signer`: the `signer` command-line adapter

// Re-export for integration tests and benchmarks
pub use clob_core as core;
pub use order_signer as adapter;
