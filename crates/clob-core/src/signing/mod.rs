//! Signing module for Polymarket CLOB orders.
//!
//! This module provides EIP-712 typed data signing for orders accepted by
//! the Polymarket CLOB API.
//!
//! # Architecture
//!
//! ```text
//! OrderArgs + CreateOrderOptions
//!       │
//!       ▼
//! OrderSigner ── OrderBuilder (tick-size rounding) ──► OrderData
//!       │                                                 │
//!       └──────── EIP-712 digest + secp256k1 ◄────────────┘
//!                          │
//!                          ▼
//!                     SignedOrder
//! ```
//!
//! # Example
//!
//! ```ignore
//! use clob_core::signing::{CreateOrderOptions, OrderArgs, OrderSide, OrderSigner, SigningProvider};
//!
//! let signer = OrderSigner::connect(&private_key, POLYGON_CHAIN_ID)?;
//! let args = OrderArgs::new(token_id, 0.55, 10.0, OrderSide::Buy);
//! let signed = signer.create_order(&args, &CreateOrderOptions::default()).await?;
//! ```

pub mod domain;
pub mod order_types;
pub mod provider;
pub mod rounding;
pub mod signer;

pub use domain::{
    exchange_address, Eip712Domain, OrderSide, SignatureType, AMOY_CTF_EXCHANGE_ADDRESS,
    AMOY_NEG_RISK_CTF_EXCHANGE_ADDRESS, CTF_EXCHANGE_ADDRESS, NEG_RISK_CTF_EXCHANGE_ADDRESS,
    POLYGON_AMOY_CHAIN_ID, POLYGON_CHAIN_ID,
};

pub use order_types::{parse_token_id, OrderBuilder, OrderData, OrderType, SignedOrder};

pub use provider::{CreateOrderOptions, OrderArgs, SigningProvider};

pub use rounding::{order_amounts, RoundConfig, TickSize};

pub use signer::OrderSigner;
