//! The build-and-sign boundary consumed by the command-line adapter.

use alloy_primitives::Address;
use async_trait::async_trait;

use super::domain::OrderSide;
use super::order_types::SignedOrder;
use super::rounding::TickSize;
use crate::Result;

/// Order parameters as supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderArgs {
    /// Decimal token ID of the outcome.
    pub token_id: String,
    /// Limit price per share.
    pub price: f64,
    /// Number of outcome shares.
    pub size: f64,
    pub side: OrderSide,
    /// Fee rate in basis points.
    pub fee_rate_bps: u64,
    pub nonce: u64,
    /// Unix timestamp, 0 for no expiration.
    pub expiration: u64,
    /// Restricts the order to one taker; zero for any.
    pub taker: Address,
}

impl OrderArgs {
    pub fn new(token_id: impl Into<String>, price: f64, size: f64, side: OrderSide) -> Self {
        Self {
            token_id: token_id.into(),
            price,
            size,
            side,
            fee_rate_bps: 0,
            nonce: 0,
            expiration: 0,
            taker: Address::ZERO,
        }
    }
}

/// Market-specific options affecting order construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CreateOrderOptions {
    pub tick_size: TickSize,
    /// Sign against the neg-risk exchange.
    pub neg_risk: bool,
}

/// Something that can turn [`OrderArgs`] into a [`SignedOrder`].
#[async_trait]
pub trait SigningProvider: Send + Sync {
    /// Address that funds and signs the orders.
    fn address(&self) -> Address;

    /// Build and sign a single order.
    async fn create_order(
        &self,
        args: &OrderArgs,
        options: &CreateOrderOptions,
    ) -> Result<SignedOrder>;
}
