//! Order types for Polymarket CLOB signing.
//!
//! Defines the order data structures used for EIP-712 signing and the
//! field mapping handed back for submission to the Polymarket CLOB API.

use alloy_primitives::{Address, B256, U256};
use alloy_sol_types::SolValue;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{OrderSide, SignatureType};
use super::rounding::{order_amounts, TickSize};
use crate::{Error, Result};

/// Salts must stay within the IEEE 754 safe integer range (2^53 - 1).
const SALT_MASK: u64 = (1u64 << 53) - 1;

/// Raw order data for EIP-712 signing.
///
/// This matches the struct used by the CTF Exchange contract.
#[derive(Debug, Clone)]
pub struct OrderData {
    /// Random salt for uniqueness.
    pub salt: u64,
    /// Maker address (your wallet).
    pub maker: Address,
    /// Signer address (usually same as maker).
    pub signer: Address,
    /// Taker address (zero for any taker).
    pub taker: Address,
    /// Token ID of the outcome being traded.
    pub token_id: U256,
    /// Maker amount in base units.
    pub maker_amount: U256,
    /// Taker amount in base units.
    pub taker_amount: U256,
    /// Order expiration timestamp (unix seconds, 0 for none).
    pub expiration: U256,
    /// Nonce for order management.
    pub nonce: U256,
    /// Fee rate in basis points.
    pub fee_rate_bps: U256,
    /// Order side.
    pub side: OrderSide,
    /// Signature type.
    pub signature_type: SignatureType,
}

impl OrderData {
    /// Create a new order with generated salt.
    pub fn new(
        maker: Address,
        token_id: U256,
        side: OrderSide,
        maker_amount: U256,
        taker_amount: U256,
    ) -> Self {
        Self {
            salt: generate_salt(),
            maker,
            signer: maker,
            taker: Address::ZERO,
            token_id,
            maker_amount,
            taker_amount,
            expiration: U256::ZERO,
            nonce: U256::ZERO,
            fee_rate_bps: U256::ZERO,
            side,
            signature_type: SignatureType::Eoa,
        }
    }

    /// Compute the EIP-712 struct hash for this order.
    pub fn struct_hash(&self) -> B256 {
        let order_type_hash = alloy_primitives::keccak256(
            b"Order(uint256 salt,address maker,address signer,address taker,uint256 tokenId,uint256 makerAmount,uint256 takerAmount,uint256 expiration,uint256 nonce,uint256 feeRateBps,uint8 side,uint8 signatureType)",
        );

        // EIP-712 encodeData: every member is ABI-encoded into a 32-byte word.
        let encoded = (
            order_type_hash,
            U256::from(self.salt),
            self.maker,
            self.signer,
            self.taker,
            self.token_id,
            self.maker_amount,
            self.taker_amount,
            self.expiration,
            self.nonce,
            self.fee_rate_bps,
            U256::from(self.side.as_u8()),
            U256::from(self.signature_type.as_u8()),
        )
            .abi_encode();

        alloy_primitives::keccak256(&encoded)
    }
}

/// Generate a random salt for order uniqueness.
fn generate_salt() -> u64 {
    rand::random::<u64>() & SALT_MASK
}

/// A signed order ready for submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignedOrder {
    /// Order salt (must be a JSON number).
    pub salt: u64,
    /// Maker address as checksummed hex string.
    pub maker: String,
    /// Signer address as checksummed hex string.
    pub signer: String,
    /// Taker address as checksummed hex string.
    pub taker: String,
    /// Token ID as string.
    #[serde(rename = "tokenId")]
    pub token_id: String,
    /// Maker amount as string.
    #[serde(rename = "makerAmount")]
    pub maker_amount: String,
    /// Taker amount as string.
    #[serde(rename = "takerAmount")]
    pub taker_amount: String,
    /// Expiration timestamp as string.
    pub expiration: String,
    /// Nonce as string.
    pub nonce: String,
    /// Fee rate in basis points.
    #[serde(rename = "feeRateBps")]
    pub fee_rate_bps: String,
    /// Side ("BUY" or "SELL").
    pub side: String,
    /// Signature type.
    #[serde(rename = "signatureType")]
    pub signature_type: u8,
    /// EIP-712 signature as hex string.
    pub signature: String,
}

impl SignedOrder {
    /// Create from order data and signature.
    pub fn from_order_data(order: &OrderData, signature: String) -> Self {
        Self {
            salt: order.salt,
            maker: order.maker.to_checksum(None),
            signer: order.signer.to_checksum(None),
            taker: order.taker.to_checksum(None),
            token_id: order.token_id.to_string(),
            maker_amount: order.maker_amount.to_string(),
            taker_amount: order.taker_amount.to_string(),
            expiration: order.expiration.to_string(),
            nonce: order.nonce.to_string(),
            fee_rate_bps: order.fee_rate_bps.to_string(),
            side: order.side.to_string(),
            signature_type: order.signature_type.as_u8(),
            signature,
        }
    }
}

/// Order type for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Good-till-cancelled limit order.
    #[default]
    Gtc,
    /// Fill-or-kill market order.
    Fok,
    /// Good-till-date limit order.
    Gtd,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderType::Gtc => write!(f, "GTC"),
            OrderType::Fok => write!(f, "FOK"),
            OrderType::Gtd => write!(f, "GTD"),
        }
    }
}

/// Parse a decimal token id into a uint256.
pub fn parse_token_id(token_id: &str) -> Result<U256> {
    let trimmed = token_id.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidTokenId(token_id.to_string()));
    }
    U256::from_str_radix(trimmed, 10).map_err(|_| Error::InvalidTokenId(token_id.to_string()))
}

/// Order builder for creating orders with a fluent API.
#[derive(Debug, Clone)]
pub struct OrderBuilder {
    maker: Option<Address>,
    taker: Address,
    token_id: Option<U256>,
    side: OrderSide,
    price: Option<Decimal>,
    size: Option<Decimal>,
    tick_size: TickSize,
    expiration: U256,
    nonce: U256,
    fee_rate_bps: U256,
}

impl OrderBuilder {
    /// Create a new order builder.
    pub fn new() -> Self {
        Self {
            maker: None,
            taker: Address::ZERO,
            token_id: None,
            side: OrderSide::Buy,
            price: None,
            size: None,
            tick_size: TickSize::default(),
            expiration: U256::ZERO,
            nonce: U256::ZERO,
            fee_rate_bps: U256::ZERO,
        }
    }

    /// Set the maker address.
    pub fn maker(mut self, maker: Address) -> Self {
        self.maker = Some(maker);
        self
    }

    /// Restrict the order to a single taker.
    pub fn taker(mut self, taker: Address) -> Self {
        self.taker = taker;
        self
    }

    /// Set the token ID.
    pub fn token_id(mut self, token_id: U256) -> Self {
        self.token_id = Some(token_id);
        self
    }

    /// Set the order side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = side;
        self
    }

    /// Set the price (0.0 to 1.0).
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the size in outcome shares.
    pub fn size(mut self, size: Decimal) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the market tick size used for rounding.
    pub fn tick_size(mut self, tick_size: TickSize) -> Self {
        self.tick_size = tick_size;
        self
    }

    /// Set absolute expiration timestamp (0 for none).
    pub fn expires_at(mut self, timestamp: u64) -> Self {
        self.expiration = U256::from(timestamp);
        self
    }

    /// Set the nonce.
    pub fn nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }

    /// Set the fee rate in basis points.
    pub fn fee_rate_bps(mut self, fee_rate: u64) -> Self {
        self.fee_rate_bps = U256::from(fee_rate);
        self
    }

    /// Build the order data.
    pub fn build(self) -> Result<OrderData> {
        let (maker, token_id, price, size) =
            match (self.maker, self.token_id, self.price, self.size) {
                (Some(maker), Some(token_id), Some(price), Some(size)) => {
                    (maker, token_id, price, size)
                }
                _ => {
                    return Err(Error::Order {
                        message: "Failed to build order - missing required fields".to_string(),
                    })
                }
            };

        let (maker_amount, taker_amount) =
            order_amounts(self.side, size, price, self.tick_size.round_config())?;

        let mut order = OrderData::new(maker, token_id, self.side, maker_amount, taker_amount);
        order.taker = self.taker;
        order.expiration = self.expiration;
        order.nonce = self.nonce;
        order.fee_rate_bps = self.fee_rate_bps;

        Ok(order)
    }
}

impl Default for OrderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
