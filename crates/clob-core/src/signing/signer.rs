//! Order signing for Polymarket CLOB.
//!
//! Provides EIP-712 typed data signing for orders against the CTF
//! Exchange (or the neg-risk exchange) of the configured chain.

use alloy_primitives::{Address, B256};
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use anyhow::Context;
use async_trait::async_trait;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use tracing::debug;

use super::domain::{exchange_address, Eip712Domain};
use super::order_types::{parse_token_id, OrderBuilder, OrderData, SignedOrder};
use super::provider::{CreateOrderOptions, OrderArgs, SigningProvider};
use crate::{Error, Result};

/// Order signer for Polymarket CLOB.
///
/// Holds the wallet key and the chain it signs for. The maker and signer
/// of every order is the address derived from the key.
#[derive(Clone)]
pub struct OrderSigner {
    signer: PrivateKeySigner,
    chain_id: u64,
}

impl OrderSigner {
    /// Create a new order signer for `chain_id`.
    pub fn new(signer: PrivateKeySigner, chain_id: u64) -> Result<Self> {
        // Reject chains without a known exchange up front
        exchange_address(chain_id, false)?;
        Ok(Self { signer, chain_id })
    }

    /// Create a signer from a hex private key (with or without `0x`).
    ///
    /// The key text never ends up in the returned error.
    pub fn connect(private_key: &str, chain_id: u64) -> Result<Self> {
        let signer = private_key
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|_| Error::InvalidPrivateKey)?;
        Self::new(signer, chain_id)
    }

    /// Get the signer's address.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Get an order builder pre-configured with the maker address.
    pub fn order_builder(&self) -> OrderBuilder {
        OrderBuilder::new().maker(self.address())
    }

    /// Sign an order and return the signed order ready for submission.
    pub async fn sign_order(&self, order: &OrderData, neg_risk: bool) -> Result<SignedOrder> {
        let domain = Eip712Domain::exchange(self.chain_id, neg_risk)?;
        let signature = self
            .sign_typed_data(order, &domain)
            .await
            .map_err(|e| Error::Signing {
                message: format!("{:#}", e),
            })?;
        Ok(SignedOrder::from_order_data(order, signature))
    }

    /// Sign order data using EIP-712 typed data signing.
    async fn sign_typed_data(
        &self,
        order: &OrderData,
        domain: &Eip712Domain,
    ) -> anyhow::Result<String> {
        let digest = compute_typed_data_hash(domain.separator(), order.struct_hash());

        let signature = self
            .signer
            .sign_hash(&digest)
            .await
            .context("Failed to sign order")?;

        Ok(format!("0x{}", hex::encode(signature.as_bytes())))
    }
}

#[async_trait]
impl SigningProvider for OrderSigner {
    fn address(&self) -> Address {
        OrderSigner::address(self)
    }

    async fn create_order(
        &self,
        args: &OrderArgs,
        options: &CreateOrderOptions,
    ) -> Result<SignedOrder> {
        let price = to_decimal("price", args.price)?;
        let size = to_decimal("size", args.size)?;

        let tick = options.tick_size;
        if size <= Decimal::ZERO {
            return Err(Error::InvalidSize(args.size.to_string()));
        }

        let order = self
            .order_builder()
            .token_id(parse_token_id(&args.token_id)?)
            .taker(args.taker)
            .side(args.side)
            .price(price)
            .size(size)
            .tick_size(tick)
            .expires_at(args.expiration)
            .nonce(alloy_primitives::U256::from(args.nonce))
            .fee_rate_bps(args.fee_rate_bps)
            .build()?;

        debug!(
            side = %args.side,
            tick_size = %tick,
            neg_risk = options.neg_risk,
            maker_amount = %order.maker_amount,
            taker_amount = %order.taker_amount,
            "Order built with amounts"
        );

        self.sign_order(&order, options.neg_risk).await
    }
}

fn to_decimal(field: &str, value: f64) -> Result<Decimal> {
    if !value.is_finite() {
        return Err(Error::InvalidAmount {
            message: format!("{} must be a finite number", field),
        });
    }
    Decimal::from_f64(value).ok_or_else(|| Error::InvalidAmount {
        message: format!("{} is out of range", field),
    })
}

/// Compute the EIP-712 typed data hash:
/// keccak256("\x19\x01" ++ domainSeparator ++ structHash).
fn compute_typed_data_hash(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut data = [0u8; 66];
    data[0] = 0x19;
    data[1] = 0x01;
    data[2..34].copy_from_slice(domain_separator.as_slice());
    data[34..].copy_from_slice(struct_hash.as_slice());
    alloy_primitives::keccak256(data)
}

impl std::fmt::Debug for OrderSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderSigner")
            .field("address", &format!("{:?}", self.address()))
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::domain::{OrderSide, NEG_RISK_CTF_EXCHANGE_ADDRESS, POLYGON_CHAIN_ID};
    use crate::signing::rounding::TickSize;
    use alloy_primitives::U256;
    use alloy_sol_types::SolStruct;

    // Test private key (DO NOT USE IN PRODUCTION)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const TEST_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";
    const TOKEN_ID: &str = "1234567890";

    alloy_sol_types::sol! {
        struct Order {
            uint256 salt;
            address maker;
            address signer;
            address taker;
            uint256 tokenId;
            uint256 makerAmount;
            uint256 takerAmount;
            uint256 expiration;
            uint256 nonce;
            uint256 feeRateBps;
            uint8 side;
            uint8 signatureType;
        }
    }

    fn test_signer() -> OrderSigner {
        OrderSigner::connect(TEST_PRIVATE_KEY, POLYGON_CHAIN_ID).unwrap()
    }

    #[test]
    fn test_order_signer_creation() {
        let signer = test_signer();
        assert_eq!(signer.address().to_checksum(None), TEST_ADDRESS);
        assert!(format!("{:?}", signer).contains("chain_id: 137"));
    }

    #[test]
    fn test_connect_accepts_0x_prefix() {
        let signer =
            OrderSigner::connect(&format!("0x{}", TEST_PRIVATE_KEY), POLYGON_CHAIN_ID).unwrap();
        assert_eq!(signer.address().to_checksum(None), TEST_ADDRESS);
    }

    #[test]
    fn test_connect_rejects_bad_key() {
        let err = OrderSigner::connect("0xnot-a-key", POLYGON_CHAIN_ID).unwrap_err();
        assert!(matches!(err, Error::InvalidPrivateKey));
        assert!(!err.to_string().contains("not-a-key"));
    }

    #[test]
    fn test_connect_rejects_unknown_chain() {
        let err = OrderSigner::connect(TEST_PRIVATE_KEY, 1).unwrap_err();
        assert!(matches!(err, Error::UnsupportedChain(1)));
    }

    #[test]
    fn test_typed_data_hash_matches_sol_types() {
        let signer = test_signer();
        let mut order = signer
            .order_builder()
            .token_id(U256::from(123u64))
            .side(OrderSide::Buy)
            .price(Decimal::new(50, 2))
            .size(Decimal::from(100u64))
            .build()
            .unwrap();
        order.salt = 999;

        let reference = Order {
            salt: U256::from(999u64),
            maker: signer.address(),
            signer: signer.address(),
            taker: Address::ZERO,
            tokenId: U256::from(123u64),
            makerAmount: order.maker_amount,
            takerAmount: order.taker_amount,
            expiration: U256::ZERO,
            nonce: U256::ZERO,
            feeRateBps: U256::ZERO,
            side: 0,
            signatureType: 0,
        };
        let domain = alloy_sol_types::eip712_domain! {
            name: "Polymarket CTF Exchange",
            version: "1",
            chain_id: 137,
            verifying_contract: NEG_RISK_CTF_EXCHANGE_ADDRESS,
        };

        let ours = compute_typed_data_hash(
            Eip712Domain::exchange(POLYGON_CHAIN_ID, true)
                .unwrap()
                .separator(),
            order.struct_hash(),
        );
        assert_eq!(ours, reference.eip712_signing_hash(&domain));
    }

    #[tokio::test]
    async fn test_create_order() {
        let signer = test_signer();
        let args = OrderArgs::new(TOKEN_ID, 0.55, 10.0, OrderSide::Buy);

        let signed = signer
            .create_order(&args, &CreateOrderOptions::default())
            .await
            .unwrap();

        // Signature should be 0x + 130 hex chars (65 bytes)
        assert!(signed.signature.starts_with("0x"));
        assert_eq!(signed.signature.len(), 132);
        assert_eq!(signed.side, "BUY");
        assert_eq!(signed.maker, TEST_ADDRESS);
        assert_eq!(signed.signer, TEST_ADDRESS);
        assert_eq!(signed.token_id, TOKEN_ID);
        assert_eq!(signed.maker_amount, "5500000");
        assert_eq!(signed.taker_amount, "10000000");
        assert_eq!(signed.expiration, "0");
        assert_eq!(signed.nonce, "0");
        assert_eq!(signed.signature_type, 0);
    }

    #[tokio::test]
    async fn test_create_sell_order() {
        let signer = test_signer();
        let args = OrderArgs::new(TOKEN_ID, 0.5, 100.0, OrderSide::Sell);
        let options = CreateOrderOptions {
            tick_size: TickSize::Hundredth,
            neg_risk: true,
        };

        let signed = signer.create_order(&args, &options).await.unwrap();

        assert_eq!(signed.side, "SELL");
        assert_eq!(signed.maker_amount, "100000000");
        assert_eq!(signed.taker_amount, "50000000");
    }

    #[tokio::test]
    async fn test_price_beyond_tick_bounds_is_signed() {
        let signer = test_signer();
        let options = CreateOrderOptions::default();

        // 0.996 rounds to 1.00 at tick 0.01
        let high = signer
            .create_order(&OrderArgs::new(TOKEN_ID, 0.996, 10.0, OrderSide::Buy), &options)
            .await
            .unwrap();
        assert_eq!(high.maker_amount, "10000000");
        assert_eq!(high.taker_amount, "10000000");

        // 0.004 rounds to 0.00
        let low = signer
            .create_order(&OrderArgs::new(TOKEN_ID, 0.004, 10.0, OrderSide::Buy), &options)
            .await
            .unwrap();
        assert_eq!(low.maker_amount, "0");
        assert_eq!(low.signature.len(), 132);
    }

    #[tokio::test]
    async fn test_price_kept_by_finer_tick() {
        let signer = test_signer();
        let args = OrderArgs::new(TOKEN_ID, 0.995, 10.0, OrderSide::Buy);
        let options = CreateOrderOptions {
            tick_size: TickSize::Thousandth,
            neg_risk: false,
        };

        let signed = signer.create_order(&args, &options).await.unwrap();
        assert_eq!(signed.maker_amount, "9950000");
    }

    #[tokio::test]
    async fn test_invalid_size() {
        let signer = test_signer();
        let options = CreateOrderOptions::default();

        let err = signer
            .create_order(&OrderArgs::new(TOKEN_ID, 0.5, 0.0, OrderSide::Buy), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSize(_)));

        let err = signer
            .create_order(&OrderArgs::new(TOKEN_ID, 0.5, -1.0, OrderSide::Buy), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidSize(_)));

        let err = signer
            .create_order(&OrderArgs::new(TOKEN_ID, 0.5, f64::NAN, OrderSide::Buy), &options)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));
    }

    #[tokio::test]
    async fn test_tiny_size_is_signed_with_zero_amounts() {
        let signer = test_signer();
        let signed = signer
            .create_order(
                &OrderArgs::new(TOKEN_ID, 0.5, 0.001, OrderSide::Buy),
                &CreateOrderOptions::default(),
            )
            .await
            .unwrap();

        assert_eq!(signed.maker_amount, "0");
        assert_eq!(signed.taker_amount, "0");
    }

    #[tokio::test]
    async fn test_huge_size_is_an_amount_error() {
        let signer = test_signer();
        let err = signer
            .create_order(
                &OrderArgs::new(TOKEN_ID, 0.5, 1e25, OrderSide::Buy),
                &CreateOrderOptions::default(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, Error::InvalidAmount { .. }));
    }

    #[tokio::test]
    async fn test_invalid_token_id() {
        let signer = test_signer();
        let err = signer
            .create_order(
                &OrderArgs::new("not-a-number", 0.5, 10.0, OrderSide::Buy),
                &CreateOrderOptions::default(),
            )
            .await
            .unwrap_err();
        assert_eq!(err.kind(), "InvalidTokenId");
    }

    #[test]
    fn test_signatures_are_deterministic() {
        let signer = test_signer();

        let mut order1 = OrderData::new(
            signer.address(),
            U256::from(123u64),
            OrderSide::Buy,
            U256::from(100u64),
            U256::from(200u64),
        );
        order1.salt = 999; // Fixed salt
        let order2 = order1.clone();

        let signed1 = tokio_test::block_on(signer.sign_order(&order1, false)).unwrap();
        let signed2 = tokio_test::block_on(signer.sign_order(&order2, false)).unwrap();

        // Same order data should produce same signature
        assert_eq!(signed1.signature, signed2.signature);

        // A different exchange yields a different signature
        let neg_risk = tokio_test::block_on(signer.sign_order(&order1, true)).unwrap();
        assert_ne!(signed1.signature, neg_risk.signature);
    }

    #[test]
    fn test_debug_does_not_expose_key() {
        let signer = test_signer();
        let debug_str = format!("{:?}", signer);

        assert!(debug_str.contains("OrderSigner"));
        assert!(debug_str.contains("address"));
        assert!(!debug_str.contains(TEST_PRIVATE_KEY));
    }
}
