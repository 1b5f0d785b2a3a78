//! EIP-712 domain separators for Polymarket CLOB.
//!
//! Polymarket uses EIP-712 typed data signing for order authentication.
//! This module defines the exchange contracts per chain and the domain
//! separator built from them.

use alloy_primitives::{address, Address, B256, U256};
use alloy_sol_types::SolValue;

use crate::{Error, Result};

/// Chain ID for Polygon mainnet.
pub const POLYGON_CHAIN_ID: u64 = 137;

/// Chain ID for Polygon Amoy testnet.
pub const POLYGON_AMOY_CHAIN_ID: u64 = 80002;

/// CTF Exchange contract address on Polygon mainnet.
pub const CTF_EXCHANGE_ADDRESS: Address = address!("0x4bFb41d5B3570DeFd03C39a9A4D8dE6Bd8B8982E");

/// Neg Risk CTF Exchange contract address on Polygon mainnet.
pub const NEG_RISK_CTF_EXCHANGE_ADDRESS: Address =
    address!("0xC5d563A36AE78145C45a50134d48A1215220f80a");

/// CTF Exchange contract address on Amoy.
pub const AMOY_CTF_EXCHANGE_ADDRESS: Address =
    address!("0xdFE02Eb6733538f8Ea35D585af8DE5958AD99E40");

/// Neg Risk CTF Exchange contract address on Amoy.
pub const AMOY_NEG_RISK_CTF_EXCHANGE_ADDRESS: Address =
    address!("0xd91E80cF2E7be2e162c6513ceD06f1dD0dA35296");

const EXCHANGE_DOMAIN_NAME: &str = "Polymarket CTF Exchange";
const EXCHANGE_DOMAIN_VERSION: &str = "1";

/// Resolve the exchange contract that verifies orders on `chain_id`.
pub fn exchange_address(chain_id: u64, neg_risk: bool) -> Result<Address> {
    match (chain_id, neg_risk) {
        (POLYGON_CHAIN_ID, false) => Ok(CTF_EXCHANGE_ADDRESS),
        (POLYGON_CHAIN_ID, true) => Ok(NEG_RISK_CTF_EXCHANGE_ADDRESS),
        (POLYGON_AMOY_CHAIN_ID, false) => Ok(AMOY_CTF_EXCHANGE_ADDRESS),
        (POLYGON_AMOY_CHAIN_ID, true) => Ok(AMOY_NEG_RISK_CTF_EXCHANGE_ADDRESS),
        (other, _) => Err(Error::UnsupportedChain(other)),
    }
}

/// EIP-712 domain separator for order signing.
#[derive(Debug, Clone)]
pub struct Eip712Domain {
    /// Domain name.
    pub name: String,
    /// Domain version.
    pub version: String,
    /// Chain ID.
    pub chain_id: U256,
    /// Verifying contract address.
    pub verifying_contract: Address,
}

impl Eip712Domain {
    /// Create the exchange domain for a chain, picking the neg-risk
    /// exchange when requested.
    pub fn exchange(chain_id: u64, neg_risk: bool) -> Result<Self> {
        Ok(Self {
            name: EXCHANGE_DOMAIN_NAME.to_string(),
            version: EXCHANGE_DOMAIN_VERSION.to_string(),
            chain_id: U256::from(chain_id),
            verifying_contract: exchange_address(chain_id, neg_risk)?,
        })
    }

    /// Compute the EIP-712 domain separator hash.
    pub fn separator(&self) -> B256 {
        let domain_type_hash = alloy_primitives::keccak256(
            b"EIP712Domain(string name,string version,uint256 chainId,address verifyingContract)",
        );

        let name_hash = alloy_primitives::keccak256(self.name.as_bytes());
        let version_hash = alloy_primitives::keccak256(self.version.as_bytes());

        // encodeData: every member occupies a full 32-byte word
        let encoded = (
            domain_type_hash,
            name_hash,
            version_hash,
            self.chain_id,
            self.verifying_contract,
        )
            .abi_encode();

        alloy_primitives::keccak256(&encoded)
    }
}

/// Order side (buy/sell).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderSide {
    Buy = 0,
    Sell = 1,
}

impl OrderSide {
    /// Get the numeric value for signing.
    pub fn as_u8(&self) -> u8 {
        match self {
            OrderSide::Buy => 0,
            OrderSide::Sell => 1,
        }
    }
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

/// Signature type for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignatureType {
    /// EOA signature (most common).
    #[default]
    Eoa = 0,
    /// Poly proxy wallet signature.
    PolyProxy = 1,
    /// Poly Gnosis Safe signature.
    PolyGnosisSafe = 2,
}

impl SignatureType {
    /// Get the numeric value for signing.
    pub fn as_u8(&self) -> u8 {
        match self {
            SignatureType::Eoa => 0,
            SignatureType::PolyProxy => 1,
            SignatureType::PolyGnosisSafe => 2,
        }
    }
}
