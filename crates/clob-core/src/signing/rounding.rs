//! Tick sizes and maker/taker amount computation.
//!
//! The CLOB rejects orders whose price, size or amounts carry more
//! precision than the market's tick size allows. Each tick size maps to a
//! [`RoundConfig`] with the allowed decimal places for the price, the
//! share size and the resulting collateral amount.

use alloy_primitives::U256;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::domain::OrderSide;
use crate::{Error, Result};

/// Collateral and outcome tokens both use 6 decimals on-chain.
const TOKEN_DECIMALS: u32 = 6;

/// Minimum price increment of a market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TickSize {
    /// 0.1
    Tenth,
    /// 0.01
    #[default]
    Hundredth,
    /// 0.001
    Thousandth,
    /// 0.0001
    TenThousandth,
}

impl TickSize {
    /// Tick size in its canonical string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            TickSize::Tenth => "0.1",
            TickSize::Hundredth => "0.01",
            TickSize::Thousandth => "0.001",
            TickSize::TenThousandth => "0.0001",
        }
    }

    /// Rounding limits for orders on a market with this tick size.
    pub fn round_config(&self) -> RoundConfig {
        match self {
            TickSize::Tenth => RoundConfig::new(1, 2, 3),
            TickSize::Hundredth => RoundConfig::new(2, 2, 4),
            TickSize::Thousandth => RoundConfig::new(3, 2, 5),
            TickSize::TenThousandth => RoundConfig::new(4, 2, 6),
        }
    }
}

impl std::fmt::Display for TickSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decimal places allowed for price, size and amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    pub price: u32,
    pub size: u32,
    pub amount: u32,
}

impl RoundConfig {
    pub const fn new(price: u32, size: u32, amount: u32) -> Self {
        Self {
            price,
            size,
            amount,
        }
    }
}

/// Compute `(maker_amount, taker_amount)` in token base units.
///
/// `size` is the number of outcome shares. For a BUY the maker gives
/// collateral and takes shares; for a SELL the maker gives shares and
/// takes collateral.
pub fn order_amounts(
    side: OrderSide,
    size: Decimal,
    price: Decimal,
    config: RoundConfig,
) -> Result<(U256, U256)> {
    let price = round_normal(price, config.price);
    let shares = round_down(size, config.size);
    let notional = shares.checked_mul(price).ok_or_else(|| Error::InvalidAmount {
        message: format!("{} shares at {} overflows", shares, price),
    })?;
    let collateral = fit_amount(notional, config.amount);

    let (maker, taker) = match side {
        OrderSide::Buy => (collateral, shares),
        OrderSide::Sell => (shares, collateral),
    };

    Ok((to_token_units(maker)?, to_token_units(taker)?))
}

/// Round half-to-even at `dp` decimal places.
pub fn round_normal(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
}

/// Round toward zero at `dp` decimal places.
pub fn round_down(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::ToZero)
}

/// Round away from zero at `dp` decimal places.
pub fn round_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::AwayFromZero)
}

/// Number of significant decimal places.
pub fn decimal_places(value: Decimal) -> u32 {
    value.normalize().scale()
}

/// Trim an amount to `amount_dp` decimals: first round up at four extra
/// places, then truncate if it is still too precise.
fn fit_amount(amount: Decimal, amount_dp: u32) -> Decimal {
    if decimal_places(amount) <= amount_dp {
        return amount;
    }
    let amount = round_up(amount, amount_dp + 4);
    if decimal_places(amount) > amount_dp {
        round_down(amount, amount_dp)
    } else {
        amount
    }
}

fn to_token_units(amount: Decimal) -> Result<U256> {
    let scaled = amount
        .checked_mul(Decimal::from(10u64.pow(TOKEN_DECIMALS)))
        .map(|units| round_normal(units, 0))
        .ok_or_else(|| Error::InvalidAmount {
            message: format!("{} cannot be expressed in token units", amount),
        })?;
    let units = scaled.to_u128().ok_or_else(|| Error::InvalidAmount {
        message: format!("{} cannot be expressed in token units", amount),
    })?;
    Ok(U256::from(units))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_tick_size_forms() {
        assert_eq!(TickSize::default().as_str(), "0.01");
        assert_eq!(TickSize::Tenth.to_string(), "0.1");
        assert_eq!(TickSize::TenThousandth.to_string(), "0.0001");
    }

    #[test]
    fn test_round_config_table() {
        assert_eq!(TickSize::Tenth.round_config(), RoundConfig::new(1, 2, 3));
        assert_eq!(TickSize::Hundredth.round_config(), RoundConfig::new(2, 2, 4));
        assert_eq!(TickSize::Thousandth.round_config(), RoundConfig::new(3, 2, 5));
        assert_eq!(TickSize::TenThousandth.round_config(), RoundConfig::new(4, 2, 6));
    }

    #[test]
    fn test_huge_size_is_an_error() {
        let err = order_amounts(
            OrderSide::Buy,
            dec("10000000000000000000000000"),
            dec("0.5"),
            TickSize::Hundredth.round_config(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));

        let err = order_amounts(
            OrderSide::Sell,
            Decimal::MAX,
            dec("0.99"),
            TickSize::Hundredth.round_config(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidAmount { .. }));
    }

    #[test]
    fn test_tiny_size_rounds_to_zero_shares() {
        let (maker, taker) = order_amounts(
            OrderSide::Buy,
            dec("0.001"),
            dec("0.5"),
            TickSize::Hundredth.round_config(),
        )
        .unwrap();

        assert_eq!(maker, U256::ZERO);
        assert_eq!(taker, U256::ZERO);
    }

    #[test]
    fn test_buy_amounts() {
        let (maker, taker) = order_amounts(
            OrderSide::Buy,
            dec("10"),
            dec("0.55"),
            TickSize::Hundredth.round_config(),
        )
        .unwrap();

        // Pays 5.50 USDC for 10 shares
        assert_eq!(maker, U256::from(5_500_000u64));
        assert_eq!(taker, U256::from(10_000_000u64));
    }

    #[test]
    fn test_sell_amounts() {
        let (maker, taker) = order_amounts(
            OrderSide::Sell,
            dec("100"),
            dec("0.5"),
            TickSize::Hundredth.round_config(),
        )
        .unwrap();

        // Gives 100 shares, receives 50 USDC
        assert_eq!(maker, U256::from(100_000_000u64));
        assert_eq!(taker, U256::from(50_000_000u64));
    }

    #[test]
    fn test_size_is_rounded_down() {
        let (maker, taker) = order_amounts(
            OrderSide::Buy,
            dec("12.349"),
            dec("0.123"),
            TickSize::Thousandth.round_config(),
        )
        .unwrap();

        // 12.34 shares * 0.123 = 1.51782
        assert_eq!(taker, U256::from(12_340_000u64));
        assert_eq!(maker, U256::from(1_517_820u64));
    }

    #[test]
    fn test_price_is_rounded_to_tick() {
        let (maker, _) = order_amounts(
            OrderSide::Buy,
            dec("100"),
            dec("0.565"),
            TickSize::Hundredth.round_config(),
        )
        .unwrap();

        // Half-even: 0.565 -> 0.56
        assert_eq!(maker, U256::from(56_000_000u64));
    }

    #[test]
    fn test_fit_amount() {
        assert_eq!(fit_amount(dec("1.5"), 4), dec("1.5"));
        assert_eq!(fit_amount(dec("1.2345678"), 4), dec("1.2345"));
        assert_eq!(fit_amount(dec("0.123456789"), 4), dec("0.1234"));
        // Round-up at amount + 4 places can bring it back in range
        assert_eq!(fit_amount(dec("0.999999999"), 4), dec("1"));
    }

    #[test]
    fn test_decimal_places_ignores_trailing_zeros() {
        assert_eq!(decimal_places(dec("1.2500")), 2);
        assert_eq!(decimal_places(dec("3")), 0);
    }
}
