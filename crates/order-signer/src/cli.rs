//! Command-line arguments.

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::{ArgAction, Parser, ValueEnum};

use clob_core::signing::{CreateOrderOptions, OrderArgs, OrderSide, OrderType, TickSize};

use crate::credentials::Credentials;

/// Sign a Polymarket CLOB order using EIP-712.
///
/// Prints one JSON object: the signed order body ready for `POST /order`,
/// or `{"error": ...}`.
#[derive(Debug, Parser)]
#[command(name = "signer", version)]
pub struct Cli {
    /// Read credentials JSON from stdin (private_key, api_key, api_secret, api_passphrase)
    #[arg(long)]
    pub credentials_stdin: bool,

    /// Ethereum private key (hex), prefer --credentials-stdin
    #[arg(long)]
    pub private_key: Option<String>,

    /// CLOB token ID
    #[arg(long)]
    pub token_id: String,

    /// Order price (0.01-0.99)
    #[arg(long, allow_negative_numbers = true)]
    pub price: f64,

    /// Order size in shares
    #[arg(long, allow_negative_numbers = true)]
    pub size: f64,

    /// Order side
    #[arg(long, value_enum)]
    pub side: SideArg,

    /// Order type
    #[arg(long, value_enum, default_value_t = OrderTypeArg::Gtc)]
    pub order_type: OrderTypeArg,

    /// Neg-risk market flag
    #[arg(
        long,
        action = ArgAction::Set,
        default_value = "false",
        value_parser = PossibleValuesParser::new(["true", "false"]).map(|s| s == "true"),
    )]
    pub neg_risk: bool,

    /// Tick size
    #[arg(long, value_enum, default_value_t = TickSizeArg::Hundredth)]
    pub tick_size: TickSizeArg,

    /// CLOB API key, prefer --credentials-stdin
    #[arg(long)]
    pub api_key: Option<String>,

    /// CLOB API secret, prefer --credentials-stdin
    #[arg(long)]
    pub api_secret: Option<String>,

    /// CLOB API passphrase, prefer --credentials-stdin
    #[arg(long)]
    pub api_passphrase: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SideArg {
    #[value(name = "BUY")]
    Buy,
    #[value(name = "SELL")]
    Sell,
}

impl From<SideArg> for OrderSide {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Buy => OrderSide::Buy,
            SideArg::Sell => OrderSide::Sell,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OrderTypeArg {
    #[value(name = "GTC")]
    Gtc,
    #[value(name = "FOK")]
    Fok,
    #[value(name = "GTD")]
    Gtd,
}

impl From<OrderTypeArg> for OrderType {
    fn from(order_type: OrderTypeArg) -> Self {
        match order_type {
            OrderTypeArg::Gtc => OrderType::Gtc,
            OrderTypeArg::Fok => OrderType::Fok,
            OrderTypeArg::Gtd => OrderType::Gtd,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TickSizeArg {
    #[value(name = "0.1")]
    Tenth,
    #[value(name = "0.01")]
    Hundredth,
    #[value(name = "0.001")]
    Thousandth,
    #[value(name = "0.0001")]
    TenThousandth,
}

impl From<TickSizeArg> for TickSize {
    fn from(tick: TickSizeArg) -> Self {
        match tick {
            TickSizeArg::Tenth => TickSize::Tenth,
            TickSizeArg::Hundredth => TickSize::Hundredth,
            TickSizeArg::Thousandth => TickSize::Thousandth,
            TickSizeArg::TenThousandth => TickSize::TenThousandth,
        }
    }
}

/// A parsed order request.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRequest {
    pub token_id: String,
    pub price: f64,
    pub size: f64,
    pub side: OrderSide,
    pub order_type: OrderType,
    pub neg_risk: bool,
    pub tick_size: TickSize,
}

impl OrderRequest {
    pub fn order_args(&self) -> OrderArgs {
        OrderArgs::new(self.token_id.clone(), self.price, self.size, self.side)
    }

    pub fn options(&self) -> CreateOrderOptions {
        CreateOrderOptions {
            tick_size: self.tick_size,
            neg_risk: self.neg_risk,
        }
    }
}

/// Everything one run of the signer needs from the command line.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub request: OrderRequest,
    pub credentials: Credentials,
    pub credentials_stdin: bool,
}

impl From<Cli> for Invocation {
    fn from(cli: Cli) -> Self {
        Self {
            request: OrderRequest {
                token_id: cli.token_id,
                price: cli.price,
                size: cli.size,
                side: cli.side.into(),
                order_type: cli.order_type.into(),
                neg_risk: cli.neg_risk,
                tick_size: cli.tick_size.into(),
            },
            credentials: Credentials {
                private_key: cli.private_key,
                api_key: cli.api_key,
                api_secret: cli.api_secret,
                api_passphrase: cli.api_passphrase,
            },
            credentials_stdin: cli.credentials_stdin,
        }
    }
}
