//! JSON shapes written to standard output.

use serde::Serialize;
use std::io::{self, Write};

use clob_core::signing::{OrderType, SignedOrder};

use crate::error::SignerError;
use crate::redact::sanitize;

/// Body expected by the CLOB `POST /order` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct SignedOrderResult {
    pub order: SignedOrder,
    /// API key of the order owner (not the wallet address).
    pub owner: String,
    #[serde(rename = "orderType")]
    pub order_type: OrderType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResult {
    pub error: String,
}

/// The single object printed by one invocation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Response {
    Signed(SignedOrderResult),
    Error(ErrorResult),
}

impl Response {
    pub fn signed(order: SignedOrder, owner: impl Into<String>, order_type: OrderType) -> Self {
        Response::Signed(SignedOrderResult {
            order,
            owner: owner.into(),
            order_type,
        })
    }

    /// An error whose message is known not to carry secrets.
    pub fn error(message: impl Into<String>) -> Self {
        Response::Error(ErrorResult {
            error: message.into(),
        })
    }

    /// An error caught while signing, passed through redaction.
    pub fn failure(err: &SignerError) -> Self {
        Self::error(sanitize(err.kind(), &err.to_string()))
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Response::Signed(_) => 0,
            Response::Error(_) => 1,
        }
    }

    /// Write the response as one newline-terminated JSON line.
    pub fn write_line<W: Write>(&self, mut writer: W) -> io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writer.write_all(b"\n")?;
        writer.flush()
    }
}
