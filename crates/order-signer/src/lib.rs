//! Order Signer
//!
//! Command-line adapter around [`clob_core`]: parses one order request,
//! resolves credentials from flags or standard input, signs the order and
//! reports the result as a single JSON line on standard output.

pub mod adapter;
pub mod cli;
pub mod credentials;
pub mod error;
pub mod logging;
pub mod output;
pub mod redact;

pub use adapter::run;
pub use cli::{Cli, Invocation, OrderRequest};
pub use credentials::{Credentials, MissingCredential};
pub use error::SignerError;
pub use output::{ErrorResult, Response, SignedOrderResult};
