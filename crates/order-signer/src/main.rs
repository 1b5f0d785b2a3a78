//! `signer` binary: sign one Polymarket CLOB order and print it as JSON.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use clob_core::config::SignerConfig;
use clob_core::signing::OrderSigner;
use order_signer::{logging, run, Cli, Invocation};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Usage errors exit here, before any credential handling
    let cli = Cli::parse();

    let config = SignerConfig::from_env();
    logging::init(
        config
            .as_ref()
            .map(|c| c.log_format)
            .unwrap_or_default(),
    );

    // A config error is reported only after credential presence is checked
    let response = run(
        Invocation::from(cli),
        io::stdin().lock(),
        config.map(|c| c.chain_id),
        OrderSigner::connect,
    )
    .await;

    if let Err(e) = response.write_line(io::stdout().lock()) {
        error!(error = %e, "Failed to write response");
        return ExitCode::FAILURE;
    }

    ExitCode::from(response.exit_code())
}
