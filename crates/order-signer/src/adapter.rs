//! One signing invocation, from parsed arguments to the printed response.
//!
//! Credentials are resolved and checked before the signing provider is
//! constructed, so a missing key never touches the signing code. A bad chain
//! configuration only surfaces once the credentials are known to be present.
//! Errors from reading stdin, connecting the provider or signing all end up
//! as a redacted [`Response::Error`].

use std::io::Read;

use clob_core::signing::SigningProvider;
use tracing::{debug, info};

use crate::cli::Invocation;
use crate::error::SignerError;
use crate::output::Response;

/// Run one invocation.
///
/// `connect` builds the signing provider from the resolved private key and
/// `chain_id`; it is called at most once and only after validation.
pub async fn run<R, P, C>(
    invocation: Invocation,
    stdin: R,
    chain_id: clob_core::Result<u64>,
    connect: C,
) -> Response
where
    R: Read,
    P: SigningProvider,
    C: FnOnce(&str, u64) -> clob_core::Result<P>,
{
    match sign(invocation, stdin, chain_id, connect).await {
        Ok(response) => response,
        Err(e) => {
            debug!(kind = e.kind(), "Signing failed");
            Response::failure(&e)
        }
    }
}

async fn sign<R, P, C>(
    invocation: Invocation,
    stdin: R,
    chain_id: clob_core::Result<u64>,
    connect: C,
) -> Result<Response, SignerError>
where
    R: Read,
    P: SigningProvider,
    C: FnOnce(&str, u64) -> clob_core::Result<P>,
{
    let Invocation {
        request,
        mut credentials,
        credentials_stdin,
    } = invocation;

    if credentials_stdin {
        credentials.apply_stdin(stdin)?;
    }

    let resolved = match credentials.require() {
        Ok(resolved) => resolved,
        Err(missing) => return Ok(Response::error(missing.to_string())),
    };

    let chain_id = chain_id?;
    let provider = connect(resolved.private_key, chain_id)?;

    info!(
        address = %provider.address(),
        token_id = %request.token_id,
        side = %request.side,
        order_type = %request.order_type,
        tick_size = %request.tick_size,
        neg_risk = request.neg_risk,
        chain_id,
        "Signing order"
    );

    let signed = provider
        .create_order(&request.order_args(), &request.options())
        .await?;

    debug!(salt = signed.salt, "Order signed");

    Ok(Response::signed(signed, resolved.api_key, request.order_type))
}
