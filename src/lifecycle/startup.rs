//! Run orchestration.
//!
//! # Order
//! - Load configuration and decode keys
//! - Build the ledger client (no request is sent yet)
//! - Validate the request, then execute the transfer
//!
//! Every failure is returned to the caller; nothing here exits the process.

use std::path::Path;

use solana_sdk::signature::Signature;

use crate::blockchain::{LedgerRpc, SolanaRpcClient, TransferExecutor};
use crate::config::{load_request, validate_request, TransferRequest};
use crate::error::AppError;

/// Perform the transfer described by the config file at `config_path`.
pub async fn run(config_path: &Path) -> Result<Signature, AppError> {
    let request = load_request(config_path)?;
    tracing::info!(
        sender = %request.sender_pubkey(),
        recipient = %request.recipient,
        amount = request.amount,
        "Configuration loaded"
    );

    let client = SolanaRpcClient::new(request.rpc_endpoint.clone(), request.rpc_timeout);
    execute_transfer(&client, &request).await
}

/// Validate `request` and run it against `rpc`.
pub async fn execute_transfer<R: LedgerRpc>(
    rpc: &R,
    request: &TransferRequest,
) -> Result<Signature, AppError> {
    validate_request(request)?;

    let executor = TransferExecutor::new(rpc, &request.sender, request.recipient, request.amount);
    let signature = executor.execute().await?;
    Ok(signature)
}
