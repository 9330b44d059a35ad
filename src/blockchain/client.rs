//! Ledger RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint
//! - Query chain state at `finalized` commitment (balances, blockhash)
//! - Submit signed transactions
//! - Turn timeouts and transport errors into [`BlockchainError`]

use std::future::Future;
use std::time::Duration;

use solana_client::client_error::ClientError;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tokio::time::timeout;
use url::Url;

use crate::blockchain::types::{BlockchainError, BlockchainResult, RpcStep};

/// The remote calls a transfer needs from a node.
///
/// Reads are made at `finalized` commitment.
#[allow(async_fn_in_trait)]
pub trait LedgerRpc {
    /// Lamport balance of `account`.
    async fn get_balance(&self, account: &Pubkey) -> BlockchainResult<u64>;

    /// Most recent finalized blockhash.
    async fn get_latest_blockhash(&self) -> BlockchainResult<Hash>;

    /// Submit a signed transaction and return its signature.
    async fn send_transaction(&self, transaction: &Transaction) -> BlockchainResult<Signature>;
}

/// [`LedgerRpc`] backed by a Solana JSON-RPC node.
pub struct SolanaRpcClient {
    rpc: RpcClient,
    rpc_url: Url,
    timeout_duration: Duration,
}

impl SolanaRpcClient {
    /// Create a new client. No request is made until the first call.
    pub fn new(rpc_url: Url, timeout_duration: Duration) -> Self {
        let rpc = RpcClient::new_with_timeout_and_commitment(
            rpc_url.to_string(),
            timeout_duration,
            CommitmentConfig::finalized(),
        );

        tracing::info!(
            rpc_url = %rpc_url,
            timeout_secs = timeout_duration.as_secs(),
            "Ledger client initialized"
        );

        Self {
            rpc,
            rpc_url,
            timeout_duration,
        }
    }

    /// Run one RPC future under the configured timeout.
    async fn call<T, F>(&self, step: RpcStep, fut: F) -> BlockchainResult<T>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::warn!(step = %step, error = %e, "RPC error");
                Err(BlockchainError::Network {
                    step,
                    message: e.to_string(),
                })
            }
            Err(_) => {
                tracing::warn!(step = %step, "RPC timeout");
                Err(BlockchainError::Timeout {
                    step,
                    secs: self.timeout_duration.as_secs(),
                })
            }
        }
    }
}

impl LedgerRpc for SolanaRpcClient {
    async fn get_balance(&self, account: &Pubkey) -> BlockchainResult<u64> {
        let response = self
            .call(
                RpcStep::GetBalance,
                self.rpc
                    .get_balance_with_commitment(account, CommitmentConfig::finalized()),
            )
            .await?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(&self) -> BlockchainResult<Hash> {
        let (blockhash, last_valid_block_height) = self
            .call(
                RpcStep::GetLatestBlockhash,
                self.rpc
                    .get_latest_blockhash_with_commitment(CommitmentConfig::finalized()),
            )
            .await?;
        tracing::debug!(%blockhash, last_valid_block_height, "Fetched latest blockhash");
        Ok(blockhash)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> BlockchainResult<Signature> {
        self.call(RpcStep::SendTransaction, self.rpc.send_transaction(transaction))
            .await
            .map_err(|e| match e {
                BlockchainError::Network { message, .. } => BlockchainError::Submission(message),
                BlockchainError::Timeout { secs, .. } => {
                    BlockchainError::Submission(format!("timed out after {} seconds", secs))
                }
                other => other,
            })
    }
}

impl std::fmt::Debug for SolanaRpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SolanaRpcClient")
            .field("rpc_url", &self.rpc_url.as_str())
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::signature::{Keypair, Signer};

    fn unreachable_client() -> SolanaRpcClient {
        // Nothing listens on the discard port.
        SolanaRpcClient::new("http://127.0.0.1:9".parse().unwrap(), Duration::from_secs(2))
    }

    #[tokio::test]
    async fn test_client_creation_is_lazy() {
        let client = unreachable_client();
        let rendered = format!("{:?}", client);
        assert!(rendered.contains("http://127.0.0.1:9/"));
        assert!(rendered.contains("timeout_secs: 2"));
    }

    #[tokio::test]
    async fn test_balance_error_is_tagged_with_step() {
        let client = unreachable_client();
        let err = client
            .get_balance(&Keypair::new().pubkey())
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("failed to get account balance"));
    }

    #[tokio::test]
    async fn test_blockhash_error_is_tagged_with_step() {
        let client = unreachable_client();
        let err = client.get_latest_blockhash().await.unwrap_err();
        assert!(err.to_string().starts_with("failed to get recent blockhash"));
    }
}
