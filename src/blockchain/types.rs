//! Chain-specific types and error definitions.

use thiserror::Error;

/// Remote call that failed, used to tag network errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcStep {
    GetBalance,
    GetLatestBlockhash,
    SendTransaction,
}

impl std::fmt::Display for RpcStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let step = match self {
            RpcStep::GetBalance => "get account balance",
            RpcStep::GetLatestBlockhash => "get recent blockhash",
            RpcStep::SendTransaction => "send transaction",
        };
        f.write_str(step)
    }
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("failed to {step}: {message}")]
    Network { step: RpcStep, message: String },

    /// RPC request timed out.
    #[error("failed to {step}: timed out after {secs} seconds")]
    Timeout { step: RpcStep, secs: u64 },

    /// Sender cannot cover the transfer.
    #[error("insufficient balance: balance={balance}, required={required}")]
    InsufficientFunds { balance: u64, required: u64 },

    /// No key for a required signer, or the signer itself failed.
    #[error("unable to sign transaction: {0}")]
    Signing(String),

    /// Node rejected the signed transaction.
    #[error("failed to send transaction: {0}")]
    Submission(String),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
