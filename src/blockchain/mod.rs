//! Ledger integration subsystem.
//!
//! # Data Flow
//! ```text
//! TransferRequest (sender key, recipient, amount)
//!     → client.rs (RPC connection with timeouts)
//!     → transaction.rs (balance check, build, submit)
//!     → wallet.rs (key lookup, signing)
//! ```
//!
//! # Security Constraints
//! - Never log private keys
//! - All RPC calls have a configurable timeout
//! - Reads are made at `finalized` commitment

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::{LedgerRpc, SolanaRpcClient};
pub use transaction::{build_transfer_transaction, TransferExecutor};
pub use types::{BlockchainError, BlockchainResult, RpcStep};
pub use wallet::SignerSet;
