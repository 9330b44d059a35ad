//! Single-shot Solana funds transfer.
//!
//! Loads a transfer from `config.toml`, checks the sender's balance, builds
//! and signs a system transfer, submits it and reports the signature.

pub mod blockchain;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod observability;

pub use config::TransferRequest;
pub use error::AppError;
