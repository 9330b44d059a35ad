//! Configuration schema definitions.
//!
//! The on-disk layout mirrors the `transfer_config` table of the config file.
//! Field names keep the camelCase keys used by existing config files.

use serde::{Deserialize, Serialize};

/// Root of the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransferFileConfig {
    /// The single transfer to perform.
    pub transfer_config: TransferConfig,
}

/// Raw transfer settings as written in the config file.
#[derive(Clone, Deserialize, Serialize)]
pub struct TransferConfig {
    /// JSON-RPC endpoint URL.
    #[serde(rename = "rpcURL")]
    pub rpc_url: String,

    /// Base58-encoded 64-byte secret key of the sender.
    #[serde(rename = "privateKey")]
    pub private_key: String,

    /// Base58-encoded recipient address.
    #[serde(rename = "recipientPK")]
    pub recipient_pk: String,

    /// Amount in lamports.
    pub amount: u64,

    /// RPC request timeout in seconds.
    #[serde(rename = "rpcTimeoutSecs", default = "default_rpc_timeout_secs")]
    pub rpc_timeout_secs: u64,
}

fn default_rpc_timeout_secs() -> u64 {
    30
}

// Hand-written so the secret key never reaches a log line.
impl std::fmt::Debug for TransferConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferConfig")
            .field("rpc_url", &self.rpc_url)
            .field("private_key", &"<redacted>")
            .field("recipient_pk", &self.recipient_pk)
            .field("amount", &self.amount)
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .finish()
    }
}
