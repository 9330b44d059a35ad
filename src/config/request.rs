//! The validated-at-parse-time form of the transfer configuration.

use std::str::FromStr;
use std::time::Duration;

use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use url::Url;

use crate::config::loader::ConfigError;
use crate::config::schema::TransferConfig;

/// Length of a Solana secret key (32-byte seed followed by the public key).
const SECRET_KEY_LEN: usize = 64;

/// One transfer, built once from configuration and never mutated.
pub struct TransferRequest {
    pub rpc_endpoint: Url,
    pub sender: Keypair,
    pub recipient: Pubkey,
    pub amount: u64,
    pub rpc_timeout: Duration,
}

impl TransferRequest {
    /// Decode the raw config strings into typed values.
    pub fn from_config(config: &TransferConfig) -> Result<Self, ConfigError> {
        let rpc_endpoint = parse_rpc_url(&config.rpc_url)?;
        let sender = parse_secret_key(&config.private_key)?;
        let recipient =
            Pubkey::from_str(config.recipient_pk.trim()).map_err(|e| ConfigError::InvalidField {
                field: "recipientPK",
                reason: e.to_string(),
            })?;
        if config.rpc_timeout_secs == 0 {
            return Err(ConfigError::InvalidField {
                field: "rpcTimeoutSecs",
                reason: "timeout must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            rpc_endpoint,
            sender,
            recipient,
            amount: config.amount,
            rpc_timeout: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    pub fn sender_pubkey(&self) -> Pubkey {
        self.sender.pubkey()
    }
}

impl std::fmt::Debug for TransferRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransferRequest")
            .field("rpc_endpoint", &self.rpc_endpoint.as_str())
            .field("sender", &self.sender.pubkey())
            .field("recipient", &self.recipient)
            .field("amount", &self.amount)
            .finish()
    }
}

fn parse_rpc_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidField {
        field: "rpcURL",
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidField {
            field: "rpcURL",
            reason: format!("unsupported scheme `{}`", other),
        }),
    }
}

// `Keypair::try_from` is not available across the whole 2.x line.
#[allow(deprecated)]
fn parse_secret_key(raw: &str) -> Result<Keypair, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidField {
        field: "privateKey",
        reason,
    };

    let bytes = bs58::decode(raw.trim())
        .into_vec()
        .map_err(|e| invalid(e.to_string()))?;
    if bytes.len() != SECRET_KEY_LEN {
        return Err(invalid(format!(
            "expected {} bytes, got {}",
            SECRET_KEY_LEN,
            bytes.len()
        )));
    }

    Keypair::from_bytes(&bytes).map_err(|e| invalid(e.to_string()))
}
