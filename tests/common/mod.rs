//! Shared utilities for integration testing.

use std::sync::Mutex;

use sol_transfer::blockchain::{BlockchainError, BlockchainResult, LedgerRpc, RpcStep};
use sol_transfer::TransferRequest;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;

/// Remote call observed by [`MockLedger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    GetBalance,
    GetLatestBlockhash,
    SendTransaction,
}

/// Scripted ledger that records every call made against it.
pub struct MockLedger {
    pub balance: Result<u64, String>,
    pub blockhash: Hash,
    pub signature: Signature,
    pub blockhash_error: Option<String>,
    pub send_error: Option<String>,
    calls: Mutex<Vec<Call>>,
    sent: Mutex<Vec<Transaction>>,
}

#[allow(dead_code)]
impl MockLedger {
    pub fn with_balance(balance: u64) -> Self {
        Self {
            balance: Ok(balance),
            blockhash: Hash::new_from_array([42u8; 32]),
            signature: Signature::from([7u8; 64]),
            blockhash_error: None,
            send_error: None,
            calls: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_balance(message: &str) -> Self {
        Self {
            balance: Err(message.to_string()),
            ..Self::with_balance(0)
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl LedgerRpc for MockLedger {
    async fn get_balance(&self, _account: &Pubkey) -> BlockchainResult<u64> {
        self.record(Call::GetBalance);
        self.balance.clone().map_err(|message| BlockchainError::Network {
            step: RpcStep::GetBalance,
            message,
        })
    }

    async fn get_latest_blockhash(&self) -> BlockchainResult<Hash> {
        self.record(Call::GetLatestBlockhash);
        if let Some(message) = &self.blockhash_error {
            return Err(BlockchainError::Network {
                step: RpcStep::GetLatestBlockhash,
                message: message.clone(),
            });
        }
        Ok(self.blockhash)
    }

    async fn send_transaction(&self, transaction: &Transaction) -> BlockchainResult<Signature> {
        self.record(Call::SendTransaction);
        if let Some(message) = &self.send_error {
            return Err(BlockchainError::Submission(message.clone()));
        }
        self.sent.lock().unwrap().push(transaction.clone());
        Ok(self.signature)
    }
}

/// A request for `amount` lamports between two fresh keypairs.
pub fn request(amount: u64) -> TransferRequest {
    TransferRequest {
        rpc_endpoint: "http://127.0.0.1:8899".parse().unwrap(),
        sender: Keypair::new(),
        recipient: Keypair::new().pubkey(),
        amount,
        rpc_timeout: std::time::Duration::from_secs(5),
    }
}
