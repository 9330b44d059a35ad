//! Transfer transaction building, signing and submission.
//!
//! # Responsibilities
//! - Check the sender can cover the amount
//! - Build a single-instruction system transfer with the sender as fee payer
//! - Sign it with the keys in a [`SignerSet`]
//! - Submit it and hand back the signature

use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use solana_system_interface::instruction as system_instruction;

use crate::blockchain::client::LedgerRpc;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::blockchain::wallet::SignerSet;

/// Unsigned transfer of `lamports` from `sender` to `recipient`, paid for by
/// `sender` and anchored to `blockhash`.
pub fn build_transfer_transaction(
    sender: &Pubkey,
    recipient: &Pubkey,
    lamports: u64,
    blockhash: &Hash,
) -> Transaction {
    let instruction = system_instruction::transfer(sender, recipient, lamports);
    let message = Message::new_with_blockhash(&[instruction], Some(sender), blockhash);
    Transaction::new_unsigned(message)
}

/// Runs one transfer against a [`LedgerRpc`].
pub struct TransferExecutor<'a, R> {
    rpc: &'a R,
    sender: &'a Keypair,
    recipient: Pubkey,
    amount: u64,
}

impl<'a, R: LedgerRpc> TransferExecutor<'a, R> {
    pub fn new(rpc: &'a R, sender: &'a Keypair, recipient: Pubkey, amount: u64) -> Self {
        Self {
            rpc,
            sender,
            recipient,
            amount,
        }
    }

    /// Balance check, blockhash fetch, build, sign, submit. Stops at the
    /// first failure.
    pub async fn execute(&self) -> BlockchainResult<Signature> {
        let sender = self.sender.pubkey();

        let balance = self.rpc.get_balance(&sender).await?;
        tracing::info!(%sender, balance, amount = self.amount, "Fetched sender balance");
        if balance < self.amount {
            return Err(BlockchainError::InsufficientFunds {
                balance,
                required: self.amount,
            });
        }

        let blockhash = self.rpc.get_latest_blockhash().await?;

        let mut transaction =
            build_transfer_transaction(&sender, &self.recipient, self.amount, &blockhash);
        SignerSet::single(self.sender).sign(&mut transaction, blockhash)?;

        let signature = self.rpc.send_transaction(&transaction).await?;
        tracing::info!(
            %signature,
            recipient = %self.recipient,
            amount = self.amount,
            "Transaction submitted"
        );
        Ok(signature)
    }
}
