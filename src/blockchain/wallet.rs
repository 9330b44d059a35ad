//! Key lookup and transaction signing.
//!
//! # Security
//! - Keys come only from the config file
//! - Keys are never logged; only public keys appear in log fields

use std::collections::HashMap;

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signer};
use solana_sdk::transaction::Transaction;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Private keys available for signing, indexed by public key.
#[derive(Default)]
pub struct SignerSet<'a> {
    keys: HashMap<Pubkey, &'a Keypair>,
}

impl<'a> SignerSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set holding exactly one key.
    pub fn single(keypair: &'a Keypair) -> Self {
        let mut set = Self::new();
        set.insert(keypair);
        set
    }

    pub fn insert(&mut self, keypair: &'a Keypair) {
        self.keys.insert(keypair.pubkey(), keypair);
    }

    /// Key whose public half equals `pubkey`, if we hold it.
    pub fn resolve(&self, pubkey: &Pubkey) -> Option<&'a Keypair> {
        self.keys.get(pubkey).copied()
    }

    /// Sign every required signature slot of `transaction`.
    ///
    /// Fails if any required signer has no key in the set.
    pub fn sign(&self, transaction: &mut Transaction, blockhash: Hash) -> BlockchainResult<()> {
        let required = usize::from(transaction.message.header.num_required_signatures);

        let mut signers: Vec<&dyn Signer> = Vec::with_capacity(required);
        for pubkey in transaction.message.account_keys.iter().take(required) {
            let keypair = self.resolve(pubkey).ok_or_else(|| {
                BlockchainError::Signing(format!("no private key for signer {}", pubkey))
            })?;
            signers.push(keypair as &dyn Signer);
        }

        transaction
            .try_sign(&signers, blockhash)
            .map_err(|e| BlockchainError::Signing(e.to_string()))?;

        tracing::debug!(
            signers = signers.len(),
            signature = ?transaction.signatures.first(),
            "Transaction signed"
        );
        Ok(())
    }
}

impl std::fmt::Debug for SignerSet<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.keys.keys()).finish()
    }
}
