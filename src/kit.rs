//! Seams between the sponsorship adapter and its collaborators.
//!
//! The adapter never builds, signs or executes anything itself. It asks a
//! [`SuiKit`] for the sender address and signature, a [`SponsorRpc`] for the
//! gas payment, and the kit's [`SuiProvider`] for execution.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::types::response::{ExecuteTransactionRequest, TransactionBlockResponse};
use crate::types::sponsored::{SponsoredTransaction, SponsoredTransactionStatus};

/// A fullnode JSON-RPC endpoint able to execute signed transaction blocks.
#[async_trait]
pub trait SuiProvider: Send + Sync {
    async fn execute_transaction_block(
        &self,
        request: ExecuteTransactionRequest,
    ) -> Result<TransactionBlockResponse, anyhow::Error>;
}

/// The gas station: pays for a transaction kind on behalf of a sender.
#[async_trait]
pub trait SponsorRpc: Send + Sync {
    // gas_sponsorTransactionBlock
    async fn sponsor_transaction_block(
        &self,
        tx_bytes: &str,
        sender: &str,
        gas_budget: u64,
    ) -> Result<SponsoredTransaction, anyhow::Error>;

    // gas_getSponsoredTransactionBlockStatus
    async fn get_sponsored_transaction_block_status(
        &self,
        tx_digest: &str,
    ) -> Result<SponsoredTransactionStatus, anyhow::Error>;
}

/// The transaction-signing client being extended with sponsorship.
///
/// Key management and signing schemes stay behind this trait.
#[async_trait]
pub trait SuiKit: Send + Sync {
    fn provider(&self) -> &dyn SuiProvider;

    fn get_address(&self, derive_path_params: Option<&DerivePathParams>) -> String;

    // Signs full transaction data (sender and gas already set) with the key
    // selected by `derive_path_params`.
    async fn sign_transaction(
        &self,
        tx_bytes: &[u8],
        derive_path_params: Option<&DerivePathParams>,
    ) -> Result<SignedTransaction, anyhow::Error>;
}

// Both fields are base64, ready to be sent over JSON-RPC
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub tx_bytes: String,
    pub signature: String,
}

/// Selects a key from an HD wallet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DerivePathParams {
    pub account_index: u32,
    pub is_external: bool,
    pub address_index: u32,
}

impl DerivePathParams {
    /// BIP-44 path under Sui's coin type (784).
    ///
    /// For [`SuiKit`] implementors that keep an HD wallet: the adapter only
    /// forwards these params, turning them into a key is up to the kit.
    pub fn derive_path(&self) -> String {
        format!(
            "m/44'/784'/{}'/{}'/{}'",
            self.account_index,
            u8::from(self.is_external),
            self.address_index
        )
    }
}
