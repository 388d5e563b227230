use core::fmt::{Debug, Formatter};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::SponsorError;
use crate::helpers::builders::encode_tx_bytes;
use crate::helpers::parsers::decode_tx_bytes;
use crate::kit::{DerivePathParams, SponsorRpc, SuiKit};
use crate::rpc::GasSponsor;
use crate::types::response::{
    ExecuteTransactionRequest, ExecuteTransactionRequestType, TransactionBlockResponse,
    TransactionBlockResponseOptions,
};
use crate::types::sponsored::{SponsoredTransaction, SponsoredTransactionStatus};
use crate::types::transaction::TransactionInput;

/// Runtime configuration for the gas station connection
#[derive(Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SponsorConfig {
    /// Access key issued by the gas station, appended to `base_url`
    pub access_key: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    crate::SPONSOR_RPC_BASE_URL.to_owned()
}

// access_key is a credential, keep it out of logs
impl Debug for SponsorConfig {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        f.debug_struct("SponsorConfig")
            .field("access_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl SponsorConfig {
    pub fn new(access_key: String) -> Self {
        Self {
            access_key,
            base_url: default_base_url(),
        }
    }
}

/// A transaction-signing client extended with gas sponsorship.
///
/// Wraps a [`SuiKit`] and, once initialized, a connection to the gas station.
/// Sponsorship is requested for a transaction kind, the sender signs the full
/// transaction returned by the sponsor, and both signatures are submitted
/// through the kit's provider.
pub struct SponsoredClient<K> {
    kit: K,
    // None until one of the init methods is called
    gas_sponsor: Option<Arc<dyn SponsorRpc>>,
}

impl<K: SuiKit> SponsoredClient<K> {
    pub fn new(kit: K) -> Self {
        Self {
            kit,
            gas_sponsor: None,
        }
    }

    pub fn kit(&self) -> &K {
        &self.kit
    }

    pub fn init_gas_sponsor(&mut self, gas_access_key: &str) {
        self.gas_sponsor = Some(Arc::new(GasSponsor::new(gas_access_key)));
    }

    pub fn init_gas_sponsor_with_config(&mut self, config: &SponsorConfig) {
        self.gas_sponsor = Some(Arc::new(GasSponsor::with_base_url(
            &config.base_url,
            &config.access_key,
        )));
    }

    // Uses a caller-provided gas station connection
    pub fn with_gas_sponsor(mut self, gas_sponsor: Arc<dyn SponsorRpc>) -> Self {
        self.gas_sponsor = Some(gas_sponsor);
        self
    }

    pub fn is_initialized(&self) -> bool {
        self.gas_sponsor.is_some()
    }

    fn gas_sponsor(&self) -> Result<&dyn SponsorRpc, SponsorError> {
        self.gas_sponsor
            .as_deref()
            .ok_or(SponsorError::NotInitialized)
    }

    /// Asks the gas station to pay for `tx` on behalf of `sender`.
    ///
    /// Builders are serialized as a transaction kind only, since the sponsor
    /// fills in sender and gas payment. The sponsor's record is returned as is.
    pub async fn request_sponsorship(
        &self,
        tx: impl Into<TransactionInput>,
        gas_budget: u64,
        sender: &str,
    ) -> Result<SponsoredTransaction, anyhow::Error> {
        let gas_sponsor = self.gas_sponsor()?;

        let tx: TransactionInput = tx.into();
        let tx_bytes = tx.into_kind_bytes(self.kit.provider()).await?;
        let tx_bytes = encode_tx_bytes(&tx_bytes);
        debug!("Sponsoring transaction kind {}", tx_bytes);

        info!(
            "Requesting sponsorship for sender {} with gas budget {}",
            sender, gas_budget
        );
        gas_sponsor
            .sponsor_transaction_block(&tx_bytes, sender, gas_budget)
            .await
    }

    /// Executes a sponsored transaction signed by its sender.
    ///
    /// Signatures are submitted sender first, sponsor second, and the call
    /// waits for local execution on the fullnode.
    pub async fn submit_sponsored_transaction(
        &self,
        sponsored_tx: &SponsoredTransaction,
        sender_signature: &str,
    ) -> Result<TransactionBlockResponse, anyhow::Error> {
        if let Ok(now) = SystemTime::now().duration_since(UNIX_EPOCH) {
            if sponsored_tx.is_expired_at(now.as_secs()) {
                warn!(
                    "Sponsorship for {} expired at {}, submitting anyway",
                    sponsored_tx.tx_digest, sponsored_tx.expire_at_time
                );
            }
        }

        let request = ExecuteTransactionRequest {
            transaction_block: sponsored_tx.tx_bytes.clone(),
            signature: vec![sender_signature.to_owned(), sponsored_tx.signature.clone()],
            options: TransactionBlockResponseOptions::new()
                .with_effects()
                .with_events()
                .with_object_changes(),
            request_type: ExecuteTransactionRequestType::WaitForLocalExecution,
        };

        info!("Submitting sponsored transaction {}", sponsored_tx.tx_digest);
        self.kit.provider().execute_transaction_block(request).await
    }

    /// Requests sponsorship, signs as the derived sender and submits.
    pub async fn sign_and_submit(
        &self,
        tx: impl Into<TransactionInput>,
        gas_budget: u64,
        derive_path_params: Option<&DerivePathParams>,
    ) -> Result<TransactionBlockResponse, anyhow::Error> {
        let sender = self.kit.get_address(derive_path_params);
        let sponsored_tx = self.request_sponsorship(tx, gas_budget, &sender).await?;

        let tx_bytes = decode_tx_bytes(&sponsored_tx.tx_bytes)?;
        let signed = self
            .kit
            .sign_transaction(&tx_bytes, derive_path_params)
            .await?;

        self.submit_sponsored_transaction(&sponsored_tx, &signed.signature)
            .await
    }

    pub async fn query_sponsored_transaction_status(
        &self,
        tx_digest: &str,
    ) -> Result<SponsoredTransactionStatus, anyhow::Error> {
        let gas_sponsor = self.gas_sponsor()?;
        gas_sponsor
            .get_sponsored_transaction_block_status(tx_digest)
            .await
    }
}
