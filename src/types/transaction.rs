use std::sync::Arc;

use async_trait::async_trait;

use crate::kit::SuiProvider;

/// An in-progress transaction block that can be serialized to BCS bytes.
#[async_trait]
pub trait TransactionBlock: Send + Sync {
    // With `only_transaction_kind` set, sender and gas payment are left out and
    // only the TransactionKind is serialized. The provider supplies the
    // network context needed to resolve object references.
    async fn build(
        &self,
        only_transaction_kind: bool,
        provider: &dyn SuiProvider,
    ) -> Result<Vec<u8>, anyhow::Error>;
}

// TxBlock is a convenience wrapper around a TransactionBlock
#[derive(Clone)]
pub struct TxBlock {
    pub tx_block: Arc<dyn TransactionBlock>,
}

impl TxBlock {
    pub fn new(tx_block: Arc<dyn TransactionBlock>) -> Self {
        Self { tx_block }
    }
}

/// The accepted shapes of a transaction handed over for sponsorship.
#[derive(Clone)]
pub enum TransactionInput {
    RawBytes(Vec<u8>),
    Builder(Arc<dyn TransactionBlock>),
    BuilderWrapper(TxBlock),
}

impl TransactionInput {
    // Normalizes any input shape to transaction kind bytes
    pub async fn into_kind_bytes(
        self,
        provider: &dyn SuiProvider,
    ) -> Result<Vec<u8>, anyhow::Error> {
        let tx_block = match self {
            TransactionInput::RawBytes(bytes) => return Ok(bytes),
            TransactionInput::Builder(tx_block) => tx_block,
            TransactionInput::BuilderWrapper(wrapper) => wrapper.tx_block,
        };

        tx_block.build(true, provider).await
    }
}

impl From<Vec<u8>> for TransactionInput {
    fn from(value: Vec<u8>) -> Self {
        Self::RawBytes(value)
    }
}

impl<'a> From<&'a [u8]> for TransactionInput {
    fn from(value: &'a [u8]) -> Self {
        Self::RawBytes(value.to_vec())
    }
}

impl From<Arc<dyn TransactionBlock>> for TransactionInput {
    fn from(value: Arc<dyn TransactionBlock>) -> Self {
        Self::Builder(value)
    }
}

impl From<TxBlock> for TransactionInput {
    fn from(value: TxBlock) -> Self {
        Self::BuilderWrapper(value)
    }
}
