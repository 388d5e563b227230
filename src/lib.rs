mod error;
#[cfg(feature = "native")]
mod helpers;
pub mod kit;
pub mod types;

#[cfg(feature = "native")]
pub mod rpc;
#[cfg(feature = "native")]
pub mod service;

pub use error::SponsorError;
pub use kit::{DerivePathParams, SignedTransaction, SponsorRpc, SuiKit, SuiProvider};
pub use types::response::{
    ExecuteTransactionRequest, ExecuteTransactionRequestType, TransactionBlockResponse,
    TransactionBlockResponseOptions,
};
pub use types::sponsored::{SponsoredTransaction, SponsoredTransactionStatus};
pub use types::transaction::{TransactionBlock, TransactionInput, TxBlock};

#[cfg(feature = "native")]
pub use rpc::{GasSponsor, HttpError, RPCError, SuiNode};
#[cfg(feature = "native")]
pub use service::{SponsorConfig, SponsoredClient};

#[cfg(feature = "native")]
const SPONSOR_RPC_BASE_URL: &str = "https://api.shinami.com/gas/v1";
