use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

// SponsoredTransaction is what the gas station hands back: full transaction
// data with the sponsor's gas payment filled in, plus the sponsor signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SponsoredTransaction {
    // base64 encoded TransactionData
    pub tx_bytes: String,
    pub tx_digest: String,
    // sponsor signature over tx_bytes
    pub signature: String,
    // unix time in seconds
    pub expire_at_time: u64,
    pub expire_after_epoch: u64,
}

impl SponsoredTransaction {
    pub fn is_expired_at(&self, unix_time_secs: u64) -> bool {
        unix_time_secs >= self.expire_at_time
    }
}

/// The sponsor's view of a previously sponsored transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SponsoredTransactionStatus {
    InFlight,
    Complete,
    Invalid,
}

impl Display for SponsoredTransactionStatus {
    fn fmt(&self, f: &mut Formatter) -> core::fmt::Result {
        let status = match self {
            SponsoredTransactionStatus::InFlight => "IN_FLIGHT",
            SponsoredTransactionStatus::Complete => "COMPLETE",
            SponsoredTransactionStatus::Invalid => "INVALID",
        };
        write!(f, "{status}")
    }
}
