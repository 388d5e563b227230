use serde::{Deserialize, Serialize};
use serde_json::Value;

// Which parts of the executed transaction the fullnode should return
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponseOptions {
    pub show_input: bool,
    pub show_raw_input: bool,
    pub show_effects: bool,
    pub show_events: bool,
    pub show_object_changes: bool,
    pub show_balance_changes: bool,
}

impl TransactionBlockResponseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self) -> Self {
        self.show_input = true;
        self
    }

    pub fn with_raw_input(mut self) -> Self {
        self.show_raw_input = true;
        self
    }

    pub fn with_effects(mut self) -> Self {
        self.show_effects = true;
        self
    }

    pub fn with_events(mut self) -> Self {
        self.show_events = true;
        self
    }

    pub fn with_object_changes(mut self) -> Self {
        self.show_object_changes = true;
        self
    }

    pub fn with_balance_changes(mut self) -> Self {
        self.show_balance_changes = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExecuteTransactionRequestType {
    WaitForEffectsCert,
    // returns only once the fullnode has applied the effects locally
    WaitForLocalExecution,
}

/// Arguments of `sui_executeTransactionBlock`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteTransactionRequest {
    // base64 encoded TransactionData
    pub transaction_block: String,
    // sender first, sponsor second for sponsored transactions
    pub signature: Vec<String>,
    pub options: TransactionBlockResponseOptions,
    pub request_type: ExecuteTransactionRequestType,
}

/// Response of `sui_executeTransactionBlock`.
///
/// Effects, events and object changes are kept as raw JSON; interpreting them
/// is up to the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBlockResponse {
    pub digest: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effects: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub object_changes: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance_changes: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmed_local_execution: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl TransactionBlockResponse {
    // effects.status.status, "success" or "failure"
    pub fn status(&self) -> Option<&str> {
        self.effects
            .as_ref()?
            .get("status")?
            .get("status")?
            .as_str()
    }

    pub fn is_success(&self) -> bool {
        self.status() == Some("success")
    }
}
