use core::fmt::Display;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, to_value, Value};
use tracing::debug;

use crate::helpers::builders::sponsor_rpc_url;
use crate::kit::{SponsorRpc, SuiProvider};
use crate::types::response::{ExecuteTransactionRequest, TransactionBlockResponse};
use crate::types::sponsored::{SponsoredTransaction, SponsoredTransactionStatus};

// RPCError is the error object of a JSON-RPC response, from either the
// fullnode or the gas station
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RPCError {
    pub code: i64,
    pub message: String,
}
impl Display for RPCError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "RPCError {}: {}", self.code, self.message)
    }
}

impl std::error::Error for RPCError {}

// Response is a JSON-RPC 2.0 response, generic over the type of the result field
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
struct Response<R> {
    pub result: Option<R>,
    pub error: Option<RPCError>,
    pub id: Value,
}

impl<R> Response<R> {
    fn into_result(self, method: &str) -> Result<R, anyhow::Error> {
        if let Some(error) = self.error {
            return Err(anyhow::Error::new(error));
        }

        self.result
            .ok_or_else(|| anyhow::anyhow!("empty result for {}", method))
    }
}

fn request_body(method: &str, params: Vec<Value>) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": method,
        "params": params
    })
}

// HttpError is a non-success HTTP status whose body is not a JSON-RPC response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    pub status: u16,
    pub body: String,
}
impl Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "HTTP {}: {}", self.status, self.body)
    }
}

impl std::error::Error for HttpError {}

// Keeps scheme and host, hides the path where access keys live
fn redact_url(url: &str) -> String {
    let host_start = url.find("://").map_or(0, |idx| idx + 3);
    match url[host_start..].find('/') {
        Some(path_start) if host_start + path_start + 1 < url.len() => {
            format!("{}/<redacted>", &url[..host_start + path_start])
        }
        _ => url.to_owned(),
    }
}

// RpcClient is a connection to a JSON-RPC 2.0 endpoint over HTTP
#[derive(Clone)]
pub struct RpcClient {
    url: String,
    client: reqwest::Client,
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("url", &redact_url(&self.url))
            .finish_non_exhaustive()
    }
}

impl RpcClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn call<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<T, anyhow::Error> {
        debug!("Calling {}", method);

        let response = self
            .client
            .post(&self.url)
            .json(&request_body(method, params))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<Response<T>>(&body) {
            Ok(response) => response.into_result(method),
            Err(_) if !status.is_success() => Err(anyhow::Error::new(HttpError {
                status: status.as_u16(),
                body,
            })),
            Err(error) => Err(error.into()),
        }
    }
}

// SuiNode is a connection to a Sui fullnode
#[derive(Debug, Clone)]
pub struct SuiNode {
    client: RpcClient,
}

impl SuiNode {
    pub fn new(url: String) -> Self {
        Self {
            client: RpcClient::new(url),
        }
    }
}

fn execute_params(request: &ExecuteTransactionRequest) -> Result<Vec<Value>, anyhow::Error> {
    Ok(vec![
        to_value(&request.transaction_block)?,
        to_value(&request.signature)?,
        to_value(request.options)?,
        to_value(request.request_type)?,
    ])
}

#[async_trait]
impl SuiProvider for SuiNode {
    // execute_transaction_block submits a signed transaction to the network
    async fn execute_transaction_block(
        &self,
        request: ExecuteTransactionRequest,
    ) -> Result<TransactionBlockResponse, anyhow::Error> {
        let params = execute_params(&request)?;
        self.client
            .call::<TransactionBlockResponse>("sui_executeTransactionBlock", params)
            .await
    }
}

// GasSponsor is a connection to the gas station, authenticated by the access
// key embedded in its URL
#[derive(Debug, Clone)]
pub struct GasSponsor {
    client: RpcClient,
}

impl GasSponsor {
    pub fn new(gas_access_key: &str) -> Self {
        Self::with_base_url(crate::SPONSOR_RPC_BASE_URL, gas_access_key)
    }

    pub fn with_base_url(base_url: &str, gas_access_key: &str) -> Self {
        Self {
            client: RpcClient::new(sponsor_rpc_url(base_url, gas_access_key)),
        }
    }

    pub fn url(&self) -> &str {
        self.client.url()
    }
}

#[async_trait]
impl SponsorRpc for GasSponsor {
    async fn sponsor_transaction_block(
        &self,
        tx_bytes: &str,
        sender: &str,
        gas_budget: u64,
    ) -> Result<SponsoredTransaction, anyhow::Error> {
        self.client
            .call::<SponsoredTransaction>(
                "gas_sponsorTransactionBlock",
                vec![to_value(tx_bytes)?, to_value(sender)?, to_value(gas_budget)?],
            )
            .await
    }

    async fn get_sponsored_transaction_block_status(
        &self,
        tx_digest: &str,
    ) -> Result<SponsoredTransactionStatus, anyhow::Error> {
        self.client
            .call::<SponsoredTransactionStatus>(
                "gas_getSponsoredTransactionBlockStatus",
                vec![to_value(tx_digest)?],
            )
            .await
    }
}
