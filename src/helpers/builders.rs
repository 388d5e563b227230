// Builds the sponsor endpoint for an access key: `{base_url}/{access_key}`
pub fn sponsor_rpc_url(base_url: &str, gas_access_key: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), gas_access_key)
}

// Encodes transaction bytes the way both JSON-RPC surfaces expect them
pub fn encode_tx_bytes(tx_bytes: &[u8]) -> String {
    base64::encode(tx_bytes)
}
