use anyhow::Context;

// Decodes base64 transaction bytes returned by the sponsor
pub fn decode_tx_bytes(tx_bytes: &str) -> Result<Vec<u8>, anyhow::Error> {
    base64::decode(tx_bytes).context("sponsored transaction bytes are not valid base64")
}
