use anyhow::{anyhow, bail};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// Encodes bytes as `data:<mime>;base64,<payload>`. An empty payload encodes
/// to the empty string, which is how records without a file are stored.
pub fn encode_data_uri(mime_type: &str, bytes: &[u8]) -> String {
    if bytes.is_empty() {
        return String::new();
    }
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// Splits a base64 data URI into its declared MIME type and decoded bytes.
pub fn decode_data_uri(uri: &str) -> anyhow::Result<(String, Vec<u8>)> {
    let trimmed = uri.trim();
    if trimmed.is_empty() {
        return Ok((String::new(), Vec::new()));
    }
    let rest = trimmed
        .strip_prefix("data:")
        .ok_or_else(|| anyhow!("file content is not a data uri"))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| anyhow!("data uri has no payload separator"))?;
    let Some(mime) = header.strip_suffix(";base64") else {
        bail!("only base64 data uris are supported");
    };
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| anyhow!("invalid base64 payload: {e}"))?;
    Ok((mime.to_string(), bytes))
}
