//! Pinata storage network client
//!
//! Binary pins go through `pinFileToIPFS` as multipart/form-data; documents go
//! through `pinJSONToIPFS`. Both carry a metadata envelope that exposes the
//! pin options as searchable tags, pinned with CIDv0 to match the identifiers
//! the on-chain consumer already records. Requests are single-shot; retry
//! policy belongs to the caller.

use crate::options::PinOptions;
use crate::record::{ContentIdentifier, PinRecord};
use crate::store::PinStore;
use adcraft_core::{AdCraftError, Result};
use std::time::Duration;

const DEFAULT_PINATA_URL: &str = "https://api.pinata.cloud";
const REQUEST_TIMEOUT_SECS: u64 = 60;

/// HTTP client for the Pinata pinning service
pub struct PinataStore {
    api_key: String,
    secret_key: String,
    api_url: String,
}

impl PinataStore {
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: secret_key.into(),
            api_url: DEFAULT_PINATA_URL.to_string(),
        }
    }

    /// Override the API endpoint (self-hosted gateway, test server)
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// The metadata envelope sent with every pin: display name plus all
    /// option pairs as searchable keyvalues
    fn metadata_envelope(options: &PinOptions) -> serde_json::Value {
        let clean = options.sanitized();
        let mut keyvalues = serde_json::Map::new();
        for (k, v) in clean.all_pairs() {
            keyvalues.insert(k.to_string(), serde_json::Value::String(v.to_string()));
        }
        serde_json::json!({
            "name": clean.name,
            "keyvalues": keyvalues,
        })
    }

    fn publish_error(context: &str, e: impl std::fmt::Display) -> AdCraftError {
        AdCraftError::PublishError(format!("{}: {}", context, e))
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build();
    config.into()
}

impl PinStore for PinataStore {
    fn name(&self) -> &str {
        "pinata"
    }

    fn pin_file(&self, content: &[u8], options: &PinOptions) -> Result<ContentIdentifier> {
        let metadata = Self::metadata_envelope(options);
        let boundary = format!("adcraft-{}", uuid::Uuid::new_v4().simple());
        let body = build_multipart_body(&boundary, content, &metadata);

        let agent = build_agent();
        let mut response = agent
            .post(&format!("{}/pinning/pinFileToIPFS", self.api_url))
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_key)
            .header(
                "Content-Type",
                &format!("multipart/form-data; boundary={}", boundary),
            )
            .send(&body[..])
            .map_err(|e| Self::publish_error("Pin file request failed", e))?;

        let json: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| Self::publish_error("Failed to parse pin response", e))?;
        parse_pin_response(&json)
    }

    fn pin_json(
        &self,
        content: &serde_json::Value,
        options: &PinOptions,
    ) -> Result<ContentIdentifier> {
        let payload = serde_json::json!({
            "pinataContent": content,
            "pinataMetadata": Self::metadata_envelope(options),
            "pinataOptions": { "cidVersion": 0 },
        });

        let agent = build_agent();
        let mut response = agent
            .post(&format!("{}/pinning/pinJSONToIPFS", self.api_url))
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_key)
            .send_json(&payload)
            .map_err(|e| Self::publish_error("Pin JSON request failed", e))?;

        let json: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| Self::publish_error("Failed to parse pin response", e))?;
        parse_pin_response(&json)
    }

    fn pin_list(&self, hash_filter: Option<&str>) -> Result<Vec<PinRecord>> {
        let mut url = format!("{}/data/pinList?status=pinned", self.api_url);
        if let Some(hash) = hash_filter {
            url.push_str(&format!("&hashContains={}", hash));
        }

        let agent = build_agent();
        let mut response = agent
            .get(&url)
            .header("pinata_api_key", &self.api_key)
            .header("pinata_secret_api_key", &self.secret_key)
            .call()
            .map_err(|e| Self::publish_error("Pin list request failed", e))?;

        let json: serde_json::Value = response
            .body_mut()
            .read_json()
            .map_err(|e| Self::publish_error("Failed to parse pin list response", e))?;
        parse_pin_list(&json)
    }
}

/// Assemble a multipart/form-data body with the file, metadata, and options parts
fn build_multipart_body(
    boundary: &str,
    content: &[u8],
    metadata: &serde_json::Value,
) -> Vec<u8> {
    let mut body = Vec::with_capacity(content.len() + 512);

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        b"Content-Disposition: form-data; name=\"file\"; filename=\"content.bin\"\r\n",
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(content);
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"pinataMetadata\"\r\n\r\n");
    body.extend_from_slice(metadata.to_string().as_bytes());
    body.extend_from_slice(b"\r\n");

    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"pinataOptions\"\r\n\r\n");
    body.extend_from_slice(b"{\"cidVersion\":0}\r\n");

    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

/// Extract the content identifier from a pin response
pub fn parse_pin_response(response: &serde_json::Value) -> Result<ContentIdentifier> {
    response
        .get("IpfsHash")
        .and_then(|h| h.as_str())
        .filter(|h| !h.is_empty())
        .map(ContentIdentifier::new)
        .ok_or_else(|| {
            AdCraftError::PublishError(format!(
                "Unexpected pin response format: {}",
                serde_json::to_string(response).unwrap_or_default()
            ))
        })
}

/// Extract pin records from a pinList response
pub fn parse_pin_list(response: &serde_json::Value) -> Result<Vec<PinRecord>> {
    let rows = response
        .get("rows")
        .and_then(|r| r.as_array())
        .ok_or_else(|| {
            AdCraftError::PublishError(format!(
                "Unexpected pin list response format: {}",
                serde_json::to_string(response).unwrap_or_default()
            ))
        })?;

    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let identifier = row
            .get("ipfs_pin_hash")
            .and_then(|h| h.as_str())
            .ok_or_else(|| {
                AdCraftError::PublishError("Pin list row missing ipfs_pin_hash".to_string())
            })?;

        records.push(PinRecord {
            identifier: ContentIdentifier::new(identifier),
            name: row
                .get("metadata")
                .and_then(|m| m.get("name"))
                .and_then(|n| n.as_str())
                .map(|s| s.to_string()),
            size: row.get("size").and_then(|s| s.as_u64()),
            pinned_at: row
                .get("date_pinned")
                .and_then(|d| d.as_str())
                .map(|s| s.to_string()),
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_response() {
        let response = serde_json::json!({
            "IpfsHash": "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG",
            "PinSize": 12345,
            "Timestamp": "2024-01-01T00:00:00.000Z"
        });

        let id = parse_pin_response(&response).unwrap();
        assert_eq!(id.as_str(), "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
    }

    #[test]
    fn test_parse_pin_response_error_body() {
        let response = serde_json::json!({ "error": "Invalid API key" });
        assert!(parse_pin_response(&response).is_err());
    }

    #[test]
    fn test_parse_pin_list() {
        let response = serde_json::json!({
            "count": 2,
            "rows": [
                {
                    "ipfs_pin_hash": "QmFirst",
                    "size": 100,
                    "date_pinned": "2024-01-01T00:00:00.000Z",
                    "metadata": { "name": "Santa Ad", "keyvalues": {} }
                },
                {
                    "ipfs_pin_hash": "QmSecond",
                    "size": 200,
                    "date_pinned": "2024-01-02T00:00:00.000Z",
                    "metadata": { "name": null }
                }
            ]
        });

        let records = parse_pin_list(&response).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identifier.as_str(), "QmFirst");
        assert_eq!(records[0].name.as_deref(), Some("Santa Ad"));
        assert_eq!(records[1].name, None);
        assert_eq!(records[1].size, Some(200));
    }

    #[test]
    fn test_parse_pin_list_empty_rows() {
        let response = serde_json::json!({ "count": 0, "rows": [] });
        assert!(parse_pin_list(&response).unwrap().is_empty());
    }

    #[test]
    fn test_multipart_body_structure() {
        let metadata = serde_json::json!({ "name": "ad", "keyvalues": {} });
        let body = build_multipart_body("test-boundary", b"PNGDATA", &metadata);
        let text = String::from_utf8_lossy(&body);

        assert!(text.starts_with("--test-boundary\r\n"));
        assert!(text.contains("name=\"file\""));
        assert!(text.contains("PNGDATA"));
        assert!(text.contains("name=\"pinataMetadata\""));
        assert!(text.contains("\"cidVersion\":0"));
        assert!(text.ends_with("--test-boundary--\r\n"));
    }

    #[test]
    fn test_metadata_envelope_includes_all_pairs() {
        let options = PinOptions::new("Santa Ad", "holiday promo")
            .with_keyvalue("uniqueAdPrompt", "santa mad dev prompt");
        let envelope = PinataStore::metadata_envelope(&options);

        assert_eq!(envelope["name"], "Santa Ad");
        assert_eq!(envelope["keyvalues"]["description"], "holiday promo");
        assert_eq!(envelope["keyvalues"]["uniqueAdPrompt"], "santa mad dev prompt");
    }
}
