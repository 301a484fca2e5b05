//! Oracle result encoding
//!
//! The oracle request that triggers a publication expects a single uint256
//! back on-chain, not an arbitrary-length identifier string. We hash the
//! identifier down to a fixed 32 bytes; the raw string still travels in the
//! HTTP response body for consumers that want it.

use adcraft_core::ContentHash;
use adcraft_store::ContentIdentifier;

/// Encode a content identifier as the fixed-width scalar the oracle reports
pub fn encode_scalar(identifier: &ContentIdentifier) -> [u8; 32] {
    *ContentHash::from_str(identifier.as_str()).as_bytes()
}

/// Hex form of the scalar, 0x-prefixed for on-chain tooling
pub fn encode_scalar_hex(identifier: &ContentIdentifier) -> String {
    let bytes = encode_scalar(identifier);
    let hex: String = bytes.iter().map(|b| format!("{:02x}", b)).collect();
    format!("0x{}", hex)
}
