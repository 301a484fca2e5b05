//! Content identifiers and pin records

use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque content-derived hash returned by the storage network.
///
/// Identifiers are immutable references to pinned content. Pinning the same
/// payload twice is valid and may return two distinct identifiers; nothing
/// here assumes dedup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentIdentifier(String);

impl ContentIdentifier {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ContentIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single entry from the storage network's pin listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinRecord {
    pub identifier: ContentIdentifier,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub pinned_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_display() {
        let id = ContentIdentifier::new("QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
        assert_eq!(id.to_string(), "QmYwAPJzv5CZsnA625s3Xf2nemtYgPpHdWEz79ojWnPbdG");
        assert!(!id.is_empty());
    }

    #[test]
    fn test_identifier_serializes_as_plain_string() {
        let id = ContentIdentifier::new("QmTest");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"QmTest\"");
    }
}
