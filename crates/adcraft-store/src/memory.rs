//! In-memory pin store for tests
//!
//! Behaves like the real network without any I/O: every pin mints a fresh
//! identifier (so duplicate publishes yield distinct identifiers, matching the
//! non-idempotent contract) and a failure switch lets tests exercise the
//! pipeline's abort paths.

use crate::options::PinOptions;
use crate::record::{ContentIdentifier, PinRecord};
use crate::store::PinStore;
use adcraft_core::time::now_iso8601;
use adcraft_core::{AdCraftError, ContentHash, Result};
use std::sync::Mutex;

#[derive(Debug, Clone)]
struct StoredPin {
    record: PinRecord,
}

/// An in-process pin store test double
#[derive(Default)]
pub struct MemoryStore {
    pins: Mutex<Vec<StoredPin>>,
    fail_next: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next pin operation fail with the given message
    pub fn fail_next_pin(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap() = Some(message.into());
    }

    /// Number of pins currently held
    pub fn pin_count(&self) -> usize {
        self.pins.lock().unwrap().len()
    }

    fn take_failure(&self) -> Option<String> {
        self.fail_next.lock().unwrap().take()
    }

    fn store(&self, content: &[u8], options: &PinOptions) -> Result<ContentIdentifier> {
        if let Some(message) = self.take_failure() {
            return Err(AdCraftError::PublishError(message));
        }

        let clean = options.sanitized();
        // Content hash for realism, uuid suffix so duplicate pins differ
        let digest = ContentHash::from_bytes(content).to_hex();
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        let identifier = ContentIdentifier::new(format!("Qm{}{}", &digest[..16], &suffix[..8]));

        let record = PinRecord {
            identifier: identifier.clone(),
            name: Some(clean.name),
            size: Some(content.len() as u64),
            pinned_at: Some(now_iso8601()),
        };

        self.pins.lock().unwrap().push(StoredPin { record });
        Ok(identifier)
    }
}

impl PinStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn pin_file(&self, content: &[u8], options: &PinOptions) -> Result<ContentIdentifier> {
        self.store(content, options)
    }

    fn pin_json(
        &self,
        content: &serde_json::Value,
        options: &PinOptions,
    ) -> Result<ContentIdentifier> {
        let bytes = serde_json::to_vec(content)
            .map_err(|e| AdCraftError::PublishError(format!("Failed to serialize JSON: {}", e)))?;
        self.store(&bytes, options)
    }

    fn pin_list(&self, hash_filter: Option<&str>) -> Result<Vec<PinRecord>> {
        let pins = self.pins.lock().unwrap();
        Ok(pins
            .iter()
            .filter(|pin| match hash_filter {
                Some(hash) => pin.record.identifier.as_str().contains(hash),
                None => true,
            })
            .map(|pin| pin.record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_and_list() {
        let store = MemoryStore::new();
        let options = PinOptions::new("Santa Ad", "holiday promo");

        let id = store.pin_file(b"image bytes", &options).unwrap();
        assert!(!id.is_empty());

        let records = store.pin_list(None).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, id);
        assert_eq!(records[0].name.as_deref(), Some("Santa Ad"));
    }

    #[test]
    fn test_duplicate_pins_yield_distinct_identifiers() {
        let store = MemoryStore::new();
        let options = PinOptions::new("ad", "desc");

        let a = store.pin_file(b"same content", &options).unwrap();
        let b = store.pin_file(b"same content", &options).unwrap();
        assert_ne!(a, b);
        assert_eq!(store.pin_count(), 2);
    }

    #[test]
    fn test_list_filter_matches_substring() {
        let store = MemoryStore::new();
        let options = PinOptions::new("ad", "desc");
        let id = store.pin_file(b"content", &options).unwrap();

        let middle = &id.as_str()[4..12];
        let records = store.pin_list(Some(middle)).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_list_no_match_is_empty_not_error() {
        let store = MemoryStore::new();
        let options = PinOptions::new("ad", "desc");
        store.pin_file(b"content", &options).unwrap();

        let records = store.pin_list(Some("no-such-hash")).unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_fail_next_pin_fires_once() {
        let store = MemoryStore::new();
        let options = PinOptions::new("ad", "desc");

        store.fail_next_pin("storage offline");
        let err = store.pin_file(b"content", &options).unwrap_err();
        assert!(err.to_string().contains("storage offline"));

        // Switch is consumed; the next pin succeeds
        assert!(store.pin_file(b"content", &options).is_ok());
    }

    #[test]
    fn test_pin_json_serializes_document() {
        let store = MemoryStore::new();
        let options = PinOptions::new("metadata", "desc");
        let doc = serde_json::json!({ "name": "Santa Ad", "attributes": [] });

        let id = store.pin_json(&doc, &options).unwrap();
        assert!(!id.is_empty());
    }
}
