//! Pin options and metadata sanitization
//!
//! The storage network indexes pins by a display name plus searchable
//! key/value tags. Tag values must be non-empty strings and the network caps
//! how many tags a pin may carry, so options are sanitized before they hit
//! the wire.

use serde::{Deserialize, Serialize};

/// Maximum searchable key/value pairs the storage network accepts per pin
pub const MAX_KEYVALUES: usize = 10;

/// Caller-supplied descriptive options attached to a pin
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinOptions {
    pub name: String,
    pub description: String,
    /// Extra key/value tags, order preserved
    #[serde(default)]
    pub keyvalues: Vec<(String, String)>,
}

impl PinOptions {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            keyvalues: Vec::new(),
        }
    }

    pub fn with_keyvalue(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.keyvalues.push((key.into(), value.into()));
        self
    }

    /// All searchable pairs in order: name, description, then extras.
    ///
    /// Mirrors the metadata envelope shape the network expects, where the
    /// primary fields double as tags.
    pub fn all_pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = vec![
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
        ];
        for (k, v) in &self.keyvalues {
            pairs.push((k.as_str(), v.as_str()));
        }
        pairs
    }

    /// Drop pairs the network would reject and enforce the tag cap.
    ///
    /// Empty keys or values are removed rather than rejected so a sparse ad
    /// spec still pins; the name falls back to "untitled" because the network
    /// requires one.
    pub fn sanitized(&self) -> Self {
        let name = if self.name.trim().is_empty() {
            "untitled".to_string()
        } else {
            self.name.trim().to_string()
        };

        let keyvalues: Vec<(String, String)> = self
            .keyvalues
            .iter()
            .filter(|(k, v)| !k.trim().is_empty() && !v.trim().is_empty())
            .take(MAX_KEYVALUES - 2)
            .map(|(k, v)| (k.trim().to_string(), v.trim().to_string()))
            .collect();

        Self {
            name,
            description: self.description.trim().to_string(),
            keyvalues,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_pairs_order() {
        let options = PinOptions::new("Santa Ad", "holiday promo")
            .with_keyvalue("uniqueAdPrompt", "santa mad dev prompt");

        let pairs = options.all_pairs();
        assert_eq!(pairs[0], ("name", "Santa Ad"));
        assert_eq!(pairs[1], ("description", "holiday promo"));
        assert_eq!(pairs[2], ("uniqueAdPrompt", "santa mad dev prompt"));
    }

    #[test]
    fn test_sanitized_drops_empty_pairs() {
        let options = PinOptions::new("ad", "desc")
            .with_keyvalue("", "orphan value")
            .with_keyvalue("orphan key", "  ")
            .with_keyvalue("kept", "value");

        let clean = options.sanitized();
        assert_eq!(clean.keyvalues, vec![("kept".to_string(), "value".to_string())]);
    }

    #[test]
    fn test_sanitized_caps_keyvalues() {
        let mut options = PinOptions::new("ad", "desc");
        for i in 0..20 {
            options = options.with_keyvalue(format!("k{}", i), format!("v{}", i));
        }

        let clean = options.sanitized();
        assert_eq!(clean.keyvalues.len(), MAX_KEYVALUES - 2);
        assert_eq!(clean.all_pairs().len(), MAX_KEYVALUES);
    }

    #[test]
    fn test_sanitized_names_blank_pins() {
        let options = PinOptions::new("  ", "desc");
        assert_eq!(options.sanitized().name, "untitled");
    }
}
