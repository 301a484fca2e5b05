//! Ad metadata composition
//!
//! Pure assembly of the metadata document that gets pinned alongside an ad
//! image. No I/O happens here; taking the image identifier by value means a
//! document simply cannot be composed before the image pin succeeded.

use adcraft_store::ContentIdentifier;
use serde::{Deserialize, Serialize};

/// A single positional trait in the metadata document.
///
/// Consumers decode traits by position, so order is part of the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdAttribute {
    pub trait_type: String,
    pub value: String,
}

impl AdAttribute {
    pub fn new(trait_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            value: value.into(),
        }
    }
}

/// The metadata document referencing a published ad image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdMetadata {
    pub name: String,
    pub description: String,
    #[serde(rename = "uniqueAdPrompt")]
    pub unique_ad_prompt: String,
    pub image: ContentIdentifier,
    pub attributes: Vec<AdAttribute>,
}

impl AdMetadata {
    pub fn to_json(&self) -> serde_json::Value {
        // Infallible for this shape; the fields are plain strings
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Compose the metadata document for a published image.
///
/// Deterministic and order-preserving: `attributes` appear in the output
/// exactly as given.
pub fn compose(
    name: &str,
    description: &str,
    unique_ad_prompt: &str,
    image: ContentIdentifier,
    attributes: Vec<AdAttribute>,
) -> AdMetadata {
    AdMetadata {
        name: name.to_string(),
        description: description.to_string(),
        unique_ad_prompt: unique_ad_prompt.to_string(),
        image,
        attributes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_preserves_attribute_order() {
        let attrs = vec![
            AdAttribute::new("type", "video"),
            AdAttribute::new("niche", "retail"),
            AdAttribute::new("tagline", "Ho ho ho"),
        ];

        let metadata = compose(
            "Santa Ad",
            "holiday promo",
            "santa mad dev prompt",
            ContentIdentifier::new("QmImage"),
            attrs.clone(),
        );

        assert_eq!(metadata.attributes, attrs);
    }

    #[test]
    fn test_compose_is_deterministic() {
        let a = compose("n", "d", "p", ContentIdentifier::new("QmX"), vec![]);
        let b = compose("n", "d", "p", ContentIdentifier::new("QmX"), vec![]);
        assert_eq!(a.to_json(), b.to_json());
    }

    #[test]
    fn test_json_field_names() {
        let metadata = compose(
            "Santa Ad",
            "holiday promo",
            "santa mad dev prompt",
            ContentIdentifier::new("QmImage"),
            vec![AdAttribute::new("type", "video")],
        );

        let json = metadata.to_json();
        assert_eq!(json["uniqueAdPrompt"], "santa mad dev prompt");
        assert_eq!(json["image"], "QmImage");
        assert_eq!(json["attributes"][0]["trait_type"], "type");
        assert_eq!(json["attributes"][0]["value"], "video");
    }
}
