//! Publication pipeline
//!
//! The strictly sequential generate → pin image → compose → pin metadata
//! chain. All-or-nothing from the caller's view: any step failing aborts the
//! rest. The one deliberate wrinkle is a metadata pin failing after the image
//! pin succeeded, which leaves the image orphaned on the network; the error
//! names the orphaned identifier so it can be unpinned out of band.

use crate::metadata::{compose, AdAttribute};
use adcraft_core::{AdCraftError, Result};
use adcraft_gen::{ContentKind, GeneratedContent, GenerationProvider, ImageRequest};
use adcraft_store::{ContentIdentifier, PinOptions, PinStore};

/// Everything that describes one advertisement to publish
#[derive(Debug, Clone)]
pub struct AdSpec {
    pub name: String,
    pub description: String,
    pub type_of_ad: String,
    pub niche: String,
    pub tagline: String,
    pub promoter: String,
    pub creator: String,
    pub hash_tags: String,
    pub unique_ad_prompt: String,
    pub created_at: String,
}

impl AdSpec {
    /// Pin options shared by the image and metadata pins
    pub fn pin_options(&self) -> PinOptions {
        PinOptions::new(&self.name, &self.description)
            .with_keyvalue("uniqueAdPrompt", &self.unique_ad_prompt)
    }

    /// The positional trait list, in the order on-chain consumers decode it
    pub fn attributes(&self) -> Vec<AdAttribute> {
        vec![
            AdAttribute::new("type", &self.type_of_ad),
            AdAttribute::new("niche", &self.niche),
            AdAttribute::new("tagline", &self.tagline),
            AdAttribute::new("promoter", &self.promoter),
            AdAttribute::new("hash tags", &self.hash_tags),
            AdAttribute::new("creator", &self.creator),
            AdAttribute::new("date", &self.created_at),
        ]
    }
}

/// The two identifiers a completed publication produces
#[derive(Debug, Clone)]
pub struct PublicationResult {
    pub image: ContentIdentifier,
    pub metadata: ContentIdentifier,
}

/// Orchestrates publication against an injected pin store.
///
/// Holds no per-invocation state; one publisher can serve concurrent callers.
pub struct Publisher<'a> {
    store: &'a dyn PinStore,
}

impl<'a> Publisher<'a> {
    pub fn new(store: &'a dyn PinStore) -> Self {
        Self { store }
    }

    /// Publish an already-generated ad image plus its metadata document.
    ///
    /// The image pin must succeed before metadata is composed; a metadata pin
    /// failure leaves the image pinned but unreferenced (accepted, surfaced in
    /// the error message rather than rolled back).
    pub fn publish_ad(
        &self,
        spec: &AdSpec,
        image: &GeneratedContent,
    ) -> Result<PublicationResult> {
        if image.kind != ContentKind::Image {
            return Err(AdCraftError::PublishError(
                "publish_ad requires an image payload".to_string(),
            ));
        }

        let options = spec.pin_options();
        let bytes = image.image_bytes()?;

        let image_id = self.store.pin_file(&bytes, &options)?;

        let metadata = compose(
            &spec.name,
            &spec.description,
            &spec.unique_ad_prompt,
            image_id.clone(),
            spec.attributes(),
        );

        let metadata_id = self
            .store
            .pin_json(&metadata.to_json(), &options)
            .map_err(|e| {
                AdCraftError::PublishError(format!(
                    "metadata pin failed (image {} left orphaned): {}",
                    image_id, e
                ))
            })?;

        Ok(PublicationResult {
            image: image_id,
            metadata: metadata_id,
        })
    }

    /// Generate the ad image from the spec's prompt, then publish it.
    ///
    /// Generation failure aborts before the store is touched.
    pub fn create_ad(
        &self,
        provider: &dyn GenerationProvider,
        spec: &AdSpec,
    ) -> Result<PublicationResult> {
        let image = provider.generate_image(&ImageRequest::new(&spec.unique_ad_prompt))?;
        self.publish_ad(spec, &image)
    }

    /// Look up previously published pins, optionally filtered by identifier
    /// substring
    pub fn lookup(&self, hash_filter: Option<&str>) -> Result<Vec<adcraft_store::PinRecord>> {
        self.store.pin_list(hash_filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcraft_gen::providers::mock::MockProvider;
    use adcraft_store::MemoryStore;

    fn santa_spec() -> AdSpec {
        AdSpec {
            name: "Santa Ad".to_string(),
            description: "holiday promo".to_string(),
            type_of_ad: "video".to_string(),
            niche: "retail".to_string(),
            tagline: "Ho ho ho".to_string(),
            promoter: "BrandX".to_string(),
            creator: "CreatorY".to_string(),
            hash_tags: "#xmas".to_string(),
            unique_ad_prompt: "santa mad dev prompt".to_string(),
            created_at: "2024-01-01".to_string(),
        }
    }

    #[test]
    fn test_attribute_order_is_fixed() {
        let traits: Vec<String> = santa_spec()
            .attributes()
            .into_iter()
            .map(|a| a.trait_type)
            .collect();
        assert_eq!(
            traits,
            vec!["type", "niche", "tagline", "promoter", "hash tags", "creator", "date"]
        );
    }

    #[test]
    fn test_end_to_end_publish_and_lookup() {
        let store = MemoryStore::new();
        let provider = MockProvider::new();
        let publisher = Publisher::new(&store);

        let result = publisher.create_ad(&provider, &santa_spec()).unwrap();
        assert!(!result.image.is_empty());
        assert!(!result.metadata.is_empty());
        assert_ne!(result.image, result.metadata);

        // Lookup by the image identifier finds exactly that record
        let records = publisher.lookup(Some(result.image.as_str())).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].identifier, result.image);

        // Unfiltered lookup covers everything published this session
        let all = publisher.lookup(None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_image_pin_failure_aborts_before_metadata() {
        let store = MemoryStore::new();
        let provider = MockProvider::new();
        let publisher = Publisher::new(&store);

        store.fail_next_pin("storage offline");
        let err = publisher.create_ad(&provider, &santa_spec()).unwrap_err();
        assert!(matches!(err, AdCraftError::PublishError(_)));

        // Nothing pinned, no metadata ever composed or sent
        assert_eq!(store.pin_count(), 0);
    }

    #[test]
    fn test_metadata_pin_failure_surfaces_orphaned_image() {
        let store = SecondPinFails::default();
        let provider = MockProvider::new();
        let publisher = Publisher::new(&store);

        let err = publisher.create_ad(&provider, &santa_spec()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("left orphaned"));
        assert!(message.contains("QmOrphan"));

        // The image pin went through and stays on the network
        assert_eq!(*store.calls.lock().unwrap(), 1);
    }

    #[test]
    fn test_duplicate_publish_yields_distinct_identifiers() {
        let store = MemoryStore::new();
        let provider = MockProvider::new();
        let publisher = Publisher::new(&store);
        let spec = santa_spec();

        let first = publisher.create_ad(&provider, &spec).unwrap();
        let second = publisher.create_ad(&provider, &spec).unwrap();

        // Same prompt, same options: still two live publications
        assert_ne!(first.image, second.image);
        assert_ne!(first.metadata, second.metadata);
        assert_eq!(store.pin_count(), 4);
    }

    #[test]
    fn test_generation_failure_never_touches_store() {
        let store = MemoryStore::new();
        let provider = MockProvider::new();
        let publisher = Publisher::new(&store);

        let mut spec = santa_spec();
        spec.unique_ad_prompt = "  ".to_string();

        let err = publisher.create_ad(&provider, &spec).unwrap_err();
        assert!(matches!(err, AdCraftError::GenerationError(_)));
        assert_eq!(store.pin_count(), 0);
    }

    #[test]
    fn test_publish_ad_rejects_text_payload() {
        let store = MemoryStore::new();
        let publisher = Publisher::new(&store);

        let text = GeneratedContent::text("not an image");
        let err = publisher.publish_ad(&santa_spec(), &text).unwrap_err();
        assert!(matches!(err, AdCraftError::PublishError(_)));
        assert_eq!(store.pin_count(), 0);
    }

    /// Store double whose first pin succeeds and second pin fails, for the
    /// orphaned-image error path
    #[derive(Default)]
    struct SecondPinFails {
        calls: std::sync::Mutex<usize>,
    }

    impl PinStore for SecondPinFails {
        fn name(&self) -> &str {
            "second-pin-fails"
        }

        fn pin_file(
            &self,
            _content: &[u8],
            _options: &PinOptions,
        ) -> adcraft_core::Result<ContentIdentifier> {
            let mut calls = self.calls.lock().unwrap();
            *calls += 1;
            Ok(ContentIdentifier::new("QmOrphan"))
        }

        fn pin_json(
            &self,
            _content: &serde_json::Value,
            _options: &PinOptions,
        ) -> adcraft_core::Result<ContentIdentifier> {
            Err(AdCraftError::PublishError("metadata rejected".to_string()))
        }

        fn pin_list(
            &self,
            _hash_filter: Option<&str>,
        ) -> adcraft_core::Result<Vec<adcraft_store::PinRecord>> {
            Ok(vec![])
        }
    }
}
