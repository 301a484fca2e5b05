//! Generation provider trait and request/result types

use adcraft_core::{AdCraftError, Result};
use base64::{engine::general_purpose, Engine as _};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of content a provider produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Image,
    Text,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentKind::Image => write!(f, "image"),
            ContentKind::Text => write!(f, "text"),
        }
    }
}

/// Fully materialized generation output.
///
/// For images the payload is a self-contained `data:image/png;base64,...` URI;
/// for text it is the raw completion text. Either way the payload needs no
/// further network round-trips to interpret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    pub kind: ContentKind,
    pub payload: String,
}

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

impl GeneratedContent {
    /// Wrap raw PNG bytes as a data-URI image payload
    pub fn image_from_png(bytes: &[u8]) -> Self {
        let encoded = general_purpose::STANDARD.encode(bytes);
        Self {
            kind: ContentKind::Image,
            payload: format!("{}{}", PNG_DATA_URI_PREFIX, encoded),
        }
    }

    /// Wrap already base64-encoded PNG data as a data-URI image payload
    pub fn image_from_base64(encoded: &str) -> Self {
        Self {
            kind: ContentKind::Image,
            payload: format!("{}{}", PNG_DATA_URI_PREFIX, encoded),
        }
    }

    pub fn text(payload: impl Into<String>) -> Self {
        Self {
            kind: ContentKind::Text,
            payload: payload.into(),
        }
    }

    /// Decode the image payload back into raw bytes.
    ///
    /// Fails for text payloads and for payloads that are not a base64 data URI.
    pub fn image_bytes(&self) -> Result<Vec<u8>> {
        if self.kind != ContentKind::Image {
            return Err(AdCraftError::GenerationError(
                "payload is not an image".to_string(),
            ));
        }
        let encoded = self.payload.strip_prefix(PNG_DATA_URI_PREFIX).ok_or_else(|| {
            AdCraftError::GenerationError("image payload is not a PNG data URI".to_string())
        })?;
        general_purpose::STANDARD
            .decode(encoded)
            .map_err(|e| AdCraftError::GenerationError(format!("invalid base64 payload: {}", e)))
    }
}

/// A request to generate an advertisement image
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageRequest {
    /// Description / prompt for generation
    pub prompt: String,
    /// Provider model identifier
    #[serde(default = "default_image_model")]
    pub model: String,
    /// Output resolution, e.g. "1024x1024"
    #[serde(default = "default_image_size")]
    pub size: String,
    /// Render quality tier
    #[serde(default = "default_image_quality")]
    pub quality: String,
}

fn default_image_model() -> String {
    "dall-e-3".to_string()
}

fn default_image_size() -> String {
    "1024x1024".to_string()
}

fn default_image_quality() -> String {
    "standard".to_string()
}

impl ImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            model: default_image_model(),
            size: default_image_size(),
            quality: default_image_quality(),
        }
    }
}

/// Status returned by a provider health check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderStatus {
    Available,
    Unavailable(String),
    NoApiKey,
}

/// Trait implemented by each generation provider (OpenAI, Mock)
pub trait GenerationProvider: Send + Sync {
    /// Provider name (e.g. "openai", "mock")
    fn name(&self) -> &str;

    /// Check if the provider is available (API key set, service reachable)
    fn health_check(&self) -> Result<ProviderStatus>;

    /// Generate an image, returned as a self-contained data URI
    fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedContent>;

    /// Generate a text completion for a prompt
    fn generate_text(&self, prompt: &str) -> Result<GeneratedContent>;
}

/// Reject blank prompts before any network call is made
pub(crate) fn ensure_prompt(prompt: &str) -> Result<()> {
    if prompt.trim().is_empty() {
        return Err(AdCraftError::GenerationError(
            "prompt must not be empty".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_payload_roundtrip() {
        let bytes = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
        let content = GeneratedContent::image_from_png(&bytes);
        assert_eq!(content.kind, ContentKind::Image);
        assert!(content.payload.starts_with("data:image/png;base64,"));
        assert_eq!(content.image_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_text_payload_has_no_image_bytes() {
        let content = GeneratedContent::text("a catchy tagline");
        assert!(content.image_bytes().is_err());
    }

    #[test]
    fn test_image_bytes_rejects_non_data_uri() {
        let content = GeneratedContent {
            kind: ContentKind::Image,
            payload: "https://example.com/image.png".to_string(),
        };
        assert!(content.image_bytes().is_err());
    }

    #[test]
    fn test_image_request_defaults() {
        let request = ImageRequest::new("santa on a rooftop");
        assert_eq!(request.model, "dall-e-3");
        assert_eq!(request.size, "1024x1024");
        assert_eq!(request.quality, "standard");
    }

    #[test]
    fn test_ensure_prompt_rejects_blank() {
        assert!(ensure_prompt("").is_err());
        assert!(ensure_prompt("   ").is_err());
        assert!(ensure_prompt("ok").is_ok());
    }
}
