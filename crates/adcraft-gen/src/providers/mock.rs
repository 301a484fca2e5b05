//! Mock provider for testing
//!
//! Produces a small solid-color PNG (images) or an echo completion (text)
//! without any network calls.

use crate::provider::*;
use adcraft_core::{AdCraftError, Result};
use std::io::Cursor;

const MOCK_IMAGE_SIZE: u32 = 8;

/// A mock provider that generates placeholder content locally
#[derive(Default)]
pub struct MockProvider;

impl MockProvider {
    pub fn new() -> Self {
        Self
    }
}

impl GenerationProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn health_check(&self) -> Result<ProviderStatus> {
        Ok(ProviderStatus::Available)
    }

    fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedContent> {
        ensure_prompt(&request.prompt)?;
        let bytes = generate_solid_png(&request.prompt)?;
        Ok(GeneratedContent::image_from_png(&bytes))
    }

    fn generate_text(&self, prompt: &str) -> Result<GeneratedContent> {
        ensure_prompt(prompt)?;
        Ok(GeneratedContent::text(format!("mock completion for: {}", prompt)))
    }
}

/// Render a solid-color PNG whose color is derived from the prompt
fn generate_solid_png(prompt: &str) -> Result<Vec<u8>> {
    let hash_val = prompt
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    let r = ((hash_val >> 16) & 0xFF) as u8;
    let g = ((hash_val >> 8) & 0xFF) as u8;
    let b = (hash_val & 0xFF) as u8;

    let mut img_data = Vec::with_capacity((MOCK_IMAGE_SIZE * MOCK_IMAGE_SIZE * 4) as usize);
    for _ in 0..(MOCK_IMAGE_SIZE * MOCK_IMAGE_SIZE) {
        img_data.extend_from_slice(&[r, g, b, 255]);
    }

    let img = image::RgbaImage::from_raw(MOCK_IMAGE_SIZE, MOCK_IMAGE_SIZE, img_data)
        .ok_or_else(|| AdCraftError::GenerationError("Failed to create image buffer".to_string()))?;

    let mut buf = Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)
        .map_err(|e| AdCraftError::GenerationError(format!("Failed to encode PNG: {}", e)))?;

    Ok(buf.into_inner())
}
