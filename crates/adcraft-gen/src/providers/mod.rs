//! Provider registry
//!
//! Maps provider names to concrete implementations.

pub mod mock;
pub mod openai;

use crate::config::AdCraftConfig;
use crate::provider::GenerationProvider;
use adcraft_core::{AdCraftError, Result};

/// Create a provider by name with configuration
pub fn create_provider(name: &str, config: &AdCraftConfig) -> Result<Box<dyn GenerationProvider>> {
    match name {
        "mock" => Ok(Box::new(mock::MockProvider::new())),
        "openai" => Ok(Box::new(openai::OpenAiProvider::from_config(config)?)),
        _ => Err(AdCraftError::GenerationError(format!(
            "Unknown provider '{}'. Available: mock, openai",
            name
        ))),
    }
}

/// List all available provider names
pub fn available_providers() -> Vec<&'static str> {
    vec!["mock", "openai"]
}
