//! AdCraft Gen - AI content generation for the ad publication pipeline
//!
//! Pluggable provider framework for generating ad images and copy via AI
//! services, with layered configuration and a network-free mock provider
//! for tests.

pub mod config;
pub mod provider;
pub mod providers;

pub use config::AdCraftConfig;
pub use provider::{
    ContentKind, GeneratedContent, GenerationProvider, ImageRequest, ProviderStatus,
};
