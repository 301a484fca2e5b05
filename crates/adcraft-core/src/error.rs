//! Error types for AdCraft

use thiserror::Error;

/// The main error type for AdCraft operations
#[derive(Debug, Error)]
pub enum AdCraftError {
    #[error("Generation error: {0}")]
    GenerationError(String),

    #[error("Publish error: {0}")]
    PublishError(String),

    #[error("Composition error: {0}")]
    CompositionError(String),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for AdCraft operations
pub type Result<T> = std::result::Result<T, AdCraftError>;
