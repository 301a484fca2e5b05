//! Layered configuration system
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `ADCRAFT_OPENAI_API_KEY`, `ADCRAFT_PINATA_API_KEY`, ...
//! 2. Project-local: `.adcraft/config.toml`
//! 3. Global: `~/.adcraft/config.toml`
//!
//! Credentials are validated when a client is constructed from the config, so a
//! missing key is a startup failure rather than a mid-pipeline crash.

use adcraft_core::{AdCraftError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// AI provider configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OpenAiConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Storage network configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PinataConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<String>,
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    #[serde(default = "default_provider")]
    pub default_provider: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
        }
    }
}

fn default_provider() -> String {
    "openai".to_string()
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AdCraftConfigFile {
    #[serde(default)]
    pub openai: OpenAiConfig,
    #[serde(default)]
    pub pinata: PinataConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone)]
pub struct AdCraftConfig {
    pub openai: OpenAiConfig,
    pub pinata: PinataConfig,
    pub generation: GenerationConfig,
}

impl AdCraftConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = AdCraftConfigFile::default();

        // Layer 1: Global config (~/.adcraft/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        // Layer 2: Project-local config (.adcraft/config.toml)
        let local_path = PathBuf::from(".adcraft/config.toml");
        if local_path.exists() {
            let local = Self::load_file(&local_path)?;
            Self::merge_into(&mut config, local);
        }

        // Layer 3: Environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(Self::from_file(config))
    }

    /// Load config from a specific file path only (for testing)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::load_file(path)?;
        Self::apply_env_overrides(&mut config);
        Ok(Self::from_file(config))
    }

    fn from_file(file: AdCraftConfigFile) -> Self {
        Self {
            openai: file.openai,
            pinata: file.pinata,
            generation: file.generation,
        }
    }

    /// AI provider API key, required for the real provider
    pub fn require_openai_key(&self) -> Result<&str> {
        self.openai.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            AdCraftError::ConfigError(
                "OpenAI API key not configured. Set ADCRAFT_OPENAI_API_KEY or add to .adcraft/config.toml".to_string(),
            )
        })
    }

    /// Storage network key pair, required for pinning and lookup
    pub fn require_pinata_keys(&self) -> Result<(&str, &str)> {
        let api_key = self.pinata.api_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            AdCraftError::ConfigError(
                "Pinata API key not configured. Set ADCRAFT_PINATA_API_KEY or add to .adcraft/config.toml".to_string(),
            )
        })?;
        let secret = self.pinata.secret_key.as_deref().filter(|k| !k.is_empty()).ok_or_else(|| {
            AdCraftError::ConfigError(
                "Pinata secret key not configured. Set ADCRAFT_PINATA_SECRET_KEY or add to .adcraft/config.toml".to_string(),
            )
        })?;
        Ok((api_key, secret))
    }

    pub fn openai_api_url(&self) -> Option<&str> {
        self.openai.api_url.as_deref()
    }

    pub fn pinata_api_url(&self) -> Option<&str> {
        self.pinata.api_url.as_deref()
    }

    /// The provider used when the caller does not name one
    pub fn default_provider(&self) -> &str {
        &self.generation.default_provider
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".adcraft").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<AdCraftConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: AdCraftConfigFile = toml::from_str(&content).map_err(|e| {
            AdCraftError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut AdCraftConfigFile, overlay: AdCraftConfigFile) {
        if overlay.openai.api_key.is_some() {
            base.openai.api_key = overlay.openai.api_key;
        }
        if overlay.openai.api_url.is_some() {
            base.openai.api_url = overlay.openai.api_url;
        }
        if overlay.pinata.api_key.is_some() {
            base.pinata.api_key = overlay.pinata.api_key;
        }
        if overlay.pinata.secret_key.is_some() {
            base.pinata.secret_key = overlay.pinata.secret_key;
        }
        if overlay.pinata.api_url.is_some() {
            base.pinata.api_url = overlay.pinata.api_url;
        }
        if overlay.generation.default_provider != default_provider() {
            base.generation.default_provider = overlay.generation.default_provider;
        }
    }

    fn apply_env_overrides(config: &mut AdCraftConfigFile) {
        if let Ok(key) = std::env::var("ADCRAFT_OPENAI_API_KEY") {
            config.openai.api_key = Some(key);
        }
        if let Ok(url) = std::env::var("ADCRAFT_OPENAI_API_URL") {
            config.openai.api_url = Some(url);
        }
        if let Ok(key) = std::env::var("ADCRAFT_PINATA_API_KEY") {
            config.pinata.api_key = Some(key);
        }
        if let Ok(key) = std::env::var("ADCRAFT_PINATA_SECRET_KEY") {
            config.pinata.secret_key = Some(key);
        }
        if let Ok(url) = std::env::var("ADCRAFT_PINATA_API_URL") {
            config.pinata.api_url = Some(url);
        }
    }
}
