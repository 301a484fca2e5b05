//! OpenAI generation provider
//!
//! Images come back base64-encoded (`response_format: b64_json`) so the payload
//! is self-contained; no follow-up download is needed. Requests are single-shot:
//! resilience is the caller's concern, the provider only bounds each call with a
//! transport timeout.

use crate::config::AdCraftConfig;
use crate::provider::*;
use adcraft_core::{AdCraftError, Result};
use std::time::Duration;

const DEFAULT_OPENAI_URL: &str = "https://api.openai.com/v1";
const REQUEST_TIMEOUT_SECS: u64 = 120;
const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI provider for ad image and copy generation
pub struct OpenAiProvider {
    api_key: String,
    api_url: String,
}

impl OpenAiProvider {
    /// Create a new OpenAiProvider from config
    pub fn from_config(config: &AdCraftConfig) -> Result<Self> {
        let api_key = config.require_openai_key()?.to_string();
        let api_url = config
            .openai_api_url()
            .unwrap_or(DEFAULT_OPENAI_URL)
            .trim_end_matches('/')
            .to_string();
        Ok(Self { api_key, api_url })
    }

    fn post_json(&self, path: &str, payload: &serde_json::Value) -> Result<serde_json::Value> {
        let agent = build_agent();
        let mut response = agent
            .post(&format!("{}{}", self.api_url, path))
            .header("Authorization", &format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .send_json(payload)
            .map_err(|e| {
                AdCraftError::GenerationError(format!("OpenAI request failed: {}", e))
            })?;

        response.body_mut().read_json().map_err(|e| {
            AdCraftError::GenerationError(format!("Failed to parse OpenAI response: {}", e))
        })
    }
}

fn build_agent() -> ureq::Agent {
    let config = ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(REQUEST_TIMEOUT_SECS)))
        .build();
    config.into()
}

impl GenerationProvider for OpenAiProvider {
    fn name(&self) -> &str {
        "openai"
    }

    fn health_check(&self) -> Result<ProviderStatus> {
        if self.api_key.is_empty() {
            return Ok(ProviderStatus::NoApiKey);
        }
        Ok(ProviderStatus::Available)
    }

    fn generate_image(&self, request: &ImageRequest) -> Result<GeneratedContent> {
        ensure_prompt(&request.prompt)?;

        let payload = serde_json::json!({
            "model": request.model,
            "prompt": request.prompt,
            "n": 1,
            "size": request.size,
            "quality": request.quality,
            "response_format": "b64_json",
        });

        let response = self.post_json("/images/generations", &payload)?;
        let encoded = parse_image_response(&response)?;
        Ok(GeneratedContent::image_from_base64(&encoded))
    }

    fn generate_text(&self, prompt: &str) -> Result<GeneratedContent> {
        ensure_prompt(prompt)?;

        let payload = serde_json::json!({
            "model": CHAT_MODEL,
            "messages": [{ "role": "user", "content": prompt }],
        });

        let response = self.post_json("/chat/completions", &payload)?;
        let text = parse_chat_response(&response)?;
        Ok(GeneratedContent::text(text))
    }
}

/// Extract the base64 image data from an images/generations response
pub fn parse_image_response(response: &serde_json::Value) -> Result<String> {
    response
        .get("data")
        .and_then(|d| d.as_array())
        .and_then(|arr| arr.first())
        .and_then(|entry| entry.get("b64_json"))
        .and_then(|b| b.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AdCraftError::GenerationError(format!(
                "Unexpected image response format: {}",
                serde_json::to_string(response).unwrap_or_default()
            ))
        })
}

/// Extract the completion text from a chat/completions response
pub fn parse_chat_response(response: &serde_json::Value) -> Result<String> {
    response
        .get("choices")
        .and_then(|c| c.as_array())
        .and_then(|arr| arr.first())
        .and_then(|choice| choice.get("message"))
        .and_then(|m| m.get("content"))
        .and_then(|c| c.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AdCraftError::GenerationError(format!(
                "Unexpected chat response format: {}",
                serde_json::to_string(response).unwrap_or_default()
            ))
        })
}
