//! Show generation provider availability

use adcraft_gen::providers::{available_providers, create_provider};
use adcraft_gen::{AdCraftConfig, ProviderStatus};
use anyhow::Result;

pub fn run() -> Result<()> {
    let config = AdCraftConfig::load()?;

    for name in available_providers() {
        let status = match create_provider(name, &config) {
            Ok(provider) => match provider.health_check() {
                Ok(ProviderStatus::Available) => "available".to_string(),
                Ok(ProviderStatus::NoApiKey) => "no API key".to_string(),
                Ok(ProviderStatus::Unavailable(reason)) => format!("unavailable: {}", reason),
                Err(e) => format!("error: {}", e),
            },
            Err(e) => format!("not configured: {}", e),
        };
        println!("{:<12} {}", name, status);
    }

    Ok(())
}
