//! Generate ad content without publishing

use adcraft_gen::providers::create_provider;
use adcraft_gen::{AdCraftConfig, ContentKind, ImageRequest};
use anyhow::{bail, Result};

pub fn run(prompt: &str, kind: &str, provider: Option<&str>, output: Option<&str>) -> Result<()> {
    let config = AdCraftConfig::load()?;
    let provider_name = provider.unwrap_or_else(|| config.default_provider());
    let provider = create_provider(provider_name, &config)?;

    let content = match kind {
        "image" => provider.generate_image(&ImageRequest::new(prompt))?,
        "text" => provider.generate_text(prompt)?,
        other => bail!("Unknown content kind '{}'. Available: image, text", other),
    };

    match output {
        Some(path) => {
            if content.kind == ContentKind::Image {
                std::fs::write(path, content.image_bytes()?)?;
            } else {
                std::fs::write(path, &content.payload)?;
            }
            println!("Wrote {} content to {}", content.kind, path);
        }
        None => println!("{}", content.payload),
    }

    Ok(())
}
