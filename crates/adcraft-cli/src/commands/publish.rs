//! Generate an ad and publish image + metadata

use adcraft_core::time::today_utc;
use adcraft_gen::providers::create_provider;
use adcraft_gen::AdCraftConfig;
use adcraft_pipeline::{encode_scalar_hex, AdSpec, Publisher};
use anyhow::Result;

pub struct PublishArgs {
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub type_of_ad: String,
    pub niche: String,
    pub tagline: String,
    pub promoter: String,
    pub creator: String,
    pub hash_tags: String,
    pub created_at: Option<String>,
    pub provider: Option<String>,
}

pub fn run(args: PublishArgs) -> Result<()> {
    let config = AdCraftConfig::load()?;
    let provider_name = args
        .provider
        .as_deref()
        .unwrap_or_else(|| config.default_provider());
    let provider = create_provider(provider_name, &config)?;
    let store = super::open_store(&config)?;

    let spec = AdSpec {
        name: args.name,
        description: args.description,
        type_of_ad: args.type_of_ad,
        niche: args.niche,
        tagline: args.tagline,
        promoter: args.promoter,
        creator: args.creator,
        hash_tags: args.hash_tags,
        unique_ad_prompt: args.prompt,
        created_at: args.created_at.unwrap_or_else(today_utc),
    };

    println!("Generating ad image via {}...", provider.name());
    let publisher = Publisher::new(&store);
    let result = publisher.create_ad(provider.as_ref(), &spec)?;

    println!("Image:    {}", result.image);
    println!("Metadata: {}", result.metadata);
    println!("Scalar:   {}", encode_scalar_hex(&result.metadata));

    Ok(())
}
