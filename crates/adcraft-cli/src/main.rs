//! AdCraft CLI - command-line interface for the ad publication pipeline

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{generate, pins, providers, publish, serve};

#[derive(Parser)]
#[command(name = "adcraft")]
#[command(about = "Generate AI advertisements and publish them to IPFS", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate ad content without publishing
    Generate {
        /// Description / prompt for generation
        prompt: String,

        /// Content kind to generate (image or text)
        #[arg(long, default_value = "image")]
        kind: String,

        /// Provider to use (openai, mock)
        #[arg(long)]
        provider: Option<String>,

        /// Write the payload to a file instead of stdout
        #[arg(long)]
        output: Option<String>,
    },

    /// Generate an ad and publish image + metadata to the storage network
    Publish {
        /// Ad name
        name: String,

        /// Ad description
        description: String,

        /// Unique generation prompt for the ad image
        #[arg(long)]
        prompt: String,

        /// Ad format (e.g. video, banner)
        #[arg(long, default_value = "image")]
        r#type: String,

        /// Market niche
        #[arg(long, default_value = "")]
        niche: String,

        /// Tagline text
        #[arg(long, default_value = "")]
        tagline: String,

        /// Promoting brand
        #[arg(long, default_value = "")]
        promoter: String,

        /// Creator handle
        #[arg(long, default_value = "")]
        creator: String,

        /// Space-separated hash tags
        #[arg(long, default_value = "")]
        hash_tags: String,

        /// Creation date (defaults to today)
        #[arg(long)]
        created_at: Option<String>,

        /// Provider to use (openai, mock)
        #[arg(long)]
        provider: Option<String>,
    },

    /// List pinned content, optionally filtered by identifier substring
    Pins {
        /// Identifier substring to filter by
        #[arg(long)]
        hash: Option<String>,
    },

    /// Show generation provider availability
    Providers,

    /// Serve the HTTP endpoint the oracle request calls
    Serve {
        /// Address to bind (host:port)
        #[arg(long, default_value = "127.0.0.1:3500")]
        bind: String,

        /// Provider to use (openai, mock)
        #[arg(long)]
        provider: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            prompt,
            kind,
            provider,
            output,
        } => generate::run(&prompt, &kind, provider.as_deref(), output.as_deref()),
        Commands::Publish {
            name,
            description,
            prompt,
            r#type,
            niche,
            tagline,
            promoter,
            creator,
            hash_tags,
            created_at,
            provider,
        } => publish::run(publish::PublishArgs {
            name,
            description,
            prompt,
            type_of_ad: r#type,
            niche,
            tagline,
            promoter,
            creator,
            hash_tags,
            created_at,
            provider,
        }),
        Commands::Pins { hash } => pins::run(hash.as_deref()),
        Commands::Providers => providers::run(),
        Commands::Serve { bind, provider } => serve::run(&bind, provider.as_deref()),
    }
}
