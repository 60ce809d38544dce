//! CLI administration tool for the redirect registry.
//!
//! Runs create and delete requests through the same request handler the HTTP
//! service uses, against the configured bucket, with the configured secret.
//!
//! # Usage
//!
//! ```bash
//! # Create a redirect
//! cargo run --bin registry-admin -- create https://example.com
//!
//! # Delete a redirect (asks for confirmation)
//! cargo run --bin registry-admin -- delete ab12XY
//!
//! # Check the store is reachable
//! cargo run --bin registry-admin -- check
//!
//! # Print the raw response envelope
//! cargo run --bin registry-admin -- --json create https://example.com
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `KEY`, `BUCKET`, `STORE_BACKEND`, `AWS_REGION`, `S3_ENDPOINT`, ...

use redirect_registry::config::{self, Config};
use redirect_registry::domain::entities::{RegistryRequest, RegistryResponse};
use redirect_registry::server::build_request_handler;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing redirects.
#[derive(Parser)]
#[command(name = "registry-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Print the full response envelope as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Create a redirect to URL and print its code
    Create {
        /// Target URL
        url: String,
    },

    /// Delete the redirect for CODE
    Delete {
        /// Code to revoke
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check that the store is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load_from_env().context("Failed to load configuration")?;

    match cli.command {
        Commands::Create { url } => create(&config, &url, cli.json).await?,
        Commands::Delete { code, yes } => delete(&config, &code, yes, cli.json).await?,
        Commands::Check => check(&config).await?,
    }

    Ok(())
}

/// Creates a redirect and prints the generated code.
async fn create(config: &Config, url: &str, json: bool) -> Result<()> {
    let handler = build_request_handler(config).await;
    let response = handler
        .handle(RegistryRequest::create(&config.shared_secret, url))
        .await;

    report(&response, json)?;

    if response.is_success() && !json {
        println!("  Target: {}", url.cyan());
        if !config.bucket.is_empty() {
            println!(
                "  Object: s3://{}/{}",
                config.bucket,
                response.body.bright_yellow()
            );
        }
    }

    finish(&response)
}

/// Deletes a redirect after confirmation.
async fn delete(config: &Config, code: &str, skip_confirm: bool, json: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete redirect '{}'?", code))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let handler = build_request_handler(config).await;
    let response = handler
        .handle(RegistryRequest::delete(&config.shared_secret, code))
        .await;

    report(&response, json)?;
    finish(&response)
}

/// Probes the configured store.
async fn check(config: &Config) -> Result<()> {
    println!("{}", "Checking store...".bright_blue());

    let handler = build_request_handler(config).await;

    if handler.store().health_check().await {
        println!("{}", "✓ Store reachable".green().bold());
        println!("  Backend: {}", config.store_backend.to_string().cyan());
        if !config.bucket.is_empty() {
            println!("  Bucket:  {} ({})", config.bucket.cyan(), config.region);
        }
        Ok(())
    } else {
        anyhow::bail!("store probe failed")
    }
}

fn report(response: &RegistryResponse, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    if response.is_success() {
        println!(
            "{} {}",
            "✓".green().bold(),
            response.body.bright_yellow().bold()
        );
    } else {
        println!(
            "{} {} {}",
            "✗".red().bold(),
            response.status_code.to_string().red(),
            response.body
        );
    }

    Ok(())
}

fn finish(response: &RegistryResponse) -> Result<()> {
    if response.is_success() {
        Ok(())
    } else {
        anyhow::bail!("request rejected with status {}", response.status_code)
    }
}
