//! Shiori main entry point
//!
//! This is the command-line interface for the Shiori title harvester.

use anyhow::Context;
use clap::Parser;
use shiori::config::{load_config_with_hash, Config};
use shiori::harvest::harvest;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Shiori: a resilient article title harvester
///
/// Shiori fetches a single page with bounded retries and exponential
/// backoff, extracts article titles via a CSS selector, and writes them
/// to a JSON file.
#[derive(Parser, Debug)]
#[command(name = "shiori")]
#[command(version = "1.0.0")]
#[command(about = "A resilient article title harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be fetched without touching the network
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, config_hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("failed to load configuration from {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", config_hash);

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    run(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("shiori=info,warn"),
            1 => EnvFilter::new("shiori=debug,info"),
            2 => EnvFilter::new("shiori=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows the plan
fn handle_dry_run(config: &Config) {
    println!("=== Shiori Dry Run ===\n");

    println!("Fetch:");
    println!("  URL: {}", config.fetch.base_url);
    println!("  Max attempts: {}", config.fetch.retries.max(1));
    println!(
        "  Timeouts: total {}s, connect {}s, socket-connect {}s, socket-read {}s",
        config.fetch.timeout.total,
        config.fetch.timeout.connect,
        config.fetch.timeout.socket_connect,
        config.fetch.timeout.socket_read
    );
    if let Some(agent) = &config.fetch.user_agent {
        println!("  User agent: {}", agent);
    }

    println!("\nExtract:");
    println!("  Title selector: {}", config.extract.title_selector);

    println!("\nOutput:");
    println!("  JSON path: {}", config.output.json_path);

    println!("\n✓ Configuration is valid");
}

/// Runs the harvest and reports the outcome
async fn run(config: Config) -> anyhow::Result<()> {
    let document = harvest(&config)
        .await
        .with_context(|| format!("failed to harvest {}", config.fetch.base_url))?;

    println!(
        "✓ Wrote {} titles to {}",
        document.count, config.output.json_path
    );

    Ok(())
}
