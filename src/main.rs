//! GMW STAC generator CLI application
//!
//! Command-line interface for creating STAC metadata for the Global Mangrove
//! Watch v3.0 mangrove-cover tiles.

use std::process;

use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};

use gmw_stac::cli::{handle_create_collection, handle_create_item, Cli, Commands};
use gmw_stac::config::AppConfig;
use gmw_stac::errors::Result;

fn main() {
    // Handle any errors that occurred
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
fn run() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok(); // Ignore errors if file doesn't exist

    let cli = Cli::parse_args();
    let config = AppConfig::load(cli.global.config.clone())?;

    init_logging(&cli, &config);

    info!("gmw_stac v{} starting", env!("CARGO_PKG_VERSION"));
    match &config.source {
        Some(path) => info!("Loaded configuration from: {}", path.display()),
        None => debug!("No config file found, using defaults"),
    }

    match cli.command {
        Commands::CreateCollection(args) => {
            info!("Executing create-collection command");
            handle_create_collection(args, &config)
        }
        Commands::CreateItem(args) => {
            info!("Executing create-item command");
            handle_create_item(args, &config)
        }
    }
}

/// Initialize logging from CLI verbosity flags, falling back to the config file
fn init_logging(cli: &Cli, config: &AppConfig) {
    let log_level = cli.log_level().unwrap_or_else(|| config.log_level());

    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = format!("gmw_stac={}", log_level).parse() {
        filter = filter.add_directive(directive);
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(cli.global.very_verbose) // Show levels only in very verbose mode
        .with_writer(std::io::stderr)
        .init();

    if cli.global.very_verbose {
        info!("Very verbose logging enabled");
    } else if cli.global.verbose {
        info!("Verbose logging enabled");
    }
}
