//! Command-line argument parsing for the GMW STAC generator
//!
//! This module defines the CLI structure using clap derive macros: a parent
//! command with one subcommand per STAC object type.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// gmw_stac - STAC metadata for Global Mangrove Watch tiles
#[derive(Parser, Debug)]
#[command(
    name = "gmw_stac",
    version,
    about = "Create STAC metadata for the Global Mangrove Watch v3.0 dataset",
    long_about = "Creates the STAC Collection describing the Global Mangrove Watch (1996 - 2020) v3.0 dataset,
and STAC Items for individual mangrove-cover COG tiles named like GMW_N26W082_2020_v3.tif."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - errors only
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Creates a STAC collection
    CreateCollection(CreateCollectionArgs),

    /// Create a STAC item
    CreateItem(CreateItemArgs),
}

/// Arguments for the create-collection command
#[derive(Args, Debug, Clone)]
pub struct CreateCollectionArgs {
    /// An HREF for the Collection JSON
    #[arg(value_name = "DESTINATION")]
    pub destination: String,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

/// Arguments for the create-item command
#[derive(Args, Debug, Clone)]
pub struct CreateItemArgs {
    /// HREF of the mangrove-cover COG associated with the Item
    #[arg(value_name = "SOURCE")]
    pub primary_asset_href: String,

    /// An HREF for the STAC Item
    #[arg(value_name = "DESTINATION")]
    pub destination: String,

    /// HREF of the mangrove-change COG for the same tile
    #[arg(long, value_name = "HREF")]
    pub change_asset_href: Option<String>,

    /// Write compact JSON instead of indented JSON
    #[arg(long)]
    pub compact: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Logging level requested by flags, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_create_item_with_change() {
        let cli = Cli::try_parse_from([
            "gmw_stac",
            "create-item",
            "data/GMW_N26W082_2020_v3.tif",
            "item.json",
            "--change-asset-href",
            "data/GMW_N26W082_chng_f1996_t2020_v3.tif",
        ])
        .unwrap();

        match cli.command {
            Commands::CreateItem(args) => {
                assert_eq!(args.primary_asset_href, "data/GMW_N26W082_2020_v3.tif");
                assert_eq!(args.destination, "item.json");
                assert_eq!(
                    args.change_asset_href.as_deref(),
                    Some("data/GMW_N26W082_chng_f1996_t2020_v3.tif")
                );
                assert!(!args.compact);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_create_collection() {
        let cli = Cli::try_parse_from([
            "gmw_stac",
            "--quiet",
            "create-collection",
            "collection.json",
            "--compact",
        ])
        .unwrap();

        assert_eq!(cli.log_level(), Some(tracing::Level::ERROR));
        match cli.command {
            Commands::CreateCollection(args) => {
                assert_eq!(args.destination, "collection.json");
                assert!(args.compact);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_missing_destination_rejected() {
        let result = Cli::try_parse_from(["gmw_stac", "create-item", "tile.tif"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level() {
        let cli = Cli::try_parse_from(["gmw_stac", "create-collection", "c.json", "-v"]).unwrap();
        assert_eq!(cli.log_level(), Some(tracing::Level::INFO));

        let cli = Cli::try_parse_from(["gmw_stac", "create-collection", "c.json"]).unwrap();
        assert_eq!(cli.log_level(), None);
    }
}
