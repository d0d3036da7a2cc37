//! Command-line interface components
//!
//! This module contains CLI-specific code for the GMW STAC generator:
//! argument parsing and the command handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CreateCollectionArgs, CreateItemArgs, GlobalArgs};
pub use commands::{handle_create_collection, handle_create_item};
