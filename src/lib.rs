//! Global Mangrove Watch STAC Library
//!
//! Generates STAC metadata for the Global Mangrove Watch v3.0 dataset: the
//! dataset Collection and one Item per mangrove-cover COG tile, with tile
//! extents recovered from the tile filenames.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod prelude;

// Re-export commonly used types for convenience
pub use errors::{AppError, Result};
