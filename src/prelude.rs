//! Prelude module for the GMW STAC Library
//!
//! Re-exports the items needed for typical usage with a single
//! `use gmw_stac::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust
//! use gmw_stac::prelude::*;
//!
//! let builder = ItemBuilder::new(ItemConfig::default());
//! let item = builder
//!     .build(
//!         "GMW_N26W082_2020_v3.tif",
//!         Some("GMW_N26W082_chng_f1996_t2020_v3.tif"),
//!     )
//!     .unwrap();
//! assert_eq!(item.assets.len(), 2);
//! ```

// Core result types
pub use crate::errors::{AppError, ItemError, ParseError, Result, StacError};

pub use crate::app::{
    create_collection, create_item, format_multiline, parse_tile_filename, read_document,
    write_document, AssetRole, Collection, GeospatialAttributes, Item, ItemBuilder, ItemConfig,
    WriteOptions,
};

pub use crate::config::AppConfig;

// Commonly used constants
pub use crate::constants::{CHANGE_ASSET_NAME, COG_ASSET_NAME, COLLECTION_ID, STAC_VERSION};
