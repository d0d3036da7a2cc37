//! Core metadata generation for the Global Mangrove Watch dataset
//!
//! This module contains the tile filename parser, the asset catalog, the
//! Item and Collection builders, and the STAC document model they produce.
//!
//! # Examples
//!
//! ```rust
//! use gmw_stac::app::{create_collection, create_item};
//!
//! let collection = create_collection();
//! assert_eq!(collection.id, "global-mangrove-watch-3.0");
//!
//! let item = create_item("data/GMW_N26W082_2020_v3.tif", None).unwrap();
//! assert_eq!(item.id, "GMW_N26W082_2020_v3");
//! assert_eq!(item.bbox, [-82.0, 25.0, -81.0, 26.0]);
//! ```

pub mod assets;
pub mod collection;
pub mod filename;
pub mod io;
pub mod item;
pub mod models;
pub mod projection;
pub mod text;

// Re-export main public API
pub use assets::{AssetRole, AssetTemplate, LegendClass, Rgb};
pub use collection::create_collection;
pub use filename::{href_basename, parse_tile_filename, BoundingBox, GeospatialAttributes};
pub use io::{read_document, resolve_destination, write_document, WriteOptions};
pub use item::{create_item, ItemBuilder, ItemConfig};
pub use models::{Asset, Collection, Geometry, Item, ItemAssetDefinition, Link, Provider};
pub use projection::affine_from_bounds;
pub use text::format_multiline;
