//! Tile filename parsing
//!
//! Global Mangrove Watch tiles are named after the north-west corner of the
//! one-degree cell they cover and the epoch they describe:
//!
//! ```text
//! GMW_N26W082_2020_v3.tif
//!     │  │    │     └ revision
//!     │  │    └ epoch year
//!     │  └ west edge (W negative, E positive)
//!     └ north edge (S negative, N positive)
//! ```

use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use url::Url;

use crate::app::models::{Bbox, Geometry};
use crate::errors::{ItemError, ItemResult, ParseError, ParseResult};

lazy_static! {
    static ref TILE_FILENAME_RE: Regex =
        Regex::new(r"^GMW_([NS])(\d+)([EW])(\d+)_(\d{4})_v(\d+)\.tif$").unwrap();
}

/// Tile bounds in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl BoundingBox {
    /// `[west, south, east, north]`
    pub fn to_array(&self) -> Bbox {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }
}

/// Spatial and temporal attributes recovered from a tile filename
#[derive(Debug, Clone, PartialEq)]
pub struct GeospatialAttributes {
    /// Northern edge of the tile, signed degrees
    pub latitude: i32,
    /// Western edge of the tile, signed degrees
    pub longitude: i32,
    /// Epoch year
    pub year: i32,
    /// Product revision (`v3` -> 3)
    pub revision: u32,
    /// Unit-degree square hanging south-east of (longitude, latitude)
    pub bounding_box: BoundingBox,
    /// December 31 of `year`, midnight UTC
    pub timestamp: DateTime<Utc>,
}

impl GeospatialAttributes {
    /// Footprint polygon of the tile
    pub fn geometry(&self) -> Geometry {
        Geometry::from_bbox(self.bounding_box.to_array())
    }
}

/// Parse a tile filename such as `GMW_N26W082_2020_v3.tif`
///
/// Returns `ParseError::UnrecognizedFilename` when the name does not follow
/// the convention; no partial result is ever produced. A zero latitude or
/// longitude must be written with `N` or `E`.
pub fn parse_tile_filename(filename: &str) -> ParseResult<GeospatialAttributes> {
    let captures = TILE_FILENAME_RE
        .captures(filename)
        .ok_or_else(|| ParseError::UnrecognizedFilename {
            filename: filename.to_string(),
        })?;

    let latitude_magnitude: i32 = parse_component(filename, "latitude", &captures[2])?;
    let longitude_magnitude: i32 = parse_component(filename, "longitude", &captures[4])?;
    let year: i32 = parse_component(filename, "year", &captures[5])?;
    let revision: u32 = parse_component(filename, "revision", &captures[6])?;

    for (component, hemisphere, magnitude, positive) in [
        ("latitude", &captures[1], latitude_magnitude, "N"),
        ("longitude", &captures[3], longitude_magnitude, "E"),
    ] {
        // zero has no sign to carry S or W
        if magnitude == 0 && hemisphere != positive {
            return Err(ParseError::InvalidComponent {
                filename: filename.to_string(),
                component,
                reason: format!("zero must be written as {}", positive),
            });
        }
    }

    let latitude = if &captures[1] == "N" {
        latitude_magnitude
    } else {
        -latitude_magnitude
    };
    let longitude = if &captures[3] == "E" {
        longitude_magnitude
    } else {
        -longitude_magnitude
    };

    let timestamp = Utc
        .with_ymd_and_hms(year, 12, 31, 0, 0, 0)
        .single()
        .ok_or_else(|| ParseError::InvalidComponent {
            filename: filename.to_string(),
            component: "year",
            reason: format!("{} is not a representable date", year),
        })?;

    let bounding_box = BoundingBox {
        min_lon: f64::from(longitude),
        min_lat: f64::from(latitude) - 1.0,
        max_lon: f64::from(longitude) + 1.0,
        max_lat: f64::from(latitude),
    };

    Ok(GeospatialAttributes {
        latitude,
        longitude,
        year,
        revision,
        bounding_box,
        timestamp,
    })
}

fn parse_component<T>(filename: &str, component: &'static str, digits: &str) -> ParseResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    digits.parse().map_err(|e: T::Err| ParseError::InvalidComponent {
        filename: filename.to_string(),
        component,
        reason: e.to_string(),
    })
}

/// Final path segment of an asset href
///
/// Accepts local paths, `file://` URIs and remote URLs; query strings and
/// fragments of URLs are ignored.
pub fn href_basename(href: &str) -> ItemResult<String> {
    let missing = || ItemError::MissingFilename {
        href: href.to_string(),
    };

    // Single-letter schemes are Windows drive letters, not URLs
    if let Ok(url) = Url::parse(href) {
        if url.scheme().len() > 1 {
            return url
                .path_segments()
                .and_then(|segments| segments.last())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .ok_or_else(missing);
        }
    }

    Path::new(href)
        .file_name()
        .and_then(|name| name.to_str())
        .map(str::to_string)
        .ok_or_else(missing)
}
