//! Dataset constants for the Global Mangrove Watch STAC generator
//!
//! Identifiers, citation text, provider details and projection defaults,
//! grouped by the part of the metadata they feed.

/// Dataset identity and descriptive text
pub mod dataset {
    /// Dataset version, also published through the version extension
    pub const VERSION: &str = "3.0";

    /// Collection identifier
    pub const COLLECTION_ID: &str = "global-mangrove-watch-3.0";

    /// Collection title
    pub const TITLE: &str = "Global Mangrove Watch (1996 - 2020) Version 3.0 Dataset";

    /// Collection keywords
    pub const KEYWORDS: &[&str] = &["mangrove", "SAR"];

    /// SPDX license identifier
    pub const LICENSE: &str = "CC-BY-4.0";

    /// Collection description as written; the publication citation is
    /// appended after it and the whole text normalised before publishing
    pub const DESCRIPTION: &str = "This study has used L-band Synthetic Aperture Radar (SAR) global
mosaic datasets from the Japan Aerospace Exploration Agency (JAXA) for 11 epochs from
1996 to 2020 to develop a long-term time-series of global mangrove extent and change.
The study used a map-to-image approach to change detection where the baseline map (GMW
v2.5) was updated using thresholding and a contextual mangrove change mask. This
approach was applied between all image-date pairs producing 10 maps for each epoch,
which were summarised to produce the global mangrove time-series. The resulting
mangrove extent maps had an estimated accuracy of 87.4 %
(95th conf. int.: 86.2 - 88.6 %), although the accuracies of the individual gain and
loss change classes were lower at 58.1 % (52.4 - 63.9 %) and 60.6 % (56.1 - 64.8 %),
respectively. Sources of error included a mis-registration in the SAR mosaic datasets,
which could only be partially corrected for, but also confusion in fragmented areas of
mangroves, such as around aquaculture ponds. Overall, 152,604 km2 (133,996 - 176,910)
of mangroves were identified for 1996, with this decreasing by -5,245 km2
(-13,587 - 3686) resulting in a total extent of 147,359 km2 (127,925 - 168,895) in
2020, and representing an estimated loss of 3.4 % over the 24-year time period. The
Global Mangrove Watch Version 3.0 represents the most comprehensive record of global
mangrove change achieved to date and is expected to support a wide range of activities,
including the ongoing monitoring of the global coastal environment, defining and
assessments of progress towards conservation targets, protected area planning and risk
assessments of mangrove ecosystems worldwide.

The paper which goes along with this dataset is available at the following reference:";
}

/// Scientific citation metadata
pub mod citation {
    /// DOI of the Zenodo dataset record
    pub const DATASET_DOI: &str = "10.5281/zenodo.6894273";

    /// DOI of the accompanying Remote Sensing paper
    pub const PUBLICATION_DOI: &str = "10.3390/rs14153657";

    /// Citation of the accompanying paper
    pub const PUBLICATION_CITATION: &str = "Bunting, P.; Rosenqvist, A.; Hilarides, L.; Lucas, R.M.;
Thomas, T.; Tadono, T.; Worthington, T.A.; Spalding, M.; Murray, N.J.; Rebelo, L-M.
Global Mangrove Extent Change 1996 – 2020: Global Mangrove Watch Version 3.0. Remote
Sensing. 2022";

    /// Citation of the dataset itself
    pub const DATASET_CITATION: &str = "Bunting, P., Rosenqvist, A., Hilarides, L., Lucas, R.,
Thomas, N., Tadono, T., Worthington, T., Spalding, M., Murray, N., & Rebelo, L.-M.
(2022). Global Mangrove Watch (1996 - 2020) Version 3.0 Dataset (3.0) [Data set].
Zenodo. 10.5281/zenodo.6894273";
}

/// Hosting and producing organisations, and the license link
pub mod providers {
    /// Host of the dataset files
    pub const HOST_NAME: &str = "Zenodo";
    pub const HOST_URL: &str = "https://zenodo.org/records/6894273";

    /// Producer and licensor of the dataset
    pub const PRODUCER_NAME: &str = "Global Mangrove Watch";
    pub const PRODUCER_URL: &str = "https://www.globalmangrovewatch.org/";

    /// License document
    pub const LICENSE_URL: &str = "https://creativecommons.org/licenses/by/4.0/";
    pub const LICENSE_TITLE: &str = "CC-BY-4.0 license";
}

/// Asset keys used in Items and in the Collection's item_assets
pub mod assets {
    /// Key of the mangrove-cover COG
    pub const COG_ASSET_NAME: &str = "cog";

    /// Key of the mangrove-change COG
    pub const CHANGE_ASSET_NAME: &str = "change_cog";
}

/// Media types
pub mod media_types {
    /// Cloud-optimized GeoTIFF
    pub const COG: &str = "image/tiff; application=geotiff; profile=cloud-optimized";

    /// HTML page
    pub const HTML: &str = "text/html";

    /// JSON document
    pub const JSON: &str = "application/json";
}

/// Projection defaults for the tile grid
pub mod projection {
    /// Coordinate reference system of every tile
    pub const EPSG: u32 = 4326;

    /// Pixel grid of every tile as (rows, cols)
    pub const ITEM_SHAPE: [u32; 2] = [4500, 4500];
}

/// STAC core version and extension schema URIs
pub mod stac {
    /// STAC specification version written into every document
    pub const STAC_VERSION: &str = "1.1.0";

    pub const VERSION_EXTENSION: &str = "https://stac-extensions.github.io/version/v1.2.0/schema.json";
    pub const SCIENTIFIC_EXTENSION: &str =
        "https://stac-extensions.github.io/scientific/v1.0.0/schema.json";
    pub const CLASSIFICATION_EXTENSION: &str =
        "https://stac-extensions.github.io/classification/v2.0.0/schema.json";
    pub const RENDER_EXTENSION: &str = "https://stac-extensions.github.io/render/v2.0.0/schema.json";
    pub const PROJECTION_EXTENSION: &str =
        "https://stac-extensions.github.io/projection/v2.0.0/schema.json";
}

/// Collection temporal extent, as (year, month, day, hour, minute, second)
pub mod temporal {
    pub const START: (i32, u32, u32, u32, u32, u32) = (1996, 1, 1, 0, 0, 0);
    pub const END: (i32, u32, u32, u32, u32, u32) = (2020, 12, 31, 23, 59, 59);
}

/// Configuration file discovery
pub mod config {
    /// Project-local config file name
    pub const LOCAL_CONFIG_FILE: &str = "gmw-stac.toml";

    /// Directory under the user config dir
    pub const CONFIG_DIR_NAME: &str = "gmw-stac";

    /// Default log level
    pub const DEFAULT_LOG_LEVEL: &str = "warn";
}

// Re-export commonly used constants for convenience
pub use assets::{CHANGE_ASSET_NAME, COG_ASSET_NAME};
pub use dataset::{COLLECTION_ID, VERSION};
pub use projection::{EPSG, ITEM_SHAPE};
pub use stac::STAC_VERSION;
