//! Asset catalog: the closed set of rasters a tile can carry
//!
//! Each role owns a fixed template (title, description, media type, roles)
//! and a hand-curated classification legend. Colors come from the color
//! tables embedded in the published COGs.

use std::collections::BTreeMap;
use std::fmt;

use crate::app::models::{Classification, ItemAssetDefinition};
use crate::constants::{assets, media_types};

/// RGB display color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Lowercase six-digit hex form, e.g. `009600`
    pub fn to_hex(self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.0, self.1, self.2]
    }
}

/// One entry of a classification legend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegendClass {
    pub value: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub nodata: bool,
    pub color: Option<Rgb>,
}

impl LegendClass {
    pub fn to_classification(&self) -> Classification {
        Classification {
            value: self.value,
            name: self.name.to_string(),
            description: Some(self.description.to_string()),
            nodata: self.nodata,
            color_hint: self.color.map(Rgb::to_hex),
        }
    }
}

/// Fixed metadata shared by every asset of one role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub media_type: &'static str,
    pub roles: &'static [&'static str],
    pub legend: &'static [LegendClass],
    /// Key of this role's entry in the Collection's renders
    pub render_name: &'static str,
}

const NODATA: LegendClass = LegendClass {
    value: 0,
    name: "nodata",
    description: "nodata",
    nodata: true,
    color: None,
};

static COVER_TEMPLATE: AssetTemplate = AssetTemplate {
    title: "Mangrove cover",
    description: "Gridded estimate of mangrove cover",
    media_type: media_types::COG,
    roles: &["data"],
    legend: &[
        NODATA,
        LegendClass {
            value: 1,
            name: "mangrove",
            description: "mangrove",
            nodata: false,
            color: Some(Rgb(0, 150, 0)),
        },
    ],
    render_name: "mangroves",
};

static CHANGE_TEMPLATE: AssetTemplate = AssetTemplate {
    title: "Mangrove cover change since 1996",
    description: "Gridded estimate of mangrove cover change since 1996",
    media_type: media_types::COG,
    roles: &["data"],
    legend: &[
        NODATA,
        LegendClass {
            value: 1,
            name: "mangrove-gained",
            description: "mangrove gained",
            nodata: false,
            color: Some(Rgb(255, 0, 0)),
        },
        LegendClass {
            value: 2,
            name: "mangrove-lost",
            description: "mangrove lost",
            nodata: false,
            color: Some(Rgb(0, 0, 255)),
        },
    ],
    render_name: "change",
};

/// Raster carried by a tile Item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AssetRole {
    /// Mangrove cover for the tile's epoch; always present
    PrimaryCover,
    /// Mangrove gain/loss since 1996; optional
    ChangeCover,
}

impl AssetRole {
    /// Every role, in asset order
    pub const ALL: [AssetRole; 2] = [AssetRole::PrimaryCover, AssetRole::ChangeCover];

    /// Asset key used in Items and item_assets
    pub fn key(self) -> &'static str {
        match self {
            AssetRole::PrimaryCover => assets::COG_ASSET_NAME,
            AssetRole::ChangeCover => assets::CHANGE_ASSET_NAME,
        }
    }

    /// Fixed template for this role
    pub fn template(self) -> &'static AssetTemplate {
        match self {
            AssetRole::PrimaryCover => &COVER_TEMPLATE,
            AssetRole::ChangeCover => &CHANGE_TEMPLATE,
        }
    }

    /// Render colormap: pixel value (as a string) to RGB for every colored class
    pub fn render_colormap(self) -> BTreeMap<String, [u8; 3]> {
        self.template()
            .legend
            .iter()
            .filter_map(|class| class.color.map(|rgb| (class.value.to_string(), rgb.to_array())))
            .collect()
    }

    /// Collection item_assets entry, legend included
    pub fn item_asset_definition(self) -> ItemAssetDefinition {
        let template = self.template();
        ItemAssetDefinition {
            title: Some(template.title.to_string()),
            description: Some(template.description.to_string()),
            media_type: Some(template.media_type.to_string()),
            roles: template.roles.iter().map(|r| r.to_string()).collect(),
            classes: template
                .legend
                .iter()
                .map(LegendClass::to_classification)
                .collect(),
        }
    }
}

impl fmt::Display for AssetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}
