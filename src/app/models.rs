//! STAC document model
//!
//! Serde representations of the STAC objects written by this crate: Items,
//! Collections and the pieces they are built from. Extension fields are typed
//! members serialised under their prefixed STAC keys. Every map is a
//! `BTreeMap` so repeated runs produce identical documents.

use std::collections::{BTreeMap, HashSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::STAC_VERSION;
use crate::errors::{StacError, StacResult};

/// Bounding box as `[west, south, east, north]`
pub type Bbox = [f64; 4];

/// GeoJSON geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// Polygon given as linear rings of `[x, y]` positions
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

impl Geometry {
    /// Rectangle covering `bbox`
    ///
    /// The exterior ring is counter-clockwise, starting and ending at the
    /// south-east corner.
    pub fn from_bbox(bbox: Bbox) -> Self {
        let [west, south, east, north] = bbox;
        Geometry::Polygon {
            coordinates: vec![vec![
                [east, south],
                [east, north],
                [west, north],
                [west, south],
                [east, south],
            ]],
        }
    }

    fn validate(&self, id: &str) -> StacResult<()> {
        let Geometry::Polygon { coordinates } = self;
        let exterior = coordinates
            .first()
            .ok_or_else(|| invalid(id, "polygon has no exterior ring"))?;

        if exterior.len() < 4 {
            return Err(invalid(id, "polygon ring needs at least four positions"));
        }
        if exterior.first() != exterior.last() {
            return Err(invalid(id, "polygon ring is not closed"));
        }
        Ok(())
    }
}

/// Link to a related resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub rel: String,
    pub href: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Link {
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            media_type: None,
            title: None,
        }
    }

    pub fn with_media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// Role an organisation played for the data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderRole {
    Host,
    Licensor,
    Producer,
}

/// Organisation that captured, processed, hosted or licensed the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<ProviderRole>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One class of a classified raster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub value: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub nodata: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_hint: Option<String>,
}

/// Asset attached to an Item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
}

/// Template describing the assets every Item of a Collection carries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemAssetDefinition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    #[serde(
        rename = "classification:classes",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub classes: Vec<Classification>,
}

impl ItemAssetDefinition {
    /// Instantiate an Item asset from this template
    pub fn create_asset(&self, href: impl Into<String>) -> Asset {
        Asset {
            href: href.into(),
            title: self.title.clone(),
            description: self.description.clone(),
            media_type: self.media_type.clone(),
            roles: self.roles.clone(),
        }
    }
}

/// Rendering hint for a visualisation client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Render {
    pub assets: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub colormap: BTreeMap<String, [u8; 3]>,
}

/// Publication related to the data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpatialExtent {
    pub bbox: Vec<Bbox>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemporalExtent {
    pub interval: Vec<[Option<DateTime<Utc>>; 2]>,
}

/// Spatial and temporal envelope of a Collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub spatial: SpatialExtent,
    pub temporal: TemporalExtent,
}

/// Projection extension fields of an Item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionProperties {
    #[serde(rename = "proj:code", default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(rename = "proj:bbox", default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Bbox>,
    #[serde(rename = "proj:geometry", default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
    #[serde(rename = "proj:shape", default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<[u32; 2]>,
    #[serde(rename = "proj:transform", default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<Vec<f64>>,
}

/// Item properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemProperties {
    pub datetime: DateTime<Utc>,
    #[serde(flatten)]
    pub projection: ProjectionProperties,
}

/// STAC Item: one tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "type")]
    pub object_type: String,
    pub stac_version: String,
    #[serde(default)]
    pub stac_extensions: Vec<String>,
    pub id: String,
    pub geometry: Geometry,
    pub bbox: Bbox,
    pub properties: ItemProperties,
    #[serde(default)]
    pub links: Vec<Link>,
    pub assets: BTreeMap<String, Asset>,
}

impl Item {
    /// Create an Item with no assets and no extensions
    pub fn new(
        id: impl Into<String>,
        geometry: Geometry,
        bbox: Bbox,
        datetime: DateTime<Utc>,
    ) -> Self {
        Self {
            object_type: "Feature".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.into(),
            geometry,
            bbox,
            properties: ItemProperties {
                datetime,
                projection: ProjectionProperties::default(),
            },
            links: Vec::new(),
            assets: BTreeMap::new(),
        }
    }

    /// Check the Item against the constraints of the STAC Item schema
    pub fn validate(&self) -> StacResult<()> {
        if self.object_type != "Feature" {
            return Err(invalid(&self.id, "Item type must be 'Feature'"));
        }
        validate_id(&self.id)?;
        validate_extensions(&self.id, &self.stac_extensions)?;
        validate_bbox(&self.id, &self.bbox)?;
        self.geometry.validate(&self.id)?;

        if self.assets.is_empty() {
            return Err(invalid(&self.id, "Item has no assets"));
        }
        if let Some((key, _)) = self.assets.iter().find(|(_, asset)| asset.href.is_empty()) {
            return Err(invalid(&self.id, &format!("asset '{}' has an empty href", key)));
        }
        if let Some(geometry) = &self.properties.projection.geometry {
            geometry.validate(&self.id)?;
        }
        if let Some(bbox) = &self.properties.projection.bbox {
            validate_bbox(&self.id, bbox)?;
        }
        Ok(())
    }
}

/// STAC Collection: the whole dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "type")]
    pub object_type: String,
    pub stac_version: String,
    #[serde(default)]
    pub stac_extensions: Vec<String>,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keywords: Vec<String>,
    pub license: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub providers: Vec<Provider>,
    pub extent: Extent,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub item_assets: BTreeMap<String, ItemAssetDefinition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "sci:doi", default, skip_serializing_if = "Option::is_none")]
    pub sci_doi: Option<String>,
    #[serde(rename = "sci:citation", default, skip_serializing_if = "Option::is_none")]
    pub sci_citation: Option<String>,
    #[serde(rename = "sci:publications", default, skip_serializing_if = "Vec::is_empty")]
    pub sci_publications: Vec<Publication>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub renders: BTreeMap<String, Render>,
}

impl Collection {
    /// Create a Collection with the required fields only
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        license: impl Into<String>,
        extent: Extent,
    ) -> Self {
        Self {
            object_type: "Collection".to_string(),
            stac_version: STAC_VERSION.to_string(),
            stac_extensions: Vec::new(),
            id: id.into(),
            title: None,
            description: description.into(),
            keywords: Vec::new(),
            license: license.into(),
            providers: Vec::new(),
            extent,
            links: Vec::new(),
            item_assets: BTreeMap::new(),
            version: None,
            sci_doi: None,
            sci_citation: None,
            sci_publications: Vec::new(),
            renders: BTreeMap::new(),
        }
    }

    /// Declare an extension schema, once
    pub fn add_extension(&mut self, schema_uri: &str) {
        if !self.stac_extensions.iter().any(|uri| uri == schema_uri) {
            self.stac_extensions.push(schema_uri.to_string());
        }
    }

    /// Point the `self` and `root` links at `href`, replacing earlier ones
    pub fn set_self_href(&mut self, href: &str) {
        self.links.retain(|link| link.rel != "self" && link.rel != "root");
        self.links
            .push(Link::new("root", href).with_media_type(crate::constants::media_types::JSON));
        self.links
            .push(Link::new("self", href).with_media_type(crate::constants::media_types::JSON));
    }

    /// Check the Collection against the constraints of the STAC Collection schema
    pub fn validate(&self) -> StacResult<()> {
        if self.object_type != "Collection" {
            return Err(invalid(&self.id, "Collection type must be 'Collection'"));
        }
        validate_id(&self.id)?;
        validate_extensions(&self.id, &self.stac_extensions)?;

        if self.description.trim().is_empty() {
            return Err(invalid(&self.id, "description is empty"));
        }
        if self.license.trim().is_empty() {
            return Err(invalid(&self.id, "license is empty"));
        }

        if self.extent.spatial.bbox.is_empty() {
            return Err(invalid(&self.id, "spatial extent has no bbox"));
        }
        for bbox in &self.extent.spatial.bbox {
            validate_bbox(&self.id, bbox)?;
        }

        if self.extent.temporal.interval.is_empty() {
            return Err(invalid(&self.id, "temporal extent has no interval"));
        }
        for interval in &self.extent.temporal.interval {
            match interval {
                [None, None] => {
                    return Err(invalid(&self.id, "temporal interval is open at both ends"))
                }
                [Some(start), Some(end)] if start > end => {
                    return Err(invalid(&self.id, "temporal interval starts after it ends"))
                }
                _ => {}
            }
        }

        for (key, definition) in &self.item_assets {
            let mut seen = HashSet::new();
            if let Some(duplicate) = definition.classes.iter().find(|c| !seen.insert(c.value)) {
                return Err(invalid(
                    &self.id,
                    &format!(
                        "item asset '{}' has duplicate classification value {}",
                        key, duplicate.value
                    ),
                ));
            }
        }
        Ok(())
    }
}

fn invalid(id: &str, reason: &str) -> StacError {
    StacError::Validation {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}

fn validate_id(id: &str) -> StacResult<()> {
    if id.trim().is_empty() {
        return Err(invalid(id, "id is empty"));
    }
    Ok(())
}

fn validate_extensions(id: &str, extensions: &[String]) -> StacResult<()> {
    for uri in extensions {
        if Url::parse(uri).is_err() {
            return Err(invalid(id, &format!("extension '{}' is not an absolute URI", uri)));
        }
    }
    Ok(())
}

fn validate_bbox(id: &str, bbox: &Bbox) -> StacResult<()> {
    let [west, south, east, north] = *bbox;
    if bbox.iter().any(|v| !v.is_finite()) {
        return Err(invalid(id, "bbox contains a non-finite value"));
    }
    if west > east || south > north {
        return Err(invalid(id, &format!("bbox {:?} has min greater than max", bbox)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_item() -> Item {
        let bbox = [-82.0, 25.0, -81.0, 26.0];
        let datetime = Utc.with_ymd_and_hms(2020, 12, 31, 0, 0, 0).unwrap();
        let mut item = Item::new("tile", Geometry::from_bbox(bbox), bbox, datetime);
        item.assets.insert(
            "cog".to_string(),
            Asset {
                href: "tile.tif".to_string(),
                title: None,
                description: None,
                media_type: None,
                roles: Vec::new(),
            },
        );
        item
    }

    #[test]
    fn test_polygon_from_bbox() {
        let Geometry::Polygon { coordinates } = Geometry::from_bbox([-82.0, 25.0, -81.0, 26.0]);
        assert_eq!(
            coordinates[0],
            vec![
                [-81.0, 25.0],
                [-81.0, 26.0],
                [-82.0, 26.0],
                [-82.0, 25.0],
                [-81.0, 25.0]
            ]
        );
    }

    #[test]
    fn test_item_serialization_keys() {
        let mut item = test_item();
        item.properties.projection.code = Some("EPSG:4326".to_string());
        let value = serde_json::to_value(&item).unwrap();

        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "Polygon");
        assert_eq!(value["properties"]["datetime"], "2020-12-31T00:00:00Z");
        assert_eq!(value["properties"]["proj:code"], "EPSG:4326");
        assert!(value["properties"].get("proj:shape").is_none());
        assert!(value.get("collection").is_none());
    }

    #[test]
    fn test_item_validation() {
        assert!(test_item().validate().is_ok());

        let mut no_assets = test_item();
        no_assets.assets.clear();
        assert!(matches!(
            no_assets.validate(),
            Err(StacError::Validation { .. })
        ));

        let mut inverted = test_item();
        inverted.bbox = [-81.0, 25.0, -82.0, 26.0];
        assert!(inverted.validate().is_err());

        let mut bad_extension = test_item();
        bad_extension.stac_extensions.push("projection".to_string());
        assert!(bad_extension.validate().is_err());
    }

    #[test]
    fn test_classification_nodata_flag_omitted_when_false() {
        let class = Classification {
            value: 1,
            name: "mangrove".to_string(),
            description: Some("mangrove".to_string()),
            nodata: false,
            color_hint: Some("009600".to_string()),
        };
        let value = serde_json::to_value(&class).unwrap();
        assert!(value.get("nodata").is_none());
        assert_eq!(value["color_hint"], "009600");
    }

    #[test]
    fn test_set_self_href_replaces_links() {
        let extent = Extent {
            spatial: SpatialExtent {
                bbox: vec![[-180.0, -90.0, 180.0, 90.0]],
            },
            temporal: TemporalExtent {
                interval: vec![[Some(Utc.with_ymd_and_hms(1996, 1, 1, 0, 0, 0).unwrap()), None]],
            },
        };
        let mut collection = Collection::new("c", "d", "CC-BY-4.0", extent);
        collection.set_self_href("/tmp/a/collection.json");
        collection.set_self_href("/tmp/b/collection.json");

        assert_eq!(collection.links.len(), 2);
        assert!(collection
            .links
            .iter()
            .all(|link| link.href == "/tmp/b/collection.json"));
        assert!(collection.validate().is_ok());
    }
}
