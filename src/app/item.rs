//! Item construction for a single mangrove tile

use tracing::debug;

use crate::app::assets::AssetRole;
use crate::app::filename::{href_basename, parse_tile_filename};
use crate::app::models::{Item, ProjectionProperties};
use crate::app::projection::{affine_from_bounds, epsg_code};
use crate::constants::{projection, stac};
use crate::errors::{ItemError, ItemResult};

/// Projection settings applied to every Item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemConfig {
    /// EPSG code of the tile grid
    pub epsg: u32,
    /// Pixel grid as (rows, cols)
    pub shape: [u32; 2],
}

impl Default for ItemConfig {
    fn default() -> Self {
        Self {
            epsg: projection::EPSG,
            shape: projection::ITEM_SHAPE,
        }
    }
}

/// Builds tile Items from asset hrefs
///
/// Only the primary asset's filename is inspected; no file is opened.
#[derive(Debug, Clone, Default)]
pub struct ItemBuilder {
    config: ItemConfig,
}

impl ItemBuilder {
    pub fn new(config: ItemConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ItemConfig {
        &self.config
    }

    /// Build the Item for the tile named by `primary_href`
    ///
    /// `change_href` adds the change asset; when `None` the change role is
    /// absent from the asset map altogether.
    ///
    /// # Errors
    ///
    /// `ItemError::UnparseableHref` (naming the href) when the filename does
    /// not follow the tile convention.
    pub fn build(&self, primary_href: &str, change_href: Option<&str>) -> ItemResult<Item> {
        let filename = href_basename(primary_href)?;
        let attributes =
            parse_tile_filename(&filename).map_err(|source| ItemError::UnparseableHref {
                href: primary_href.to_string(),
                source,
            })?;

        let id = filename.strip_suffix(".tif").unwrap_or(&filename);
        let bbox = attributes.bounding_box.to_array();
        let geometry = attributes.geometry();

        let mut item = Item::new(id, geometry.clone(), bbox, attributes.timestamp);

        let supplied = [
            (AssetRole::PrimaryCover, Some(primary_href)),
            (AssetRole::ChangeCover, change_href),
        ];
        for (role, href) in supplied
            .into_iter()
            .filter_map(|(role, href)| href.map(|href| (role, href)))
        {
            let asset = role.item_asset_definition().create_asset(href);
            item.assets.insert(role.key().to_string(), asset);
        }

        let transform = affine_from_bounds(bbox, self.config.shape)?;
        item.properties.projection = ProjectionProperties {
            code: Some(epsg_code(self.config.epsg)),
            bbox: Some(bbox),
            geometry: Some(geometry),
            shape: Some(self.config.shape),
            transform: Some(transform.to_vec()),
        };
        item.stac_extensions.push(stac::PROJECTION_EXTENSION.to_string());

        debug!(
            "Built item {} with assets {:?}",
            item.id,
            item.assets.keys().collect::<Vec<_>>()
        );
        Ok(item)
    }
}

/// Build an Item with the default projection settings
pub fn create_item(primary_href: &str, change_href: Option<&str>) -> ItemResult<Item> {
    ItemBuilder::default().build(primary_href, change_href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{CHANGE_ASSET_NAME, COG_ASSET_NAME};
    use crate::errors::ParseError;

    const PRIMARY: &str = "data/GMW_N26W082_2020_v3.tif";
    const CHANGE: &str = "data/GMW_N26W082_chng_f1996_t2020_v3.tif";

    #[test]
    fn test_item_from_primary_only() {
        let item = create_item(PRIMARY, None).unwrap();

        assert_eq!(item.id, "GMW_N26W082_2020_v3");
        assert_eq!(item.bbox, [-82.0, 25.0, -81.0, 26.0]);
        assert_eq!(
            item.assets.keys().collect::<Vec<_>>(),
            vec![COG_ASSET_NAME]
        );
        assert_eq!(item.assets[COG_ASSET_NAME].href, PRIMARY);
        assert!(item.validate().is_ok());
    }

    #[test]
    fn test_change_asset_added_when_supplied() {
        let without = create_item(PRIMARY, None).unwrap();
        let with = create_item(PRIMARY, Some(CHANGE)).unwrap();

        assert_eq!(with.assets.len(), 2);
        assert_eq!(with.assets[CHANGE_ASSET_NAME].href, CHANGE);
        assert_eq!(
            with.assets[CHANGE_ASSET_NAME].title.as_deref(),
            Some("Mangrove cover change since 1996")
        );

        let mut stripped = with.clone();
        stripped.assets.remove(CHANGE_ASSET_NAME);
        assert_eq!(stripped, without);
    }

    #[test]
    fn test_missing_change_asset_is_absent_from_json() {
        let item = create_item(PRIMARY, None).unwrap();
        let value = serde_json::to_value(&item).unwrap();
        assert!(value["assets"].get(CHANGE_ASSET_NAME).is_none());
    }

    #[test]
    fn test_projection_properties() {
        let item = create_item(PRIMARY, None).unwrap();
        let proj = &item.properties.projection;

        assert_eq!(proj.code.as_deref(), Some("EPSG:4326"));
        assert_eq!(proj.shape, Some([4500, 4500]));
        assert_eq!(proj.bbox, Some(item.bbox));
        assert_eq!(proj.geometry.as_ref(), Some(&item.geometry));
        assert_eq!(
            proj.transform.as_deref(),
            Some(&[1.0 / 4500.0, 0.0, -82.0, 0.0, -1.0 / 4500.0, 26.0, 0.0, 0.0, 1.0][..])
        );
        assert_eq!(item.stac_extensions, vec![stac::PROJECTION_EXTENSION]);
    }

    #[test]
    fn test_configured_projection() {
        let builder = ItemBuilder::new(ItemConfig {
            epsg: 32617,
            shape: [100, 200],
        });
        let item = builder.build(PRIMARY, None).unwrap();
        let proj = &item.properties.projection;

        assert_eq!(proj.code.as_deref(), Some("EPSG:32617"));
        assert_eq!(proj.shape, Some([100, 200]));
        assert_eq!(proj.transform.as_ref().unwrap()[0], 1.0 / 200.0);
        assert_eq!(proj.transform.as_ref().unwrap()[4], -1.0 / 100.0);
    }

    #[test]
    fn test_unparseable_href_fails_with_href() {
        let error = create_item(CHANGE, None).unwrap_err();

        match &error {
            ItemError::UnparseableHref { href, source } => {
                assert_eq!(href, CHANGE);
                assert!(matches!(source, ParseError::UnrecognizedFilename { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(error.to_string().contains(CHANGE));
    }

    #[test]
    fn test_remote_href() {
        let href = "https://example.blob.core.windows.net/gmw/GMW_S05E120_1996_v3.tif";
        let item = create_item(href, None).unwrap();

        assert_eq!(item.id, "GMW_S05E120_1996_v3");
        assert_eq!(item.bbox, [120.0, -6.0, 121.0, -5.0]);
        assert_eq!(item.assets[COG_ASSET_NAME].href, href);
    }

    #[test]
    fn test_zero_shape_rejected() {
        let builder = ItemBuilder::new(ItemConfig {
            epsg: 4326,
            shape: [0, 0],
        });
        assert!(matches!(
            builder.build(PRIMARY, None),
            Err(ItemError::Projection { .. })
        ));
    }

    #[test]
    fn test_build_is_deterministic() {
        let first = serde_json::to_string(&create_item(PRIMARY, Some(CHANGE)).unwrap()).unwrap();
        let second = serde_json::to_string(&create_item(PRIMARY, Some(CHANGE)).unwrap()).unwrap();
        assert_eq!(first, second);
    }
}
