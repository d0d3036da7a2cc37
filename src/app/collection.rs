//! Collection construction for the whole dataset

use chrono::{DateTime, TimeZone, Utc};

use crate::app::assets::AssetRole;
use crate::app::models::{
    Collection, Extent, Link, Provider, ProviderRole, Publication, Render, SpatialExtent,
    TemporalExtent,
};
use crate::app::text::format_multiline;
use crate::constants::{citation, dataset, media_types, providers, stac, temporal};

/// Build the Global Mangrove Watch Collection
///
/// Deterministic: every call returns an identical Collection.
pub fn create_collection() -> Collection {
    let description = format!("{}\n\n{}", dataset::DESCRIPTION, citation::PUBLICATION_CITATION);

    let mut collection = Collection::new(
        dataset::COLLECTION_ID,
        format_multiline(&description),
        dataset::LICENSE,
        extent(),
    );
    collection.title = Some(dataset::TITLE.to_string());
    collection.keywords = dataset::KEYWORDS.iter().map(|k| k.to_string()).collect();
    collection.providers = vec![
        Provider {
            name: providers::HOST_NAME.to_string(),
            roles: vec![ProviderRole::Host],
            url: Some(providers::HOST_URL.to_string()),
        },
        Provider {
            name: providers::PRODUCER_NAME.to_string(),
            roles: vec![ProviderRole::Producer, ProviderRole::Licensor],
            url: Some(providers::PRODUCER_URL.to_string()),
        },
    ];
    collection.links.push(
        Link::new("license", providers::LICENSE_URL)
            .with_media_type(media_types::HTML)
            .with_title(providers::LICENSE_TITLE),
    );

    for role in AssetRole::ALL {
        collection
            .item_assets
            .insert(role.key().to_string(), role.item_asset_definition());
        collection.renders.insert(
            role.template().render_name.to_string(),
            Render {
                assets: vec![role.key().to_string()],
                colormap: role.render_colormap(),
            },
        );
    }

    collection.version = Some(dataset::VERSION.to_string());
    collection.sci_doi = Some(citation::DATASET_DOI.to_string());
    collection.sci_citation = Some(format_multiline(citation::DATASET_CITATION));
    collection.sci_publications = vec![Publication {
        doi: Some(citation::PUBLICATION_DOI.to_string()),
        citation: Some(format_multiline(citation::PUBLICATION_CITATION)),
    }];

    for schema in [
        stac::VERSION_EXTENSION,
        stac::SCIENTIFIC_EXTENSION,
        stac::CLASSIFICATION_EXTENSION,
        stac::RENDER_EXTENSION,
    ] {
        collection.add_extension(schema);
    }

    collection
}

fn extent() -> Extent {
    Extent {
        spatial: SpatialExtent {
            bbox: vec![[-180.0, -90.0, 180.0, 90.0]],
        },
        temporal: TemporalExtent {
            interval: vec![[utc(temporal::START), utc(temporal::END)]],
        },
    }
}

fn utc(
    (year, month, day, hour, minute, second): (i32, u32, u32, u32, u32, u32),
) -> Option<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
        .single()
}
