//! Command handlers for the GMW STAC generator CLI
//!
//! Each handler builds one STAC object, validates it when configured to, and
//! writes it to the requested destination.

use tracing::{debug, info};

use crate::app::io::absolute_href;
use crate::app::{create_collection, resolve_destination, write_document, ItemBuilder};
use crate::cli::{CreateCollectionArgs, CreateItemArgs};
use crate::config::AppConfig;
use crate::errors::Result;

/// Handle the create-collection command
pub fn handle_create_collection(args: CreateCollectionArgs, config: &AppConfig) -> Result<()> {
    let mut options = config.output.to_runtime_config();
    options.pretty &= !args.compact;

    let path = resolve_destination(&args.destination)?;
    let mut collection = create_collection();
    collection.set_self_href(&absolute_href(&path)?);

    if options.validate {
        debug!("Validating collection {}", collection.id);
        collection.validate()?;
    }

    write_document(&collection, &path, options.pretty)?;
    info!("Created collection {} at {}", collection.id, path.display());
    Ok(())
}

/// Handle the create-item command
pub fn handle_create_item(args: CreateItemArgs, config: &AppConfig) -> Result<()> {
    let mut options = config.output.to_runtime_config();
    options.pretty &= !args.compact;

    let path = resolve_destination(&args.destination)?;
    let builder = ItemBuilder::new(config.item.to_runtime_config());
    let item = builder.build(
        &args.primary_asset_href,
        args.change_asset_href.as_deref(),
    )?;

    if options.validate {
        debug!("Validating item {}", item.id);
        item.validate()?;
    }

    write_document(&item, &path, options.pretty)?;
    info!(
        "Created item {} with {} asset(s) at {}",
        item.id,
        item.assets.len(),
        path.display()
    );
    Ok(())
}
