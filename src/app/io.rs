//! Reading and writing STAC documents

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

use crate::errors::{StacError, StacResult};

/// How documents are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Indent the JSON output
    pub pretty: bool,
    /// Validate objects before writing them
    pub validate: bool,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            validate: true,
        }
    }
}

/// Resolve a destination href to a local path
///
/// Plain paths and `file://` URIs are accepted. Any other scheme is rejected.
pub fn resolve_destination(href: &str) -> StacResult<PathBuf> {
    let unsupported = || StacError::UnsupportedDestination {
        href: href.to_string(),
    };

    match Url::parse(href) {
        Ok(url) if url.scheme() == "file" => url.to_file_path().map_err(|_| unsupported()),
        // drive letters such as C:\ parse as one-letter schemes
        Ok(url) if url.scheme().len() > 1 => Err(unsupported()),
        _ => Ok(PathBuf::from(href)),
    }
}

/// Absolute form of a local path, for use in `self` links
pub fn absolute_href(path: &Path) -> StacResult<String> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|source| StacError::Io {
                path: path.to_path_buf(),
                source,
            })?
            .join(path)
    };
    Ok(absolute.to_string_lossy().into_owned())
}

/// Serialize `value` as JSON to `path`, creating parent directories
pub fn write_document<T: Serialize>(value: &T, path: &Path, pretty: bool) -> StacResult<()> {
    let mut json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    json.push('\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| StacError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| StacError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Wrote {}", path.display());
    Ok(())
}

/// Read a JSON document from `path`
pub fn read_document<T: DeserializeOwned>(path: &Path) -> StacResult<T> {
    debug!("Reading {}", path.display());
    let content = fs::read_to_string(path).map_err(|source| StacError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&content)?)
}
