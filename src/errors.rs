//! Error types for the Global Mangrove Watch STAC generator
//!
//! Each concern (filename parsing, item construction, document handling,
//! configuration) has its own error enum. `AppError` wraps them for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Tile filename parsing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Filename does not follow the `GMW_<lat><lon>_<year>_v<rev>.tif` convention
    #[error("Filename does not match the GMW tile naming pattern: {filename}")]
    UnrecognizedFilename { filename: String },

    /// A matched component could not be converted to a number or date
    #[error("Invalid {component} in {filename}: {reason}")]
    InvalidComponent {
        filename: String,
        component: &'static str,
        reason: String,
    },
}

/// Item construction errors
#[derive(Error, Debug)]
pub enum ItemError {
    /// The primary asset href does not name a parseable tile
    #[error("could not parse item properties from {href}")]
    UnparseableHref {
        href: String,
        #[source]
        source: ParseError,
    },

    /// The href has no final path segment to take a filename from
    #[error("Asset href has no filename component: {href}")]
    MissingFilename { href: String },

    /// Projection metadata could not be derived
    #[error("Invalid projection settings: {reason}")]
    Projection { reason: String },
}

/// STAC document serialization, validation and I/O errors
#[derive(Error, Debug)]
pub enum StacError {
    /// JSON encoding or decoding failed
    #[error("STAC serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Document failed structural validation
    #[error("Invalid STAC object '{id}': {reason}")]
    Validation { id: String, reason: String },

    /// Reading or writing a document failed
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Destination uses a scheme other than a local path or file:// URI
    #[error("Unsupported destination href: {href}. Only local paths and file:// URIs can be written")]
    UnsupportedDestination { href: String },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Invalid configuration format: {0}")]
    InvalidFormat(#[from] toml::de::Error),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error that can represent any error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Item construction error
    #[error(transparent)]
    Item(#[from] ItemError),

    /// STAC document error
    #[error(transparent)]
    Stac(#[from] StacError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Item(_) => "item",
            AppError::Stac(StacError::Validation { .. }) => "validation",
            AppError::Stac(StacError::Serialization(_)) => "serialization",
            AppError::Stac(_) => "io",
            AppError::Config(_) => "config",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Filename parse result type alias
pub type ParseResult<T> = std::result::Result<T, ParseError>;

/// Item construction result type alias
pub type ItemResult<T> = std::result::Result<T, ItemError>;

/// STAC document result type alias
pub type StacResult<T> = std::result::Result<T, StacError>;

/// Configuration result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
