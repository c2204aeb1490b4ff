//! Error types for the card-data crate.
//!
//! Rust error handling concepts demonstrated:
//! - thiserror for defining custom error types
//! - `#[from]` conversions so `?` works on I/O and JSON errors
//! - Error messages with context

use thiserror::Error;

/// Errors that can occur while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error occurred while reading the catalog file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog document is not valid JSON for the card schema
    #[error("Invalid catalog JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    /// Two cards share the same id
    #[error("Duplicate card id: {id}")]
    DuplicateCard { id: String },

    /// A card field had an invalid value
    #[error("Invalid value for {field} on card {card}: {value}")]
    InvalidValue {
        card: String,
        field: String,
        value: String,
    },

    /// The catalog contained no cards
    #[error("Catalog contains no cards")]
    EmptyCatalog,
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
