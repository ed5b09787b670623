//! Error types for the catalog crate.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors reported by store definition validation.
#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    /// A store definition has an empty brand
    #[error("store \"{name}\" has an empty brand")]
    EmptyBrand {
        /// Name of the offending store
        name: String,
    },

    /// A store definition has an empty name
    #[error("store definition at index {index} has an empty name")]
    EmptyName {
        /// Position in the definition list
        index: usize,
    },

    /// Two store definitions share a name
    #[error("duplicate store name: \"{0}\"")]
    DuplicateName(String),

    /// A store coordinate is outside the valid degree ranges
    #[error("coordinate out of range for \"{name}\": ({latitude}, {longitude})")]
    CoordinateOutOfRange {
        /// Name of the offending store
        name: String,
        /// Offending latitude
        latitude: f64,
        /// Offending longitude
        longitude: f64,
    },
}
