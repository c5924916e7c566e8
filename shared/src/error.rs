//! Error types for the catalog boundary
//!
//! The detail-view resolvers never fail: missing or malformed data
//! degrades to zeroed prices and an empty gallery. Errors exist only
//! for the catalog fetch seam.

use thiserror::Error;

/// Catalog fetch error
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Product does not exist or is not visible to the caller
    #[error("product not found: {product_id}")]
    NotFound { product_id: String },

    /// Catalog service unreachable or returned a server failure
    #[error("catalog unavailable: {message}")]
    Unavailable { message: String },

    /// Response payload did not match the product schema
    #[error("malformed catalog response: {message}")]
    Decode { message: String },
}

impl CatalogError {
    /// Create a NotFound error
    pub fn not_found(product_id: impl Into<String>) -> Self {
        Self::NotFound {
            product_id: product_id.into(),
        }
    }

    /// Create an Unavailable error
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    /// Create a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::decode(err.to_string())
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
