//! Shared types for the Tirtha marketplace
//!
//! Data models, money helpers, and error types used by the customer
//! pages, the seller console, and the admin dashboard.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{CatalogError, CatalogResult};
pub use serde::{Deserialize, Serialize};
