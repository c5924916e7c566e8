//! Product detail core for the Tirtha marketplace
//!
//! State and derived-value resolvers behind the product detail view:
//! the per-axis variation selection, the price breakdown, the image
//! gallery, and outward navigation targets. Fetching, routing, and
//! rendering belong to the host application.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod gallery;
pub mod logger;
pub mod navigation;
pub mod pricing;
pub mod selection;

// Re-exports
pub use catalog::{CatalogSource, FetchOptions, MemoryCatalog};
pub use config::StorefrontConfig;
pub use detail::ProductDetail;
pub use gallery::Carousel;
pub use navigation::NavTarget;
pub use pricing::PriceBreakdown;
pub use selection::Selection;
