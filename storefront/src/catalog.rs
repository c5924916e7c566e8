//! Catalog source seam
//!
//! The host application owns the transport that fetches product
//! records; this crate defines the boundary and an in-memory source
//! for tests and demo mode.

use std::collections::HashMap;

use async_trait::async_trait;

use shared::error::{CatalogError, CatalogResult};
use shared::models::Product;

use crate::config::StorefrontConfig;

/// Per-call fetch options, built from configuration
///
/// Demo mode is passed explicitly per call; sources must not read it
/// from ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchOptions {
    /// Serve demo catalog data instead of the live catalog
    pub demo_mode: bool,
}

impl FetchOptions {
    pub fn from_config(config: &StorefrontConfig) -> Self {
        Self {
            demo_mode: config.demo_mode,
        }
    }
}

/// Source of product records for the detail view
///
/// One fetch per detail-view open; the returned snapshot is owned by
/// the view for its whole lifetime.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn product_detail(
        &self,
        product_id: &str,
        opts: &FetchOptions,
    ) -> CatalogResult<Product>;
}

/// In-memory catalog for tests and demo mode
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    products: HashMap<String, Product>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: products
                .into_iter()
                .map(|p| (p.id.clone(), p))
                .collect(),
        }
    }

    pub fn insert(&mut self, product: Product) {
        self.products.insert(product.id.clone(), product);
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[async_trait]
impl CatalogSource for MemoryCatalog {
    async fn product_detail(
        &self,
        product_id: &str,
        opts: &FetchOptions,
    ) -> CatalogResult<Product> {
        tracing::debug!(product_id, demo_mode = opts.demo_mode, "memory catalog lookup");
        self.products
            .get(product_id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(product_id))
    }
}
