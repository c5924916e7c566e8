//! Outward navigation requests
//!
//! The detail view only decides which seller-console flow to request;
//! the host router performs the navigation.

use serde::{Deserialize, Serialize};

use shared::models::Product;

/// Navigation target dispatched to the host router
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum NavTarget {
    /// Plain product edit form
    EditProduct { code: String },
    /// Edit form for products carrying variation axes
    EditVariationProduct { code: String },
    /// Variation management screen
    ManageVariations { product_id: String },
}

impl NavTarget {
    /// Edit flow for a product: the variation-aware form when any
    /// variation axis exists, the plain form otherwise.
    pub fn edit_for(product: &Product) -> Self {
        if product.has_variations() {
            Self::EditVariationProduct {
                code: product.code.clone(),
            }
        } else {
            Self::EditProduct {
                code: product.code.clone(),
            }
        }
    }

    /// Variation management screen for a product
    pub fn manage_variations(product: &Product) -> Self {
        Self::ManageVariations {
            product_id: product.id.clone(),
        }
    }
}
