//! Product Model

use serde::{Deserialize, Serialize};

use super::category::ServiceCategory;

/// Product entity as delivered by the catalog service
///
/// A read-only snapshot for the detail view. Money fields keep the
/// wire's decimal-string form; parsing happens at the pricing boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Listing code shown to sellers (e.g. "PUJ-0042")
    pub code: String,
    pub category: ServiceCategory,
    /// Base billing unit (e.g. "per ceremony", "per night")
    pub unit: String,
    #[serde(default)]
    pub description: String,
    /// Base selling price as a decimal string (e.g. "1500.00")
    pub selling_price: String,
    pub is_discounted: bool,
    /// Discount percentage (0-100), applied only while `is_discounted`
    #[serde(default)]
    pub discount: f64,
    /// Cover image, shown when the gallery would otherwise be empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    /// Ordered display images
    #[serde(default)]
    pub images: Vec<String>,
    /// Ordered variation axes
    #[serde(default)]
    pub variations: Vec<VariationAxis>,
}

impl Product {
    /// First axis marked primary, if any
    ///
    /// At most one axis per product should carry the mark; snapshots
    /// with more are accepted and the first in declaration order wins.
    pub fn primary_axis(&self) -> Option<&VariationAxis> {
        self.variations.iter().find(|a| a.is_primary)
    }

    /// Axis lookup by id
    pub fn axis(&self, axis_id: &str) -> Option<&VariationAxis> {
        self.variations.iter().find(|a| a.id == axis_id)
    }

    pub fn has_variations(&self) -> bool {
        !self.variations.is_empty()
    }
}

/// Variation axis (embedded in Product)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationAxis {
    pub id: String,
    /// Display name (e.g. "Hall size", "Prasad option")
    pub name: String,
    /// Drives the default gallery; at most one axis per product
    #[serde(default)]
    pub is_primary: bool,
    /// Ordered options
    #[serde(default)]
    pub options: Vec<VariationOption>,
}

impl VariationAxis {
    /// Option lookup by id
    pub fn option(&self, option_id: &str) -> Option<&VariationOption> {
        self.options.iter().find(|o| o.id == option_id)
    }

    /// First active option, the default pick for this axis
    pub fn first_active_option(&self) -> Option<&VariationOption> {
        self.options.iter().find(|o| o.is_active)
    }
}

/// Variation option (embedded in VariationAxis)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VariationOption {
    pub id: String,
    /// Option value label (e.g. "500 seats")
    pub value: String,
    /// Surcharge as a decimal string, added to the base price while selected
    pub additional_price: String,
    pub is_active: bool,
    /// Images specific to this option
    #[serde(default)]
    pub images: Vec<String>,
}
