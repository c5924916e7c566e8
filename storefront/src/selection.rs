//! Variation selection state
//!
//! One chosen option per variation axis, created when the detail view
//! opens and dropped when it closes. Never persisted.

use std::collections::HashMap;

use shared::models::Product;

/// Chosen option id per variation axis
///
/// Axes without an entry are unselected and contribute nothing to the
/// price or the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: HashMap<String, String>,
}

impl Selection {
    /// Default selection for a product: the first active option of each
    /// axis; axes with no active option stay unselected.
    pub fn defaults_for(product: &Product) -> Self {
        let mut chosen = HashMap::new();
        for axis in &product.variations {
            if let Some(option) = axis.first_active_option() {
                chosen.insert(axis.id.clone(), option.id.clone());
            }
        }
        Self { chosen }
    }

    /// Currently chosen option for an axis
    pub fn option_for(&self, axis_id: &str) -> Option<&str> {
        self.chosen.get(axis_id).map(String::as_str)
    }

    /// Choose an option for an axis.
    ///
    /// The pair must belong to `product`: the axis must exist and the
    /// option must be in that axis's list. Invalid pairs leave the
    /// selection unchanged and return false. Inactive options may be
    /// chosen explicitly; `is_active` gates only the default pick.
    pub fn choose(&mut self, product: &Product, axis_id: &str, option_id: &str) -> bool {
        let Some(axis) = product.axis(axis_id) else {
            tracing::warn!(axis_id, option_id, "choose rejected: unknown variation axis");
            return false;
        };
        if axis.option(option_id).is_none() {
            tracing::warn!(axis_id, option_id, "choose rejected: option not in axis");
            return false;
        }
        self.chosen
            .insert(axis_id.to_string(), option_id.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.chosen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chosen.is_empty()
    }
}
