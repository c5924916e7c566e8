//! Product detail view state
//!
//! One instance per open detail view. Owns the product snapshot, the
//! variation selection, and the carousel; the price breakdown and the
//! image set are recomputed from scratch on each read.

use shared::models::Product;

use crate::gallery::{self, Carousel};
use crate::navigation::NavTarget;
use crate::pricing::{self, PriceBreakdown};
use crate::selection::Selection;

/// State behind one open product detail view
///
/// Created when the view opens, dropped when it closes. The snapshot
/// is read-only for the whole lifetime.
#[derive(Debug, Clone)]
pub struct ProductDetail {
    product: Product,
    selection: Selection,
    carousel: Carousel,
}

impl ProductDetail {
    /// Open a detail view over a catalog snapshot
    ///
    /// The selection defaults to the first active option per axis and
    /// the carousel starts on the first image of the resolved set.
    pub fn open(product: Product) -> Self {
        if product.variations.iter().filter(|a| a.is_primary).count() > 1 {
            tracing::warn!(
                product_id = %product.id,
                "more than one primary variation axis, first wins"
            );
        }

        let selection = Selection::defaults_for(&product);
        let carousel = Carousel::new(gallery::resolve_images(&product, &selection).len());
        Self {
            product,
            selection,
            carousel,
        }
    }

    pub fn product(&self) -> &Product {
        &self.product
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    pub fn carousel_mut(&mut self) -> &mut Carousel {
        &mut self.carousel
    }

    /// Choose an option for an axis
    ///
    /// Returns false and changes nothing when the pair does not belong
    /// to this product. A successful choice re-resolves the image set
    /// and resets the carousel to its first image.
    pub fn choose(&mut self, axis_id: &str, option_id: &str) -> bool {
        if !self.selection.choose(&self.product, axis_id, option_id) {
            return false;
        }
        self.carousel = Carousel::new(self.images().len());
        true
    }

    /// Current price breakdown
    pub fn price(&self) -> PriceBreakdown {
        pricing::resolve_price(&self.product, &self.selection)
    }

    /// Current image set
    pub fn images(&self) -> Vec<String> {
        gallery::resolve_images(&self.product, &self.selection)
    }

    /// Edit flow to request for this product
    pub fn edit_destination(&self) -> NavTarget {
        NavTarget::edit_for(&self.product)
    }
}
