//! Image resolution and the gallery carousel
//!
//! Decides which image set the detail view shows for the current
//! selection and tracks the display index.

use shared::models::Product;

use crate::selection::Selection;

/// Resolve the ordered image list for the current selection
///
/// Precedence:
/// 1. the selected option of the primary axis (its first active option
///    when none is selected), if that option has images
/// 2. the first selected option with images, scanning axes in order
/// 3. the product's own images, then its thumbnail, then nothing
pub fn resolve_images(product: &Product, selection: &Selection) -> Vec<String> {
    if let Some(primary) = product.primary_axis() {
        let option = selection
            .option_for(&primary.id)
            .and_then(|id| primary.option(id))
            .or_else(|| primary.first_active_option());
        if let Some(option) = option
            && !option.images.is_empty()
        {
            return option.images.clone();
        }
    }

    for axis in &product.variations {
        if let Some(option) = selection.option_for(&axis.id).and_then(|id| axis.option(id))
            && !option.images.is_empty()
        {
            return option.images.clone();
        }
    }

    if !product.images.is_empty() {
        return product.images.clone();
    }
    if let Some(thumbnail) = &product.thumbnail {
        return vec![thumbnail.clone()];
    }
    Vec::new()
}

/// Display index over the resolved image set
///
/// Rebuilt whenever the image set changes, so the view always opens on
/// the first image of the new set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether prev/next controls should render
    pub fn has_multiple(&self) -> bool {
        self.len > 1
    }

    /// Advance to the next image, wrapping past the end
    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    /// Step back to the previous image, wrapping before the start
    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }
}
