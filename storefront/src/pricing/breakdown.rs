//! Price breakdown calculator
//!
//! Derives the final price from the base selling price, the selected
//! options' surcharges, and the product's discount percentage.
//!
//! Uses rust_decimal internally; fields leave as f64 rounded to two
//! decimal places.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use shared::models::Product;
use shared::money::{parse_amount, to_display};

use crate::selection::Selection;

/// Result of price resolution, in display form
///
/// Serializes with the field names the view layer renders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// Base selling price
    pub base_price: f64,
    /// Sum of the selected options' surcharges
    pub variation_price: f64,
    /// base_price + variation_price
    pub subtotal: f64,
    /// Whether the discount applies
    pub is_discounted: bool,
    /// Discount percentage (0 while not discounted)
    pub discount_percent: f64,
    /// subtotal × discount_percent / 100
    pub discount_amount: f64,
    /// subtotal − discount_amount
    pub final_price: f64,
}

/// Resolve the price breakdown for a product and the current selection
///
/// Pure: no side effects, identical inputs give an identical breakdown.
/// A missing or unmatched selection contributes zero for its axis.
///
/// # Calculation Steps
/// 1. base = lenient parse of the selling price
/// 2. variation = sum of the selected options' surcharges
/// 3. subtotal = base + variation
/// 4. discount = subtotal × percent / 100 while `is_discounted`
/// 5. final = subtotal − discount
pub fn resolve_price(product: &Product, selection: &Selection) -> PriceBreakdown {
    let base = parse_amount(&product.selling_price);

    let mut variation = Decimal::ZERO;
    for axis in &product.variations {
        let Some(option_id) = selection.option_for(&axis.id) else {
            continue;
        };
        if let Some(option) = axis.option(option_id) {
            variation += parse_amount(&option.additional_price);
        }
    }

    let subtotal = base + variation;

    let discount_percent = if product.is_discounted {
        Decimal::from_f64(product.discount).unwrap_or_default()
    } else {
        Decimal::ZERO
    };
    let discount_amount = subtotal * discount_percent / Decimal::ONE_HUNDRED;
    let final_price = subtotal - discount_amount;

    PriceBreakdown {
        base_price: to_display(base),
        variation_price: to_display(variation),
        subtotal: to_display(subtotal),
        is_discounted: product.is_discounted,
        discount_percent: to_display(discount_percent),
        discount_amount: to_display(discount_amount),
        final_price: to_display(final_price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ServiceCategory, VariationAxis, VariationOption};

    fn make_option(id: &str, surcharge: &str) -> VariationOption {
        VariationOption {
            id: id.to_string(),
            value: id.to_string(),
            additional_price: surcharge.to_string(),
            is_active: true,
            images: vec![],
        }
    }

    fn make_axis(id: &str, options: Vec<VariationOption>) -> VariationAxis {
        VariationAxis {
            id: id.to_string(),
            name: id.to_string(),
            is_primary: false,
            options,
        }
    }

    fn make_product(
        selling_price: &str,
        is_discounted: bool,
        discount: f64,
        variations: Vec<VariationAxis>,
    ) -> Product {
        Product {
            id: "prod-1".into(),
            name: "Wedding Hall".into(),
            code: "HAL-0007".into(),
            category: ServiceCategory::Hall,
            unit: "per day".into(),
            description: String::new(),
            selling_price: selling_price.to_string(),
            is_discounted,
            discount,
            thumbnail: None,
            images: vec![],
            variations,
        }
    }

    #[test]
    fn base_price_only_when_no_variations() {
        // Scenario A: 100.00, no variations, no discount
        let product = make_product("100.00", false, 0.0, vec![]);
        let breakdown = resolve_price(&product, &Selection::default());

        assert_eq!(breakdown.base_price, 100.0);
        assert_eq!(breakdown.variation_price, 0.0);
        assert_eq!(breakdown.subtotal, 100.0);
        assert_eq!(breakdown.discount_amount, 0.0);
        assert_eq!(breakdown.final_price, 100.0);
    }

    #[test]
    fn surcharge_and_discount_combine() {
        // Scenario B: 100.00 + 20.00 option, 10% discount
        let product = make_product(
            "100.00",
            true,
            10.0,
            vec![make_axis("size", vec![make_option("l", "20.00")])],
        );
        let selection = Selection::defaults_for(&product);
        let breakdown = resolve_price(&product, &selection);

        assert_eq!(breakdown.variation_price, 20.0);
        assert_eq!(breakdown.subtotal, 120.0);
        assert_eq!(breakdown.discount_percent, 10.0);
        assert_eq!(breakdown.discount_amount, 12.0);
        assert_eq!(breakdown.final_price, 108.0);
    }

    #[test]
    fn discount_flag_off_means_no_discount() {
        let product = make_product("250.00", false, 40.0, vec![]);
        let breakdown = resolve_price(&product, &Selection::default());

        assert!(!breakdown.is_discounted);
        assert_eq!(breakdown.discount_percent, 0.0);
        assert_eq!(breakdown.discount_amount, 0.0);
        assert_eq!(breakdown.final_price, breakdown.subtotal);
    }

    #[test]
    fn unselected_axis_contributes_nothing() {
        let inactive = VariationOption {
            is_active: false,
            ..make_option("l", "500.00")
        };
        let product = make_product("100.00", false, 0.0, vec![make_axis("size", vec![inactive])]);
        let selection = Selection::defaults_for(&product);

        let breakdown = resolve_price(&product, &selection);
        assert_eq!(breakdown.variation_price, 0.0);
        assert_eq!(breakdown.final_price, 100.0);
    }

    #[test]
    fn rejected_choice_leaves_price_unchanged() {
        let product = make_product(
            "100.00",
            false,
            0.0,
            vec![make_axis("size", vec![make_option("s", "0.00")])],
        );
        let mut selection = Selection::defaults_for(&product);
        let before = resolve_price(&product, &selection);

        assert!(!selection.choose(&product, "size", "not-an-option"));
        assert_eq!(resolve_price(&product, &selection), before);
    }

    #[test]
    fn malformed_selling_price_renders_as_zero() {
        let product = make_product("call us", false, 0.0, vec![]);
        let breakdown = resolve_price(&product, &Selection::default());

        assert_eq!(breakdown.base_price, 0.0);
        assert_eq!(breakdown.final_price, 0.0);
    }

    #[test]
    fn resolution_is_idempotent() {
        let product = make_product(
            "999.99",
            true,
            33.0,
            vec![make_axis("size", vec![make_option("l", "120.50")])],
        );
        let selection = Selection::defaults_for(&product);

        let first = resolve_price(&product, &selection);
        let second = resolve_price(&product, &selection);
        assert_eq!(first, second);
    }

    #[test]
    fn intermediate_precision_is_kept_until_display() {
        // 99.99 at 33%: discount 32.9967 rounds to 33.00, final 66.9933 to 66.99
        let product = make_product("99.99", true, 33.0, vec![]);
        let breakdown = resolve_price(&product, &Selection::default());

        assert_eq!(breakdown.discount_amount, 33.0);
        assert_eq!(breakdown.final_price, 66.99);
    }

    #[test]
    fn breakdown_serializes_camel_case() {
        let product = make_product("100.00", true, 10.0, vec![]);
        let breakdown = resolve_price(&product, &Selection::default());

        let json = serde_json::to_value(&breakdown).unwrap();
        assert_eq!(json["basePrice"], 100.0);
        assert_eq!(json["isDiscounted"], true);
        assert_eq!(json["discountAmount"], 10.0);
        assert_eq!(json["finalPrice"], 90.0);
    }
}
