//! Money helpers
//!
//! Prices travel as decimal strings ("1500.00"). Parsing is lenient:
//! malformed input becomes zero rather than an error, so a bad record
//! renders as ₹0.00 instead of breaking the view. Arithmetic past the
//! parse boundary uses rust_decimal.

use rust_decimal::prelude::*;

/// Rounding applied when leaving Decimal for display (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Parse a wire amount leniently. Malformed input yields zero.
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    match trimmed.parse::<Decimal>() {
        Ok(value) => value,
        Err(_) => {
            if !trimmed.is_empty() {
                tracing::debug!(raw, "unparseable amount, treating as zero");
            }
            Decimal::ZERO
        }
    }
}

/// Convert a Decimal to its display representation, rounded to 2 decimal places
#[inline]
pub fn to_display(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default()
}

/// Format an amount for the UI (e.g. "₹1500.00")
pub fn format_price(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_amount_accepts_decimal_strings() {
        assert_eq!(parse_amount("1500.00"), Decimal::new(150000, 2));
        assert_eq!(parse_amount("  20.5 "), Decimal::new(205, 1));
        assert_eq!(parse_amount("0"), Decimal::ZERO);
    }

    #[test]
    fn parse_amount_is_lenient() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("free"), Decimal::ZERO);
        assert_eq!(parse_amount("12,50"), Decimal::ZERO);
    }

    #[test]
    fn to_display_rounds_half_up() {
        assert_eq!(to_display("32.9967".parse().unwrap()), 33.0);
        assert_eq!(to_display("2.345".parse().unwrap()), 2.35);
        assert_eq!(to_display("100".parse().unwrap()), 100.0);
    }

    #[test]
    fn format_price_prefixes_symbol() {
        assert_eq!(format_price(1500.0, "₹"), "₹1500.00");
        assert_eq!(format_price(0.0, "₹"), "₹0.00");
    }
}
