//! Money calculation utilities using rust_decimal for precision
//!
//! Prices are whole numbers of the smallest currency unit. The GST line is the
//! only derived amount; it is computed as an exact decimal product and rounded
//! half away from zero to a whole unit.

use rust_decimal::prelude::*;
use serde::Serialize;
use shared::models::CartLine;

/// GST rate applied to the cart subtotal (18%)
pub const GST_RATE: Decimal = Decimal::from_parts(18, 0, 0, false, 2);

/// Sum of all line prices
///
/// Saturates instead of wrapping; stored carts are not re-validated on load.
pub fn subtotal(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .fold(0i64, |sum, line| sum.saturating_add(line.price))
}

/// GST on `subtotal`, rounded to a whole unit (half away from zero)
pub fn gst_amount(subtotal: i64) -> i64 {
    (Decimal::from(subtotal) * GST_RATE)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or_default()
}

/// Amounts shown at the bottom of the order summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CartTotals {
    pub subtotal: i64,
    pub gst: i64,
    pub total: i64,
    pub include_gst: bool,
}

impl CartTotals {
    pub fn compute(lines: &[CartLine], include_gst: bool) -> Self {
        let subtotal = subtotal(lines);
        let gst = if include_gst { gst_amount(subtotal) } else { 0 };
        Self {
            subtotal,
            gst,
            total: subtotal.saturating_add(gst),
            include_gst,
        }
    }
}

/// Format an amount in rupees, e.g. `₹299`
pub fn format_price(amount: i64) -> String {
    format!("₹{}", amount)
}
