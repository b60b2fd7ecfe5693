//! Grouped view of the cart for the order summary page

use serde::Serialize;
use shared::models::CartLine;

/// All cart lines of one dish, folded together for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartSummaryLine {
    pub id: String,
    pub name: String,
    /// Price of the first line seen for this dish
    pub unit_price: i64,
    pub units: usize,
    /// Sum of the actual line prices
    pub line_total: i64,
}

/// Group lines by dish id, in first-seen order
///
/// Display only: the cart itself keeps one line per unit.
pub fn summarize(lines: &[CartLine]) -> Vec<CartSummaryLine> {
    let mut summary: Vec<CartSummaryLine> = Vec::new();
    for line in lines {
        match summary.iter_mut().find(|s| s.id == line.id) {
            Some(entry) => {
                entry.units += 1;
                entry.line_total = entry.line_total.saturating_add(line.price);
            }
            None => summary.push(CartSummaryLine {
                id: line.id.clone(),
                name: line.name.clone(),
                unit_price: line.price,
                units: 1,
                line_total: line.price,
            }),
        }
    }
    summary
}
