//! Print price list: per-unit cost of one print location by quantity tier and
//! number of colors.

use super::entities::{MAX_SCREENS_PER_LOCATION, MIN_ORDER_QUANTITY};

/// Quantity tiers, ascending. A job is priced at the largest tier it reaches.
pub const QUANTITY_BREAKS: [u32; 11] = [12, 24, 48, 72, 144, 288, 576, 1200, 5000, 10000, 20000];

/// Unit price per location, indexed by `[colors - 1][break index]`.
pub const PRICE_MATRIX: [[f64; 11]; 10] = [
    [3.20, 2.90, 2.55, 2.35, 2.10, 2.00, 1.80, 1.55, 1.45, 1.40, 1.35],
    [3.85, 3.45, 2.90, 2.55, 2.35, 2.10, 1.90, 1.65, 1.90, 1.80, 1.65],
    [4.60, 4.20, 3.65, 3.30, 3.10, 2.90, 2.65, 2.45, 2.10, 2.00, 1.90],
    [5.40, 5.10, 4.75, 4.40, 4.10, 3.75, 3.55, 3.45, 3.00, 2.90, 2.65],
    [6.20, 5.75, 5.30, 4.85, 4.55, 3.55, 3.45, 3.20, 3.10, 2.75, 2.55],
    [6.85, 6.40, 6.05, 5.65, 5.30, 4.30, 4.20, 3.85, 3.55, 3.30, 3.20],
    [7.50, 6.85, 6.75, 6.30, 5.95, 5.40, 5.20, 4.85, 4.40, 3.85, 3.65],
    [7.85, 7.30, 6.95, 6.75, 6.40, 5.85, 5.50, 5.20, 4.85, 4.10, 3.85],
    [8.40, 7.85, 7.30, 6.95, 6.60, 5.95, 5.65, 5.40, 5.20, 4.30, 3.65],
    [9.15, 8.40, 8.10, 8.25, 7.95, 7.15, 6.85, 6.50, 5.40, 4.55, 3.55],
];

/// Index of the largest break not above `quantity`, or 0 below the first break.
fn break_index(quantity: u32) -> usize {
    QUANTITY_BREAKS
        .iter()
        .rposition(|&tier| tier <= quantity)
        .unwrap_or(0)
}

/// The quantity tier a job of `quantity` units is priced at.
pub fn applicable_break(quantity: u32) -> u32 {
    QUANTITY_BREAKS[break_index(quantity)]
}

/// Per-unit print cost for one location.
///
/// Undersized jobs and blank locations cost nothing; color counts above the
/// table are priced on its last row.
pub fn lookup(quantity: u32, colors: u8) -> f64 {
    if quantity < MIN_ORDER_QUANTITY || colors == 0 {
        return 0.0;
    }

    let row = usize::from(colors.min(MAX_SCREENS_PER_LOCATION)) - 1;
    PRICE_MATRIX[row][break_index(quantity)]
}
