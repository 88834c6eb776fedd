//! Price totaling
//!
//! Pure functions over the current passenger counts and the last fetched
//! price range. The remote system prices the booking authoritatively; the
//! totals here are display-only and never enter the reservation payload.

use crate::pax::PassengerCounts;
use crate::types::PriceRange;

/// Total sell price for the current counts.
///
/// An absent family ("udef1") unit price and an absent non-per-passenger
/// fee are both treated as zero. With no price range loaded the total is 0.
pub fn total_price(counts: &PassengerCounts, price: Option<&PriceRange>) -> f64 {
    let Some(price) = price else {
        return 0.0;
    };

    f64::from(counts.adults) * price.adult_tour_sell
        + f64::from(counts.children) * price.child_tour_sell
        + f64::from(counts.families) * price.udef1_tour_sell.unwrap_or(0.0)
        + price.non_per_pax_sell.unwrap_or(0.0)
}

/// Per-category subtotals for the price summary display.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceBreakdown {
    pub adults_subtotal: f64,
    pub children_subtotal: f64,
    pub families_subtotal: f64,
    pub fees: f64,
    pub total: f64,
    pub currency_symbol: String,
}

impl PriceBreakdown {
    pub fn compute(counts: &PassengerCounts, price: &PriceRange) -> Self {
        Self {
            adults_subtotal: f64::from(counts.adults) * price.adult_tour_sell,
            children_subtotal: f64::from(counts.children) * price.child_tour_sell,
            families_subtotal: f64::from(counts.families) * price.udef1_tour_sell.unwrap_or(0.0),
            fees: price.non_per_pax_sell.unwrap_or(0.0),
            total: total_price(counts, Some(price)),
            currency_symbol: price.currency_symbol.clone(),
        }
    }
}

/// Format a monetary amount for display, rounded to two decimal places.
pub fn format_amount(symbol: &str, amount: f64) -> String {
    format!("{symbol}{amount:.2}")
}
