//! # Pricing
//!
//! Subtotal, tax and total calculation.

use crate::error::{CheckoutError, CheckoutResult};
use crate::request::LineItem;
use crate::rules::{apply_bps, PricingRules};

/// Sum of `price * qty` over all items.
///
/// Exact integer arithmetic; a sum that does not fit in `i64` is reported
/// as an invalid request rather than wrapping.
pub fn subtotal(items: &[LineItem]) -> CheckoutResult<i64> {
    items.iter().try_fold(0_i64, |acc, item| {
        item.line_total()
            .and_then(|line| acc.checked_add(line))
            .ok_or_else(|| CheckoutError::invalid("amount out of range"))
    })
}

/// Tax and total derived from a subtotal and a discount
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    /// `max(0, subtotal - discount)`
    pub discounted: i64,
    /// `floor(discounted * tax rate)`
    pub tax: i64,
    /// `discounted + tax`
    pub total: i64,
}

/// Apply the discount and the flat tax rate.
///
/// A discount larger than the subtotal floors the discounted amount at
/// zero, so tax and total are zero too.
pub fn tax_and_total(subtotal: i64, discount: i64, rules: &PricingRules) -> Totals {
    let discounted = subtotal.saturating_sub(discount).max(0);
    let tax = apply_bps(discounted, rules.tax_rate_bps);
    Totals {
        discounted,
        tax,
        // tax <= discounted, so this only saturates for amounts above i64::MAX / 2
        total: discounted.saturating_add(tax),
    }
}
