//! # Checkout
//!
//! The checkout pipeline: validate, price, identify.
//!
//! ```text
//! CheckoutRequest
//!   │
//!   ├─▶ validate_request   (user_id, items present)
//!   ├─▶ validate_items     (list, non-empty, price/qty > 0)
//!   ├─▶ subtotal           (Σ price * qty)
//!   ├─▶ resolve_discount   (coupon + subtotal)
//!   ├─▶ tax_and_total      (max(0, subtotal - discount) + tax)
//!   └─▶ OrderId::generate  (<user_id>-<items_count>-X)
//!   │
//!   ▼
//! OrderSummary
//! ```

use crate::coupon::resolve_discount;
use crate::error::CheckoutResult;
use crate::order::{OrderId, OrderSummary};
use crate::pricing::{subtotal, tax_and_total};
use crate::request::CheckoutRequest;
use crate::rules::PricingRules;
use crate::validation::{validate_items, validate_request};

/// Price a checkout request with the default rule table.
pub fn process_checkout(request: &CheckoutRequest) -> CheckoutResult<OrderSummary> {
    process_checkout_with(&PricingRules::default(), request)
}

/// Price a checkout request with an explicit rule table.
///
/// Pure: no I/O, no shared state, identical output for identical input.
pub fn process_checkout_with(
    rules: &PricingRules,
    request: &CheckoutRequest,
) -> CheckoutResult<OrderSummary> {
    let (user_id, items) = validate_request(request)?;
    let items = validate_items(items)?;

    let subtotal = subtotal(&items)?;
    let discount = resolve_discount(request.coupon.as_deref(), subtotal, rules)?;
    let totals = tax_and_total(subtotal, discount, rules);

    let currency = request
        .currency
        .clone()
        .unwrap_or_else(|| rules.default_currency.clone());

    Ok(OrderSummary {
        order_id: OrderId::generate(user_id, items.len()),
        user_id: user_id.clone(),
        currency,
        subtotal,
        discount,
        tax: totals.tax,
        total: totals.total,
        items_count: items.len(),
    })
}
