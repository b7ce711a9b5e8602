//! # Validation
//!
//! Request and item validation, the first two steps of the pipeline.
//!
//! Checks run in a fixed order and stop at the first violation, so the
//! same bad request always produces the same error:
//!
//! ```text
//! user_id present ─▶ items present ─▶ items is a list ─▶ list non-empty
//!                                                            │
//!                     ┌──────────────────────────────────────┘
//!                     ▼
//!   for each item in order: has price & qty ─▶ price > 0 ─▶ qty > 0
//! ```

use crate::error::{CheckoutError, CheckoutResult};
use crate::request::{CheckoutRequest, LineItem, UserId};
use serde_json::Value;

/// Check that the required top-level fields are present.
///
/// Returns the user id and the still-unchecked items value.
pub fn validate_request(request: &CheckoutRequest) -> CheckoutResult<(&UserId, &Value)> {
    let user_id = request
        .user_id
        .as_ref()
        .ok_or_else(|| CheckoutError::invalid("user_id is required"))?;

    let items = request
        .items
        .as_ref()
        .ok_or_else(|| CheckoutError::invalid("items is required"))?;

    Ok((user_id, items))
}

/// Check the shape and values of the items field and convert it to
/// typed line items.
pub fn validate_items(items: &Value) -> CheckoutResult<Vec<LineItem>> {
    let entries = items
        .as_array()
        .ok_or_else(|| CheckoutError::invalid("items must be a list"))?;

    if entries.is_empty() {
        return Err(CheckoutError::invalid("items must not be empty"));
    }

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| validate_item(index, entry))
        .collect()
}

fn validate_item(index: usize, entry: &Value) -> CheckoutResult<LineItem> {
    let (price, qty) = match entry.as_object() {
        Some(fields) => match (fields.get("price"), fields.get("qty")) {
            (Some(price), Some(qty)) => (price, qty),
            _ => return Err(missing_fields(index)),
        },
        None => return Err(missing_fields(index)),
    };

    let price = positive_amount(index, "price", price)?;
    let qty = positive_amount(index, "qty", qty)?;

    Ok(LineItem::new(price, qty))
}

fn missing_fields(index: usize) -> CheckoutError {
    CheckoutError::invalid(format!("item {} must have price and qty", index))
}

fn not_positive(index: usize, field: &str) -> CheckoutError {
    CheckoutError::invalid(format!("item {} {} must be positive", index, field))
}

/// Any JSON number is accepted here; the sign check comes before the
/// minor-unit check so `0.5` and `-0.5` fail the same way `1` and `-1` do.
fn positive_amount(index: usize, field: &str, value: &Value) -> CheckoutResult<i64> {
    if let Some(amount) = value.as_i64() {
        if amount <= 0 {
            return Err(not_positive(index, field));
        }
        return Ok(amount);
    }

    let amount = value.as_f64().ok_or_else(|| {
        CheckoutError::invalid(format!("item {} {} must be a number", index, field))
    })?;

    if amount <= 0.0 {
        return Err(not_positive(index, field));
    }

    whole_amount(index, field, amount)
}

/// Narrow a positive float to minor units. `50.0` is `50`; `19.99` has no
/// minor-unit representation.
fn whole_amount(index: usize, field: &str, amount: f64) -> CheckoutResult<i64> {
    if amount.fract() != 0.0 {
        return Err(CheckoutError::invalid(format!(
            "item {} {} must be a whole amount in minor units",
            index, field
        )));
    }

    // i64::MAX rounds up to 2^63 as f64, so `>=` excludes it
    if amount >= i64::MAX as f64 {
        return Err(CheckoutError::invalid("amount out of range"));
    }

    Ok(amount as i64)
}
