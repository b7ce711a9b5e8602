//! # Order Types
//!
//! The order summary returned from a checkout and its identifier.

use crate::request::UserId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order identifier of the form `<user_id>-<items_count>-X`.
///
/// Derived only from its inputs: two checkouts by the same user with the
/// same number of items get the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    const SEPARATOR: char = '-';
    const SUFFIX: &'static str = "X";

    /// Build the id for a user and an item count
    pub fn generate(user_id: &UserId, items_count: usize) -> Self {
        Self(format!(
            "{user}{sep}{count}{sep}{suffix}",
            user = user_id,
            count = items_count,
            sep = Self::SEPARATOR,
            suffix = Self::SUFFIX,
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for OrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Final price breakdown of a checkout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderSummary {
    /// Generated order id
    pub order_id: OrderId,

    /// Caller identity, echoed back
    pub user_id: UserId,

    /// Currency code, echoed back or defaulted
    pub currency: String,

    /// Sum of `price * qty` over all items
    pub subtotal: i64,

    /// Coupon discount (may exceed the subtotal)
    pub discount: i64,

    /// Tax on the discounted subtotal
    pub tax: i64,

    /// Discounted subtotal plus tax
    pub total: i64,

    /// Number of line items (not units)
    pub items_count: usize,
}

impl OrderSummary {
    /// `max(0, subtotal - discount)`
    pub fn discounted(&self) -> i64 {
        self.total - self.tax
    }
}
