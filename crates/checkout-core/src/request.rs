//! # Request Types
//!
//! The checkout request as it arrives from a caller, and the validated
//! line items the pricing steps work on.
//!
//! `CheckoutRequest` keeps every field optional and `items` untyped so
//! that missing fields and malformed item lists are reported through
//! `CheckoutError::InvalidRequest` by the validators, not as
//! deserialization failures.

use crate::error::{CheckoutError, CheckoutResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Opaque caller identity: a string or an integer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UserId {
    Number(i64),
    Text(String),
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserId::Number(n) => write!(f, "{}", n),
            UserId::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        UserId::Text(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        UserId::Text(value)
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        UserId::Number(value)
    }
}

/// Raw checkout request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// Caller identity (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Line items, checked by the item validator (required)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Value>,

    /// Coupon code; absent and empty both mean "no coupon"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<String>,

    /// Currency code; absent means the configured default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl CheckoutRequest {
    /// Create a request for a user with typed line items
    pub fn new(user_id: impl Into<UserId>, items: &[LineItem]) -> Self {
        Self {
            user_id: Some(user_id.into()),
            items: Some(Value::Array(items.iter().map(LineItem::to_value).collect())),
            coupon: None,
            currency: None,
        }
    }

    /// Builder: set coupon code
    pub fn with_coupon(mut self, coupon: impl Into<String>) -> Self {
        self.coupon = Some(coupon.into());
        self
    }

    /// Builder: set currency code
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Parse a request from loosely-shaped JSON.
    ///
    /// Only a non-object body or a top-level field of the wrong scalar type
    /// (e.g. `user_id: {}` or `coupon: 5`) fails here.
    pub fn from_json(value: Value) -> CheckoutResult<Self> {
        // Derived struct deserialization would also take a positional array
        if !value.is_object() {
            return Err(CheckoutError::invalid("request must be an object"));
        }

        serde_json::from_value(value)
            .map_err(|e| CheckoutError::invalid(format!("malformed request: {}", e)))
    }
}

/// A validated line item. Amounts are in the currency's smallest unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Unit price, always > 0 once validated
    pub price: i64,
    /// Quantity, always > 0 once validated
    pub qty: i64,
}

impl LineItem {
    pub fn new(price: i64, qty: i64) -> Self {
        Self { price, qty }
    }

    /// `price * qty`, or `None` on overflow
    pub fn line_total(&self) -> Option<i64> {
        self.price.checked_mul(self.qty)
    }

    fn to_value(&self) -> Value {
        serde_json::json!({ "price": self.price, "qty": self.qty })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_user_id_display() {
        assert_eq!(UserId::from("u1").to_string(), "u1");
        assert_eq!(UserId::from(42).to_string(), "42");
    }

    #[test]
    fn test_from_json_accepts_string_and_numeric_user_id() {
        let req = CheckoutRequest::from_json(json!({ "user_id": "u1", "items": [] })).unwrap();
        assert_eq!(req.user_id, Some(UserId::Text("u1".into())));

        let req = CheckoutRequest::from_json(json!({ "user_id": 7, "items": [] })).unwrap();
        assert_eq!(req.user_id, Some(UserId::Number(7)));
    }

    #[test]
    fn test_from_json_null_fields_are_absent() {
        let req = CheckoutRequest::from_json(json!({
            "user_id": null,
            "items": null,
            "coupon": null
        }))
        .unwrap();

        assert!(req.user_id.is_none());
        assert!(req.items.is_none());
        assert!(req.coupon.is_none());
        assert!(req.currency.is_none());
    }

    #[test]
    fn test_from_json_keeps_items_untyped() {
        let req = CheckoutRequest::from_json(json!({ "user_id": "u1", "items": "lots" })).unwrap();
        assert_eq!(req.items, Some(json!("lots")));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        for body in [
            json!(["u1", [{ "price": 50, "qty": 2 }]]),
            json!("u1"),
            json!(null),
            json!(7),
        ] {
            assert_eq!(
                CheckoutRequest::from_json(body),
                Err(CheckoutError::invalid("request must be an object"))
            );
        }
    }

    #[test]
    fn test_from_json_rejects_wrong_field_type() {
        let err = CheckoutRequest::from_json(json!({ "user_id": "u1", "coupon": 5 })).unwrap_err();
        assert!(matches!(err, CheckoutError::InvalidRequest(msg) if msg.starts_with("malformed request")));
    }

    #[test]
    fn test_builder() {
        let req = CheckoutRequest::new("u1", &[LineItem::new(50, 2)])
            .with_coupon("SAVE10")
            .with_currency("EUR");

        assert_eq!(req.items, Some(json!([{ "price": 50, "qty": 2 }])));
        assert_eq!(req.coupon.as_deref(), Some("SAVE10"));
        assert_eq!(req.currency.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_line_total_overflow() {
        assert_eq!(LineItem::new(50, 2).line_total(), Some(100));
        assert_eq!(LineItem::new(i64::MAX, 2).line_total(), None);
    }
}
