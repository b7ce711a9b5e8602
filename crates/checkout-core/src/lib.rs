//! # checkout-core
//!
//! Checkout pricing pipeline for lightning-checkout.
//!
//! This crate provides:
//! - `CheckoutRequest`, `LineItem` and `UserId` for the incoming request
//! - Request and item validation
//! - Subtotal, `Coupon` discount, tax and total calculation
//! - `OrderSummary` and `OrderId` for the result
//! - `PricingRules` for the constant table behind discounts and tax
//! - `CheckoutError` for typed error handling
//!
//! Everything here is pure: no I/O, no logging, no shared state.
//!
//! ## Example
//!
//! ```rust
//! use checkout_core::{process_checkout, CheckoutRequest, LineItem};
//!
//! let request = CheckoutRequest::new("u2", &[LineItem::new(100, 2)]).with_coupon("SAVE20");
//! let summary = process_checkout(&request).unwrap();
//!
//! assert_eq!(summary.subtotal, 200);
//! assert_eq!(summary.discount, 40);
//! assert_eq!(summary.tax, 33);
//! assert_eq!(summary.total, 193);
//! assert_eq!(summary.order_id.as_str(), "u2-1-X");
//! ```

pub mod checkout;
pub mod coupon;
pub mod error;
pub mod order;
pub mod pricing;
pub mod request;
pub mod rules;
pub mod validation;

// Re-exports for convenience
pub use checkout::{process_checkout, process_checkout_with};
pub use coupon::{resolve_discount, Coupon};
pub use error::{CheckoutError, CheckoutResult, ConfigError};
pub use order::{OrderId, OrderSummary};
pub use pricing::{subtotal, tax_and_total, Totals};
pub use request::{CheckoutRequest, LineItem, UserId};
pub use rules::PricingRules;
pub use validation::{validate_items, validate_request};
