//! # checkout-wasm
//!
//! WebAssembly bindings for lightning-checkout-rs.
//!
//! Runs the same pricing pipeline as the server, so a browser or edge
//! worker can show the exact totals the API would return.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { process_checkout } from 'lightning-checkout-wasm';
//!
//! await init();
//!
//! const summary = process_checkout({
//!   user_id: 'u1',
//!   items: [{ price: 50, qty: 2 }],
//!   coupon: 'SAVE10',
//! });
//!
//! console.log('Total:', summary.total);
//! ```
//!
//! ## Building
//!
//! ```bash
//! wasm-pack build --target web
//! ```

use checkout_core::{CheckoutError, CheckoutRequest, Coupon, OrderSummary};
use serde::Serialize;
use serde_json::Value;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::prelude::*;

/// Price a checkout request.
///
/// Errors are thrown as `{ kind, message }` objects.
#[wasm_bindgen]
pub fn process_checkout(request: JsValue) -> Result<JsValue, JsValue> {
    let body: Value = serde_wasm_bindgen::from_value(request)
        .map_err(|e| error_to_js(&CheckoutError::invalid(format!("malformed request: {}", e))))?;

    let summary = checkout_json(body).map_err(|e| error_to_js(&e))?;

    to_js(&summary).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check whether a coupon code is recognized
#[wasm_bindgen]
pub fn is_known_coupon(code: &str) -> bool {
    code.parse::<Coupon>().is_ok()
}

/// Format an amount in cents for display
#[wasm_bindgen]
pub fn format_amount(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, abs / 100, abs % 100)
}

/// Get library version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn checkout_json(body: Value) -> Result<OrderSummary, CheckoutError> {
    let request = CheckoutRequest::from_json(body)?;
    checkout_core::process_checkout(&request)
}

fn error_to_js(err: &CheckoutError) -> JsValue {
    let payload = serde_json::json!({
        "kind": err.kind(),
        "message": err.to_string(),
    });
    to_js(&payload).unwrap_or_else(|_| JsValue::from_str(&err.to_string()))
}

/// Plain JS objects rather than `Map`s, so results read like JSON.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&Serializer::json_compatible())
}
