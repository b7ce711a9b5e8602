//! # Request Handlers
//!
//! Axum request handlers for the checkout API.
//! The core knows nothing about HTTP; this module maps its errors to
//! status codes and JSON bodies.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use checkout_core::{process_checkout_with, CheckoutError, CheckoutRequest, Coupon, OrderSummary};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument, warn};

// =============================================================================
// Response Types
// =============================================================================

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: &'static str) -> Self {
        self.kind = Some(kind);
        self
    }
}

/// Coupon listing entry
#[derive(Debug, Serialize)]
pub struct CouponInfo {
    pub code: &'static str,
}

pub(crate) fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code).with_kind(err.kind());
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::BAD_REQUEST),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lightning-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Price a checkout request
#[instrument(skip(state, body))]
pub async fn create_checkout(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<OrderSummary>, (StatusCode, Json<ErrorResponse>)> {
    let summary = CheckoutRequest::from_json(body)
        .and_then(|request| process_checkout_with(&state.rules, &request))
        .map_err(|e| {
            warn!("Checkout rejected: {}", e);
            checkout_error_to_response(e)
        })?;

    info!(
        "Checkout priced: order_id={}, items={}, subtotal={}, discount={}, total={} {}",
        summary.order_id,
        summary.items_count,
        summary.subtotal,
        summary.discount,
        summary.total,
        summary.currency
    );

    Ok(Json(summary))
}

/// List recognized coupon codes
pub async fn list_coupons() -> impl IntoResponse {
    let coupons: Vec<_> = Coupon::ALL
        .iter()
        .map(|c| CouponInfo { code: c.code() })
        .collect();
    Json(serde_json::json!({
        "coupons": coupons,
        "count": coupons.len()
    }))
}

/// Get the active pricing rule table
pub async fn get_pricing(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.rules.as_ref().clone())
}
