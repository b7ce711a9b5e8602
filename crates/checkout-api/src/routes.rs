//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
///   - GET  /health, / - Health check
///   - POST /api/v1/checkout - Price a checkout request
///   - GET  /api/v1/coupons - List coupon codes
///   - GET  /api/v1/pricing - Active pricing rules
pub fn create_router(state: AppState) -> Router {
    // Pricing is read-only, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/checkout", post(handlers::create_checkout))
        .route("/coupons", get(handlers::list_coupons))
        .route("/pricing", get(handlers::get_pricing));

    Router::new()
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::AppConfig;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use checkout_core::PricingRules;
    use serde_json::{json, Value};

    fn test_server(rules: PricingRules) -> TestServer {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            pricing_config: None,
        };
        TestServer::new(create_router(AppState::with_rules(config, rules))).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let server = test_server(PricingRules::default());

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn test_checkout_success() {
        let server = test_server(PricingRules::default());

        let response = server
            .post("/api/v1/checkout")
            .json(&json!({
                "user_id": "u2",
                "items": [{ "price": 100, "qty": 2 }],
                "coupon": "SAVE20"
            }))
            .await;

        response.assert_status_ok();
        response.assert_json(&json!({
            "order_id": "u2-1-X",
            "user_id": "u2",
            "currency": "USD",
            "subtotal": 200,
            "discount": 40,
            "tax": 33,
            "total": 193,
            "items_count": 1
        }));
    }

    #[tokio::test]
    async fn test_checkout_invalid_request() {
        let server = test_server(PricingRules::default());

        let response = server
            .post("/api/v1/checkout")
            .json(&json!({ "user_id": "u1", "items": [] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["code"], 400);
        assert_eq!(body["kind"], "invalid_request");
        assert_eq!(body["error"], "Invalid request: items must not be empty");
    }

    #[tokio::test]
    async fn test_checkout_array_body_rejected() {
        let server = test_server(PricingRules::default());

        let response = server
            .post("/api/v1/checkout")
            .json(&json!(["u1", [{ "price": 50, "qty": 2 }]]))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid request: request must be an object");
    }

    #[tokio::test]
    async fn test_checkout_whole_float_price() {
        let server = test_server(PricingRules::default());

        let response = server
            .post("/api/v1/checkout")
            .json(&json!({ "user_id": "u1", "items": [{ "price": 50.0, "qty": 2 }] }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["subtotal"], 100);
        assert_eq!(body["total"], 121);
    }

    #[tokio::test]
    async fn test_checkout_missing_user() {
        let server = test_server(PricingRules::default());

        let response = server
            .post("/api/v1/checkout")
            .json(&json!({ "items": [{ "price": 1, "qty": 1 }] }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_checkout_unknown_coupon() {
        let server = test_server(PricingRules::default());

        let response = server
            .post("/api/v1/checkout")
            .json(&json!({
                "user_id": "u1",
                "items": [{ "price": 10, "qty": 1 }],
                "coupon": "FREEBIE"
            }))
            .await;

        response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = response.json();
        assert_eq!(body["kind"], "unknown_coupon");
    }

    #[tokio::test]
    async fn test_checkout_uses_loaded_rules() {
        let server = test_server(PricingRules {
            tax_rate_bps: 0,
            default_currency: "EUR".to_string(),
            ..PricingRules::default()
        });

        let response = server
            .post("/api/v1/checkout")
            .json(&json!({ "user_id": "u1", "items": [{ "price": 50, "qty": 2 }] }))
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["tax"], 0);
        assert_eq!(body["total"], 100);
        assert_eq!(body["currency"], "EUR");
    }

    #[tokio::test]
    async fn test_list_coupons() {
        let server = test_server(PricingRules::default());

        let response = server.get("/api/v1/coupons").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["count"], 3);
        assert_eq!(body["coupons"][0]["code"], "SAVE10");
    }

    #[tokio::test]
    async fn test_get_pricing() {
        let server = test_server(PricingRules::default());

        let response = server.get("/api/v1/pricing").await;
        response.assert_status_ok();

        let rules: PricingRules = response.json();
        assert_eq!(rules, PricingRules::default());
    }
}
