//! # checkout-api
//!
//! HTTP API layer for lightning-checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoint that prices a checkout request
//! - Translation of core errors into HTTP responses
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/api/v1/checkout` | Price a checkout request |
//! | GET | `/api/v1/coupons` | List coupon codes |
//! | GET | `/api/v1/pricing` | Active pricing rules |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
