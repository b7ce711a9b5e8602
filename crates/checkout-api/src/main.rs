//! # Lightning-Checkout RS
//!
//! Checkout pricing server.
//!
//! ## Usage
//!
//! ```bash
//! # Optional: point at a custom rule table
//! export PRICING_CONFIG=config/pricing.toml
//!
//! # Run the server
//! checkout-server
//! ```

use checkout_api::{routes, state::AppConfig, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env();

    init_logging(config.is_production());

    print_banner();

    let state = AppState::from_config(config)?;

    let addr = state.config.socket_addr()?;
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Tax rate: {} bps, default currency: {}",
        state.rules.tax_rate_bps, state.rules.default_currency
    );

    let app = routes::create_router(state);

    info!("Lightning-Checkout starting on http://{}", addr);

    if !is_prod {
        info!("Health: http://{}/health", addr);
        info!("Checkout: POST http://{}/api/v1/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Human-readable logs locally, JSON lines in production
fn init_logging(json: bool) {
    let (json_layer, text_layer) = if json {
        (Some(fmt::layer().with_target(false).json()), None)
    } else {
        (None, Some(fmt::layer()))
    };

    tracing_subscriber::registry()
        .with(json_layer)
        .with(text_layer)
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();
}

fn print_banner() {
    println!(
        r#"
  Lightning-Checkout RS
  ━━━━━━━━━━━━━━━━━━━━━
  Checkout pricing engine
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
