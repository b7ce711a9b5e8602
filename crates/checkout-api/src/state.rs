//! # Application State
//!
//! Shared state for the Axum application.
//! Contains the server configuration and the pricing rule table.

use checkout_core::PricingRules;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Explicit pricing rule file (overrides the search paths)
    pub pricing_config: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            pricing_config: std::env::var("PRICING_CONFIG").ok().map(PathBuf::from),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid socket address {}:{}: {}", self.host, self.port, e))
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Pricing rules, read-only after startup
    pub rules: Arc<PricingRules>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create a new AppState from the environment and the rule file
    pub fn new() -> anyhow::Result<Self> {
        Self::from_config(AppConfig::from_env())
    }

    /// Create state from an already-loaded config, reading its rule file
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let rules = load_pricing_rules(config.pricing_config.as_ref())?;
        Ok(Self::with_rules(config, rules))
    }

    /// Create state with an explicit rule table
    pub fn with_rules(config: AppConfig, rules: PricingRules) -> Self {
        Self {
            rules: Arc::new(rules),
            config,
        }
    }
}

/// Load pricing rules from config file
fn load_pricing_rules(explicit: Option<&PathBuf>) -> anyhow::Result<PricingRules> {
    // An explicit path must exist
    if let Some(path) = explicit {
        let rules = PricingRules::from_file(path)?;
        tracing::info!("Loaded pricing rules from {}", path.display());
        return Ok(rules);
    }

    let config_paths = [
        "config/pricing.toml",
        "../config/pricing.toml",
        "../../config/pricing.toml",
    ];

    for path in config_paths {
        if std::path::Path::new(path).exists() {
            let rules = PricingRules::from_file(path)?;
            tracing::info!("Loaded pricing rules from {}", path);
            return Ok(rules);
        }
    }

    tracing::warn!("No pricing config found, using built-in rules");
    Ok(PricingRules::default())
}
