//! # Checkout Error Types
//!
//! Typed error handling for the checkout pipeline.
//! Every pipeline step returns `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for checkout operations.
///
/// Both kinds describe a problem with the caller's input; the pipeline has
/// no internal failure modes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// Missing required field, malformed or empty items, bad item values
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Non-empty coupon code that matches no known rule
    #[error("Unknown coupon: {code}")]
    UnknownCoupon { code: String },
}

impl CheckoutError {
    /// Shorthand for building an `InvalidRequest`
    pub fn invalid(message: impl Into<String>) -> Self {
        CheckoutError::InvalidRequest(message.into())
    }

    /// Returns true if this error is retryable
    pub fn is_retryable(&self) -> bool {
        // Same input, same answer.
        false
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::InvalidRequest(_) => 400,
            CheckoutError::UnknownCoupon { .. } => 422,
        }
    }

    /// Stable machine-readable kind, for wrappers that report errors
    pub fn kind(&self) -> &'static str {
        match self {
            CheckoutError::InvalidRequest(_) => "invalid_request",
            CheckoutError::UnknownCoupon { .. } => "unknown_coupon",
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Errors raised while loading or checking a pricing rule table
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Rule file could not be read
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid TOML for `PricingRules`
    #[error("Failed to parse pricing rules: {0}")]
    Parse(#[from] toml::de::Error),

    /// A rule value is out of range
    #[error("Invalid pricing rule `{field}`: {message}")]
    InvalidRule { field: &'static str, message: String },
}
