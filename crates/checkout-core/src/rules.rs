//! # Pricing Rules
//!
//! The immutable constant table that drives discounts and tax.
//! Loaded from `config/pricing.toml` by the server, or taken from
//! `PricingRules::default()`.
//!
//! Rates are stored in basis points (1/100 of a percent) so that
//! truncating percentage math stays in integers.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Denominator for basis-point rates (10 000 bps = 100%)
pub const BPS_DENOMINATOR: i64 = 10_000;

/// Rule table for discount and tax calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingRules {
    /// Flat tax rate applied to the discounted subtotal (2100 = 21%)
    pub tax_rate_bps: i64,

    /// Currency reported when the request carries none
    pub default_currency: String,

    /// `SAVE10` percentage
    pub save10_bps: i64,

    /// Subtotal at or above which `SAVE20` gives its full rate
    pub save20_threshold: i64,

    /// `SAVE20` percentage at or above the threshold
    pub save20_high_bps: i64,

    /// `SAVE20` percentage below the threshold
    pub save20_low_bps: i64,

    /// Subtotal at or above which `VIP` gives the high flat amount
    pub vip_threshold: i64,

    /// `VIP` flat discount at or above the threshold
    pub vip_high: i64,

    /// `VIP` flat discount below the threshold
    pub vip_low: i64,
}

impl Default for PricingRules {
    fn default() -> Self {
        Self {
            tax_rate_bps: 2_100,
            default_currency: "USD".to_string(),
            save10_bps: 1_000,
            save20_threshold: 200,
            save20_high_bps: 2_000,
            save20_low_bps: 500,
            vip_threshold: 100,
            vip_high: 50,
            vip_low: 10,
        }
    }
}

impl PricingRules {
    /// Load rules from a TOML string. Missing keys keep their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let rules: PricingRules = toml::from_str(toml_str)?;
        rules.validate()?;
        Ok(rules)
    }

    /// Load rules from a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("tax_rate_bps", self.tax_rate_bps),
            ("save10_bps", self.save10_bps),
            ("save20_high_bps", self.save20_high_bps),
            ("save20_low_bps", self.save20_low_bps),
        ];
        for (field, bps) in rates {
            if !(0..=BPS_DENOMINATOR).contains(&bps) {
                return Err(ConfigError::InvalidRule {
                    field,
                    message: format!("{} is outside 0..={}", bps, BPS_DENOMINATOR),
                });
            }
        }

        let amounts = [
            ("save20_threshold", self.save20_threshold),
            ("vip_threshold", self.vip_threshold),
            ("vip_high", self.vip_high),
            ("vip_low", self.vip_low),
        ];
        for (field, amount) in amounts {
            if amount < 0 {
                return Err(ConfigError::InvalidRule {
                    field,
                    message: format!("{} must not be negative", amount),
                });
            }
        }

        if self.default_currency.trim().is_empty() {
            return Err(ConfigError::InvalidRule {
                field: "default_currency",
                message: "must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

/// `floor(amount * bps / 10 000)` for non-negative amounts.
///
/// Computed in `i128` so the intermediate product cannot overflow. With
/// `bps <= 10 000` the quotient never exceeds `amount`; rules that skipped
/// `validate()` saturate at `i64::MAX` instead of wrapping.
pub fn apply_bps(amount: i64, bps: i64) -> i64 {
    let scaled = i128::from(amount) * i128::from(bps) / i128::from(BPS_DENOMINATOR);
    i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX })
}
