//! # Coupons
//!
//! Recognized coupon codes and the discount each one grants.
//!
//! | Code     | Condition                | Discount                  |
//! |----------|--------------------------|---------------------------|
//! | `SAVE10` | any subtotal             | 10% (truncated)           |
//! | `SAVE20` | subtotal >= threshold    | 20% (truncated)           |
//! | `SAVE20` | subtotal < threshold     | 5% (truncated)            |
//! | `VIP`    | subtotal >= threshold    | flat high amount          |
//! | `VIP`    | subtotal < threshold     | flat low amount           |
//!
//! Percentages, thresholds and flat amounts come from [`PricingRules`].

use crate::error::{CheckoutError, CheckoutResult};
use crate::rules::{apply_bps, PricingRules};
use std::fmt;
use std::str::FromStr;

/// A recognized coupon code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Coupon {
    Save10,
    Save20,
    Vip,
}

impl Coupon {
    /// Every recognized coupon
    pub const ALL: [Coupon; 3] = [Coupon::Save10, Coupon::Save20, Coupon::Vip];

    /// The code a customer types
    pub fn code(&self) -> &'static str {
        match self {
            Coupon::Save10 => "SAVE10",
            Coupon::Save20 => "SAVE20",
            Coupon::Vip => "VIP",
        }
    }

    /// Parse an optional coupon field. Absent and empty both mean no coupon.
    pub fn parse_optional(code: Option<&str>) -> CheckoutResult<Option<Coupon>> {
        match code {
            None | Some("") => Ok(None),
            Some(code) => code.parse().map(Some),
        }
    }

    /// Discount this coupon grants on `subtotal`. Never negative for a
    /// non-negative subtotal.
    pub fn discount(&self, subtotal: i64, rules: &PricingRules) -> i64 {
        match self {
            Coupon::Save10 => apply_bps(subtotal, rules.save10_bps),
            Coupon::Save20 if subtotal >= rules.save20_threshold => {
                apply_bps(subtotal, rules.save20_high_bps)
            }
            Coupon::Save20 => apply_bps(subtotal, rules.save20_low_bps),
            Coupon::Vip if subtotal >= rules.vip_threshold => rules.vip_high,
            Coupon::Vip => rules.vip_low,
        }
    }
}

impl FromStr for Coupon {
    type Err = CheckoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Coupon::ALL
            .into_iter()
            .find(|coupon| coupon.code() == s)
            .ok_or_else(|| CheckoutError::UnknownCoupon { code: s.to_string() })
    }
}

impl fmt::Display for Coupon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Resolve the discount for an optional coupon code and a subtotal.
pub fn resolve_discount(
    coupon: Option<&str>,
    subtotal: i64,
    rules: &PricingRules,
) -> CheckoutResult<i64> {
    Ok(Coupon::parse_optional(coupon)?
        .map(|coupon| coupon.discount(subtotal, rules))
        .unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn discount(coupon: Option<&str>, subtotal: i64) -> CheckoutResult<i64> {
        resolve_discount(coupon, subtotal, &PricingRules::default())
    }

    #[test]
    fn test_no_coupon() {
        assert_eq!(discount(None, 500), Ok(0));
        assert_eq!(discount(Some(""), 500), Ok(0));
    }

    #[test]
    fn test_save10_truncates() {
        assert_eq!(discount(Some("SAVE10"), 100), Ok(10));
        assert_eq!(discount(Some("SAVE10"), 199), Ok(19));
        assert_eq!(discount(Some("SAVE10"), 9), Ok(0));
    }

    #[test]
    fn test_save20_threshold() {
        assert_eq!(discount(Some("SAVE20"), 200), Ok(40));
        assert_eq!(discount(Some("SAVE20"), 255), Ok(51));
        assert_eq!(discount(Some("SAVE20"), 199), Ok(9));
        assert_eq!(discount(Some("SAVE20"), 10), Ok(0));
    }

    #[test]
    fn test_vip_flat_amounts() {
        assert_eq!(discount(Some("VIP"), 100), Ok(50));
        assert_eq!(discount(Some("VIP"), 1_000), Ok(50));
        assert_eq!(discount(Some("VIP"), 99), Ok(10));
        assert_eq!(discount(Some("VIP"), 5), Ok(10));
    }

    #[test]
    fn test_unknown_coupon() {
        assert_eq!(
            discount(Some("FREEBIE"), 100),
            Err(CheckoutError::UnknownCoupon {
                code: "FREEBIE".to_string()
            })
        );
    }

    #[test]
    fn test_codes_are_case_sensitive() {
        assert!(matches!(
            discount(Some("save10"), 100),
            Err(CheckoutError::UnknownCoupon { .. })
        ));
        assert!(matches!(
            discount(Some(" VIP"), 100),
            Err(CheckoutError::UnknownCoupon { .. })
        ));
    }

    #[test]
    fn test_code_round_trips_through_from_str() {
        for coupon in Coupon::ALL {
            assert_eq!(coupon.code().parse::<Coupon>(), Ok(coupon));
            assert_eq!(coupon.to_string(), coupon.code());
        }
    }

    #[test]
    fn test_custom_rules() {
        let rules = PricingRules {
            vip_threshold: 1_000,
            vip_high: 300,
            ..PricingRules::default()
        };
        assert_eq!(resolve_discount(Some("VIP"), 999, &rules), Ok(10));
        assert_eq!(resolve_discount(Some("VIP"), 1_000, &rules), Ok(300));
    }
}
