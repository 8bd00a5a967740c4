//! Wholesaler delivery cost estimator.
//!
//! `cost = (base + weight * per_kg + distance * per_km) * quantity`

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::notice::Notice;
use crate::types::{CurrencyCode, Price};

/// Raw estimator inputs. Every field is free text.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EstimateForm {
    #[serde(default)]
    pub weight: String,
    #[serde(default)]
    pub distance: String,
    #[serde(default)]
    pub quantity: String,
}

/// Rate card for the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateCard {
    pub base: Decimal,
    pub per_kg: Decimal,
    pub per_km: Decimal,
}

impl Default for RateCard {
    fn default() -> Self {
        Self {
            base: Decimal::from(5),
            per_kg: Decimal::new(5, 1),
            per_km: Decimal::new(3, 1),
        }
    }
}

/// Inputs after leniency rules are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstimateInput {
    pub weight_kg: Decimal,
    pub distance_km: Decimal,
    pub quantity: Decimal,
}

/// Parse a non-negative decimal, or `None` for anything else.
fn lenient(value: &str) -> Option<Decimal> {
    value
        .trim()
        .parse::<Decimal>()
        .ok()
        .filter(|d| !d.is_sign_negative())
}

impl From<&EstimateForm> for EstimateInput {
    /// Blank or unparsable weight and distance count as zero. Quantity
    /// that is blank, unparsable or zero counts as one shipment.
    fn from(form: &EstimateForm) -> Self {
        Self {
            weight_kg: lenient(&form.weight).unwrap_or(Decimal::ZERO),
            distance_km: lenient(&form.distance).unwrap_or(Decimal::ZERO),
            quantity: lenient(&form.quantity)
                .filter(|q| !q.is_zero())
                .unwrap_or(Decimal::ONE),
        }
    }
}

impl RateCard {
    /// Estimated cost for `input`, rounded to two decimal places.
    ///
    /// `None` when the figures are too large for a `Decimal`.
    #[must_use]
    pub fn estimate(&self, input: &EstimateInput, currency: CurrencyCode) -> Option<Price> {
        let per_shipment = self
            .base
            .checked_add(input.weight_kg.checked_mul(self.per_kg)?)?
            .checked_add(input.distance_km.checked_mul(self.per_km)?)?;
        let cost = per_shipment.checked_mul(input.quantity)?;
        Some(Price::new(cost.round_dp(2), currency))
    }
}

/// Notice announcing an estimate.
#[must_use]
pub fn estimate_notice(cost: Price) -> Notice {
    Notice::info(
        format!("Estimated Cost: {}", cost.display_exact()),
        "This is an approximate quote. Final price may vary.",
    )
}

/// Notice for inputs the estimator cannot quote.
#[must_use]
pub fn estimate_out_of_range_notice() -> Notice {
    Notice::destructive(
        "Estimate unavailable",
        "Those figures are too large to quote. Please check weight, distance and quantity.",
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(weight: &str, distance: &str, quantity: &str) -> EstimateForm {
        EstimateForm {
            weight: weight.to_string(),
            distance: distance.to_string(),
            quantity: quantity.to_string(),
        }
    }

    fn cost(weight: &str, distance: &str, quantity: &str) -> Decimal {
        let input = EstimateInput::from(&form(weight, distance, quantity));
        RateCard::default()
            .estimate(&input, CurrencyCode::INR)
            .unwrap()
            .amount
    }

    #[test]
    fn test_formula() {
        // (5 + 500 * 0.5 + 50 * 0.3) * 2 = 540
        assert_eq!(cost("500", "50", "2"), Decimal::from(540));
    }

    #[test]
    fn test_blank_inputs_fall_back() {
        assert_eq!(cost("", "", ""), Decimal::from(5));
        assert_eq!(cost("abc", "-4", "0"), Decimal::from(5));
    }

    #[test]
    fn test_fractional_inputs_round_to_cents() {
        // 5 + 1.25 * 0.5 + 0.333 * 0.3 = 5.7249
        assert_eq!(cost("1.25", "0.333", "1"), Decimal::new(572, 2));
    }

    #[test]
    fn test_oversized_inputs_are_refused() {
        let rates = RateCard::default();
        let huge = form("79228162514264337593543950335", "", "2");
        assert_eq!(rates.estimate(&EstimateInput::from(&huge), CurrencyCode::INR), None);

        let many = form("1000", "", "79228162514264337593543950335");
        assert_eq!(rates.estimate(&EstimateInput::from(&many), CurrencyCode::INR), None);
    }

    #[test]
    fn test_notice_title_has_two_decimals() {
        let notice = estimate_notice(Price::whole(540, CurrencyCode::INR));
        assert_eq!(notice.title, "Estimated Cost: ₹540.00");
    }
}
