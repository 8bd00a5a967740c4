//! Type-safe price representation using decimal arithmetic.

use core::fmt;
use core::ops::Add;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., rupees, not paise).
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency_code)
    }

    /// Create a price from a whole number of currency units.
    #[must_use]
    pub fn whole(units: i64, currency_code: CurrencyCode) -> Self {
        Self::new(Decimal::from(units), currency_code)
    }

    /// Whether the amount is exactly zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// This price multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Self {
        Self::new(self.amount * Decimal::from(quantity), self.currency_code)
    }

    /// Format for display: whole amounts without decimals ("₹249"),
    /// fractional amounts with two ("₹12.50").
    #[must_use]
    pub fn display(&self) -> String {
        if self.amount.fract().is_zero() {
            format!("{}{}", self.currency_code.symbol(), self.amount.trunc())
        } else {
            self.display_exact()
        }
    }

    /// Format for display with exactly two decimal places ("₹49.00").
    #[must_use]
    pub fn display_exact(&self) -> String {
        format!("{}{:.2}", self.currency_code.symbol(), self.amount.round_dp(2))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl Add for Price {
    type Output = Self;

    /// Sums two amounts. Prices in one cart always share the cart's
    /// currency; the left-hand currency wins.
    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount + rhs.amount, self.currency_code)
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    INR,
    USD,
    EUR,
    GBP,
}

impl CurrencyCode {
    /// Display symbol for the currency.
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::INR => "₹",
            Self::USD => "$",
            Self::EUR => "€",
            Self::GBP => "£",
        }
    }
}

impl FromStr for CurrencyCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "INR" => Ok(Self::INR),
            "USD" => Ok(Self::USD),
            "EUR" => Ok(Self::EUR),
            "GBP" => Ok(Self::GBP),
            other => Err(format!("unsupported currency: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_whole_amount() {
        assert_eq!(Price::whole(249, CurrencyCode::INR).display(), "₹249");
    }

    #[test]
    fn test_display_fractional_amount() {
        let price = Price::new(Decimal::new(1250, 2), CurrencyCode::USD);
        assert_eq!(price.display(), "$12.50");
    }

    #[test]
    fn test_display_exact() {
        assert_eq!(Price::whole(49, CurrencyCode::INR).display_exact(), "₹49.00");
    }

    #[test]
    fn test_times_and_add() {
        let line = Price::whole(125, CurrencyCode::INR).times(3);
        let total = line + Price::whole(49, CurrencyCode::INR);
        assert_eq!(total.amount, Decimal::from(424));
    }

    #[test]
    fn test_currency_from_str() {
        assert_eq!("inr".parse::<CurrencyCode>(), Ok(CurrencyCode::INR));
        assert_eq!(" GBP ".parse::<CurrencyCode>(), Ok(CurrencyCode::GBP));
        assert!("JPY".parse::<CurrencyCode>().is_err());
    }
}
