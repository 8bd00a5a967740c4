//! Shopping cart and delivery pricing.
//!
//! Lines are keyed by product id in an ordered map, so a product can only
//! ever appear once and a line disappears as soon as its quantity hits zero.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::types::{CurrencyCode, Price, ProductId};

/// One product's entry in the cart.
///
/// Display fields are copied from the catalog when the line is created and
/// are not refreshed afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub unit_price: Price,
    pub unit: String,
    pub image: String,
    /// Always at least 1 while the line exists.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            name: product.name.clone(),
            unit_price: product.price,
            unit: product.unit.clone(),
            image: product.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Delivery fee rule: free above a threshold, otherwise a flat fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryPolicy {
    /// Subtotals strictly above this ship free.
    pub free_delivery_threshold: Price,
    pub flat_fee: Price,
}

impl DeliveryPolicy {
    /// Default threshold, in whole currency units.
    pub const DEFAULT_FREE_DELIVERY_THRESHOLD: i64 = 500;
    /// Default flat fee, in whole currency units.
    pub const DEFAULT_FLAT_FEE: i64 = 49;

    #[must_use]
    pub fn new(free_delivery_threshold: Decimal, flat_fee: Decimal, currency: CurrencyCode) -> Self {
        Self {
            free_delivery_threshold: Price::new(free_delivery_threshold, currency),
            flat_fee: Price::new(flat_fee, currency),
        }
    }

    /// The 500 / 49 policy in `currency`.
    #[must_use]
    pub fn standard(currency: CurrencyCode) -> Self {
        Self::new(
            Decimal::from(Self::DEFAULT_FREE_DELIVERY_THRESHOLD),
            Decimal::from(Self::DEFAULT_FLAT_FEE),
            currency,
        )
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.flat_fee.currency_code
    }

    /// Fee charged on a cart with this subtotal.
    #[must_use]
    pub fn fee_for(&self, subtotal: Price) -> Price {
        if subtotal.amount > self.free_delivery_threshold.amount {
            Price::zero(self.currency())
        } else {
            self.flat_fee
        }
    }
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self::standard(CurrencyCode::default())
    }
}

/// Derived amounts for a cart under a delivery policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartTotals {
    pub subtotal: Price,
    pub delivery_fee: Price,
    pub total: Price,
}

impl CartTotals {
    #[must_use]
    pub const fn is_free_delivery(&self) -> bool {
        self.delivery_fee.is_zero()
    }

    /// "FREE" or the formatted fee.
    #[must_use]
    pub fn delivery_label(&self) -> String {
        if self.is_free_delivery() {
            "FREE".to_string()
        } else {
            self.delivery_fee.display()
        }
    }
}

/// The visitor's cart for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    currency: CurrencyCode,
    lines: BTreeMap<ProductId, CartLine>,
}

impl Cart {
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            lines: BTreeMap::new(),
        }
    }

    /// Add one unit of `product`, creating the line if needed.
    pub fn add(&mut self, product: &Product) -> &CartLine {
        let line = self
            .lines
            .entry(product.id)
            .and_modify(|line| line.quantity = line.quantity.saturating_add(1))
            .or_insert_with(|| CartLine::from_product(product));
        &*line
    }

    /// Change a line's quantity by `delta`, flooring at zero.
    ///
    /// A line that reaches zero is removed. Returns the new quantity, or
    /// `None` if the product was not in the cart.
    pub fn adjust_quantity(&mut self, product_id: ProductId, delta: i32) -> Option<u32> {
        let line = self.lines.get_mut(&product_id)?;
        let next = (i64::from(line.quantity) + i64::from(delta)).max(0);
        let next = u32::try_from(next).unwrap_or(u32::MAX);

        if next == 0 {
            self.lines.remove(&product_id);
        } else {
            line.quantity = next;
        }
        Some(next)
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    #[must_use]
    pub fn line(&self, product_id: ProductId) -> Option<&CartLine> {
        self.lines.get(&product_id)
    }

    /// Lines ordered by product id.
    pub fn lines(&self) -> impl Iterator<Item = &CartLine> {
        self.lines.values()
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Total units across all lines, saturating at `u32::MAX`.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .values()
            .fold(0_u32, |count, line| count.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.lines
            .values()
            .fold(Price::zero(self.currency), |sum, line| sum + line.line_total())
    }

    /// Subtotal, delivery fee and grand total under `policy`.
    #[must_use]
    pub fn totals(&self, policy: &DeliveryPolicy) -> CartTotals {
        let subtotal = self.subtotal();
        let delivery_fee = policy.fee_for(subtotal);
        CartTotals {
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        }
    }
}
