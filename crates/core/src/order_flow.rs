//! Browse, checkout and tracking state machine for the ordering page.
//!
//! ```text
//!  Browsing --request_checkout--> Checkout --place_order--> Tracking
//!     ^   <----back_to_browsing------'                        |
//!     '---------------------continue_shopping-----------------'
//! ```
//!
//! Every transition is synchronous. A rejected transition leaves the flow
//! exactly as it was.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cart::{Cart, CartTotals, DeliveryPolicy};
use crate::catalog::Catalog;
use crate::checkout::{CheckoutDetails, PlacedOrder};
use crate::notice::Notice;
use crate::types::{CurrencyCode, OrderFlowStage, OrderReference, ProductId};

/// Visitor actions on the ordering page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowAction {
    AddToCart,
    AdjustQuantity,
    Checkout,
    BackToBrowsing,
    PlaceOrder,
    ContinueShopping,
}

impl fmt::Display for FlowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::AddToCart => "add to cart",
            Self::AdjustQuantity => "change quantity",
            Self::Checkout => "check out",
            Self::BackToBrowsing => "go back to shopping",
            Self::PlaceOrder => "place order",
            Self::ContinueShopping => "continue shopping",
        })
    }
}

/// A transition that was not taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderFlowError {
    /// Checkout or order placement with nothing in the cart.
    #[error("cart is empty")]
    EmptyCart,

    /// The product id is not in the catalog.
    #[error("unknown product: {0}")]
    UnknownProduct(ProductId),

    /// The action does not apply to the current stage.
    #[error("cannot {action} while {stage}")]
    InvalidTransition {
        stage: OrderFlowStage,
        action: FlowAction,
    },
}

impl OrderFlowError {
    /// Destructive notice for the visitor.
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::EmptyCart => Notice::destructive("Cart is empty", "Add items before checkout."),
            Self::UnknownProduct(_) => {
                Notice::destructive("Product unavailable", "That product is no longer listed.")
            }
            Self::InvalidTransition { .. } => {
                Notice::destructive("Nothing to do", "That step is not available right now.")
            }
        }
    }
}

/// Ordering state for one browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OrderFlow {
    stage: OrderFlowStage,
    cart: Cart,
    placed: Option<PlacedOrder>,
}

impl OrderFlow {
    /// A fresh flow in `Browsing` with an empty cart.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            stage: OrderFlowStage::Browsing,
            cart: Cart::new(currency),
            placed: None,
        }
    }

    #[must_use]
    pub const fn stage(&self) -> OrderFlowStage {
        self.stage
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The order on display while `Tracking`.
    #[must_use]
    pub const fn placed_order(&self) -> Option<&PlacedOrder> {
        self.placed.as_ref()
    }

    #[must_use]
    pub fn totals(&self, policy: &DeliveryPolicy) -> CartTotals {
        self.cart.totals(policy)
    }

    fn expect_stage(
        &self,
        expected: OrderFlowStage,
        action: FlowAction,
    ) -> Result<(), OrderFlowError> {
        if self.stage == expected {
            Ok(())
        } else {
            Err(OrderFlowError::InvalidTransition {
                stage: self.stage,
                action,
            })
        }
    }

    /// Add one unit of a catalog product.
    ///
    /// # Errors
    ///
    /// `UnknownProduct` if the id is not in `catalog`; `InvalidTransition`
    /// outside `Browsing`.
    pub fn add_to_cart(
        &mut self,
        catalog: &Catalog,
        product_id: ProductId,
    ) -> Result<Notice, OrderFlowError> {
        self.expect_stage(OrderFlowStage::Browsing, FlowAction::AddToCart)?;
        let product = catalog
            .get(product_id)
            .ok_or(OrderFlowError::UnknownProduct(product_id))?;
        self.cart.add(product);
        Ok(Notice::info("Added to cart!", product.name.clone()))
    }

    /// Change a cart line by `delta`; a line reaching zero is removed.
    ///
    /// Returns the new quantity, or `None` if the product was not in the
    /// cart.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Browsing`.
    pub fn adjust_quantity(
        &mut self,
        product_id: ProductId,
        delta: i32,
    ) -> Result<Option<u32>, OrderFlowError> {
        self.expect_stage(OrderFlowStage::Browsing, FlowAction::AdjustQuantity)?;
        Ok(self.cart.adjust_quantity(product_id, delta))
    }

    /// Browsing -> Checkout.
    ///
    /// # Errors
    ///
    /// `EmptyCart` if there is nothing to check out; `InvalidTransition`
    /// outside `Browsing`.
    pub fn request_checkout(&mut self) -> Result<(), OrderFlowError> {
        self.expect_stage(OrderFlowStage::Browsing, FlowAction::Checkout)?;
        if self.cart.is_empty() {
            return Err(OrderFlowError::EmptyCart);
        }
        self.stage = OrderFlowStage::Checkout;
        Ok(())
    }

    /// Checkout -> Browsing, keeping the cart.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Checkout`.
    pub fn back_to_browsing(&mut self) -> Result<(), OrderFlowError> {
        self.expect_stage(OrderFlowStage::Checkout, FlowAction::BackToBrowsing)?;
        self.stage = OrderFlowStage::Browsing;
        Ok(())
    }

    /// Whether an order can be placed from the current stage.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Checkout`.
    pub fn can_place_order(&self) -> Result<(), OrderFlowError> {
        self.expect_stage(OrderFlowStage::Checkout, FlowAction::PlaceOrder)
    }

    /// Checkout -> Tracking.
    ///
    /// Totals are frozen into the placed order, then the cart is cleared.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Checkout`; `EmptyCart` if the cart was
    /// emptied underneath the checkout view.
    pub fn place_order(
        &mut self,
        details: &CheckoutDetails,
        policy: &DeliveryPolicy,
        reference: OrderReference,
        placed_at: DateTime<Utc>,
    ) -> Result<Notice, OrderFlowError> {
        self.can_place_order()?;
        if self.cart.is_empty() {
            return Err(OrderFlowError::EmptyCart);
        }

        let totals = self.cart.totals(policy);
        let item_count = self.cart.item_count();
        self.placed = Some(PlacedOrder::new(
            reference,
            details.slot,
            totals,
            item_count,
            placed_at,
        ));
        self.cart.clear();
        self.stage = OrderFlowStage::Tracking;

        Ok(Notice::info("Order placed!", "Your order is being prepared."))
    }

    /// Tracking -> Browsing, forgetting the placed order.
    ///
    /// # Errors
    ///
    /// `InvalidTransition` outside `Tracking`.
    pub fn continue_shopping(&mut self) -> Result<(), OrderFlowError> {
        self.expect_stage(OrderFlowStage::Tracking, FlowAction::ContinueShopping)?;
        self.placed = None;
        self.stage = OrderFlowStage::Browsing;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::checkout::CheckoutForm;

    fn catalog() -> Catalog {
        Catalog::sample(CurrencyCode::INR)
    }

    fn details() -> CheckoutDetails {
        CheckoutForm {
            street: "12 Market Road".to_string(),
            city: "New York".to_string(),
            zip: "10001".to_string(),
            card_number: "4111".to_string(),
            card_expiry: "01/29".to_string(),
            card_cvv: "123".to_string(),
            ..CheckoutForm::default()
        }
        .validate()
        .unwrap()
    }

    fn now() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(1_760_000_000, 0).unwrap()
    }

    #[test]
    fn test_add_returns_notice_with_product_name() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        let notice = flow.add_to_cart(&catalog(), ProductId::new(2)).unwrap();
        assert_eq!(notice.title, "Added to cart!");
        assert_eq!(notice.description, "Artisan Bread Selection");
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        let err = flow.add_to_cart(&catalog(), ProductId::new(404)).unwrap_err();
        assert_eq!(err, OrderFlowError::UnknownProduct(ProductId::new(404)));
        assert!(flow.cart().is_empty());
    }

    #[test]
    fn test_checkout_refused_on_empty_cart() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        assert_eq!(flow.request_checkout(), Err(OrderFlowError::EmptyCart));
        assert_eq!(flow.stage(), OrderFlowStage::Browsing);
        assert_eq!(flow.request_checkout().unwrap_err().notice().title, "Cart is empty");
    }

    #[test]
    fn test_checkout_accepted_with_one_line() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(1)).unwrap();
        flow.request_checkout().unwrap();
        assert_eq!(flow.stage(), OrderFlowStage::Checkout);
    }

    #[test]
    fn test_cart_is_frozen_outside_browsing() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(1)).unwrap();
        flow.request_checkout().unwrap();
        let before = flow.clone();

        assert!(matches!(
            flow.add_to_cart(&catalog(), ProductId::new(1)),
            Err(OrderFlowError::InvalidTransition { .. })
        ));
        assert!(flow.adjust_quantity(ProductId::new(1), -1).is_err());
        assert_eq!(flow, before);
    }

    #[test]
    fn test_can_place_order_only_in_checkout() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(1)).unwrap();
        assert!(matches!(
            flow.can_place_order(),
            Err(OrderFlowError::InvalidTransition {
                stage: OrderFlowStage::Browsing,
                action: FlowAction::PlaceOrder,
            })
        ));
        flow.request_checkout().unwrap();
        assert!(flow.can_place_order().is_ok());
    }

    #[test]
    fn test_back_to_browsing_keeps_cart() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(1)).unwrap();
        flow.request_checkout().unwrap();
        flow.back_to_browsing().unwrap();
        assert_eq!(flow.stage(), OrderFlowStage::Browsing);
        assert_eq!(flow.cart().line_count(), 1);
    }

    #[test]
    fn test_full_cycle() {
        let policy = DeliveryPolicy::default();
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(4)).unwrap();
        flow.add_to_cart(&catalog(), ProductId::new(6)).unwrap();
        flow.request_checkout().unwrap();

        let notice = flow
            .place_order(&details(), &policy, OrderReference::from_number(7829), now())
            .unwrap();
        assert_eq!(notice.title, "Order placed!");
        assert_eq!(flow.stage(), OrderFlowStage::Tracking);
        assert!(flow.cart().is_empty());

        let placed = flow.placed_order().unwrap();
        assert_eq!(placed.reference.as_str(), "ORD-7829");
        assert_eq!(placed.item_count, 2);
        // 320 + 285 = 605 ships free
        assert_eq!(placed.totals.total.amount, Decimal::from(605));
        assert_eq!(placed.address, PlacedOrder::ADDRESS);

        flow.continue_shopping().unwrap();
        assert_eq!(flow.stage(), OrderFlowStage::Browsing);
        assert!(flow.placed_order().is_none());
    }

    #[test]
    fn test_place_order_only_from_checkout() {
        let policy = DeliveryPolicy::default();
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(1)).unwrap();
        let err = flow
            .place_order(&details(), &policy, OrderReference::from_number(1), now())
            .unwrap_err();
        assert_eq!(
            err,
            OrderFlowError::InvalidTransition {
                stage: OrderFlowStage::Browsing,
                action: FlowAction::PlaceOrder,
            }
        );
        assert_eq!(flow.cart().line_count(), 1);
    }

    #[test]
    fn test_continue_shopping_only_from_tracking() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        assert!(flow.continue_shopping().is_err());
        assert!(flow.back_to_browsing().is_err());
        assert_eq!(flow.stage(), OrderFlowStage::Browsing);
    }

    #[test]
    fn test_flow_survives_json_round_trip() {
        let mut flow = OrderFlow::new(CurrencyCode::INR);
        flow.add_to_cart(&catalog(), ProductId::new(3)).unwrap();
        flow.request_checkout().unwrap();
        let value = serde_json::to_value(&flow).unwrap();
        let back: OrderFlow = serde_json::from_value(value).unwrap();
        assert_eq!(back, flow);
    }
}
