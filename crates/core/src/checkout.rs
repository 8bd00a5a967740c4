//! Checkout form, delivery slots and the placed-order record.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cart::CartTotals;
use crate::forms::{self, FieldError};
use crate::types::{DeliveryProgress, OrderReference};

/// Delivery window picked at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DeliverySlot {
    #[default]
    Asap,
    Today,
    Tomorrow,
}

impl DeliverySlot {
    pub const ALL: [Self; 3] = [Self::Asap, Self::Today, Self::Tomorrow];

    /// Form value.
    #[must_use]
    pub const fn value(&self) -> &'static str {
        match self {
            Self::Asap => "asap",
            Self::Today => "scheduled",
            Self::Tomorrow => "tomorrow",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Asap => "ASAP",
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
        }
    }

    /// Time window shown under the label.
    #[must_use]
    pub const fn window(&self) -> &'static str {
        match self {
            Self::Asap => "30-45 min",
            Self::Today => "2-4 PM",
            Self::Tomorrow => "10-12 AM",
        }
    }
}

impl fmt::Display for DeliverySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DeliverySlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|slot| slot.value() == s.trim())
            .ok_or_else(|| format!("unknown delivery slot: {s}"))
    }
}

/// Raw checkout form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckoutForm {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub apartment: Option<String>,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default)]
    pub card_number: String,
    #[serde(default)]
    pub card_expiry: String,
    #[serde(default)]
    pub card_cvv: String,
    #[serde(default)]
    pub slot: Option<String>,
}

impl CheckoutForm {
    /// Apply the required-field checks.
    ///
    /// Card fields are opaque: they must be present but are not checked
    /// for length, digits or a checksum. An unknown or missing slot falls
    /// back to ASAP.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] in form order.
    pub fn validate(&self) -> Result<CheckoutDetails, FieldError> {
        let address = DeliveryAddress {
            street: forms::required("Street Address", &self.street)?,
            apartment: forms::optional(self.apartment.as_deref()),
            city: forms::required("City", &self.city)?,
            zip: forms::required("ZIP Code", &self.zip)?,
        };
        let slot = self
            .slot
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();
        let payment = CardDetails {
            number: forms::required("Card Number", &self.card_number)?,
            expiry: forms::required("MM/YY", &self.card_expiry)?,
            cvv: forms::required("CVV", &self.card_cvv)?,
        };

        Ok(CheckoutDetails {
            address,
            slot,
            payment,
        })
    }
}

/// Delivery address as typed by the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryAddress {
    pub street: String,
    pub apartment: Option<String>,
    pub city: String,
    pub zip: String,
}

/// Card entry. Never persisted, never logged.
#[derive(Clone, PartialEq, Eq)]
pub struct CardDetails {
    pub number: String,
    pub expiry: String,
    pub cvv: String,
}

impl fmt::Debug for CardDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CardDetails")
            .field("number", &"[REDACTED]")
            .field("expiry", &"[REDACTED]")
            .field("cvv", &"[REDACTED]")
            .finish()
    }
}

/// A checkout form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutDetails {
    pub address: DeliveryAddress,
    pub slot: DeliverySlot,
    pub payment: CardDetails,
}

/// One marker in the tracking progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub step: DeliveryProgress,
    /// Already completed.
    pub done: bool,
    /// The step in progress.
    pub current: bool,
}

/// The order shown on the tracking view.
///
/// ETA and address are canned display strings; nothing is geocoded or
/// scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub reference: OrderReference,
    pub slot: DeliverySlot,
    pub totals: CartTotals,
    pub item_count: u32,
    pub eta: String,
    pub address: String,
    pub progress: DeliveryProgress,
    pub placed_at: DateTime<Utc>,
}

impl PlacedOrder {
    pub const ETA: &'static str = "Today, 2:30 PM - 3:00 PM";
    pub const ADDRESS: &'static str = "123 Main St, Apt 4B, New York";

    #[must_use]
    pub fn new(
        reference: OrderReference,
        slot: DeliverySlot,
        totals: CartTotals,
        item_count: u32,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            reference,
            slot,
            totals,
            item_count,
            eta: Self::ETA.to_string(),
            address: Self::ADDRESS.to_string(),
            progress: DeliveryProgress::Preparing,
            placed_at,
        }
    }

    /// Progress bar markers relative to the current step.
    #[must_use]
    pub fn progress_steps(&self) -> Vec<ProgressStep> {
        DeliveryProgress::ALL
            .into_iter()
            .map(|step| ProgressStep {
                step,
                done: step < self.progress,
                current: step == self.progress,
            })
            .collect()
    }
}
