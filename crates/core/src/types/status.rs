//! Status enums for the ordering flow and portal dashboards.

use serde::{Deserialize, Serialize};

/// Which view of the ordering page is active for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderFlowStage {
    /// Product grid and cart sidebar.
    #[default]
    Browsing,
    /// Delivery address, slot and payment form.
    Checkout,
    /// Order confirmation with delivery progress.
    Tracking,
}

impl std::fmt::Display for OrderFlowStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Browsing => write!(f, "browsing"),
            Self::Checkout => write!(f, "checkout"),
            Self::Tracking => write!(f, "tracking"),
        }
    }
}

/// Steps of the delivery progress bar shown after an order is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryProgress {
    OrderPlaced,
    Preparing,
    OnTheWay,
    Delivered,
}

impl DeliveryProgress {
    /// All steps in display order.
    pub const ALL: [Self; 4] = [
        Self::OrderPlaced,
        Self::Preparing,
        Self::OnTheWay,
        Self::Delivered,
    ];

    /// Label shown under the step marker.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::OrderPlaced => "Order Placed",
            Self::Preparing => "Preparing",
            Self::OnTheWay => "On the Way",
            Self::Delivered => "Delivered",
        }
    }

    /// One-based position in the progress bar.
    #[must_use]
    pub const fn position(&self) -> u8 {
        match self {
            Self::OrderPlaced => 1,
            Self::Preparing => 2,
            Self::OnTheWay => 3,
            Self::Delivered => 4,
        }
    }
}

/// Shipment status badges on the portal dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentStatus {
    Scheduled,
    PendingPickup,
    Processing,
    InTransit,
    OutForDelivery,
    Delivered,
}

impl ShipmentStatus {
    /// Badge text.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::PendingPickup => "Pending Pickup",
            Self::Processing => "Processing",
            Self::InTransit => "In Transit",
            Self::OutForDelivery => "Out for Delivery",
            Self::Delivered => "Delivered",
        }
    }

    /// CSS modifier used for the badge colour.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self {
            Self::Scheduled => "badge-purple",
            Self::PendingPickup | Self::Processing => "badge-orange",
            Self::InTransit => "badge-blue",
            Self::OutForDelivery | Self::Delivered => "badge-green",
        }
    }
}

impl std::fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
