//! Static figures shown on the portal pages.
//!
//! None of these numbers are computed; they are the same for every
//! visitor.

use urbanswift_core::{CurrencyCode, PortalRole, ShipmentStatus};

/// One headline figure on a dashboard.
#[derive(Debug, Clone)]
pub struct StatCard {
    pub title: &'static str,
    pub value: String,
    /// CSS modifier for the icon colour.
    pub accent: &'static str,
}

impl StatCard {
    fn new(title: &'static str, value: impl Into<String>, accent: &'static str) -> Self {
        Self {
            title,
            value: value.into(),
            accent,
        }
    }
}

/// A row in a dashboard order list.
#[derive(Debug, Clone)]
pub struct ShipmentRow {
    pub id: &'static str,
    pub detail: String,
    pub status: ShipmentStatus,
}

/// A row in the retailer payment history.
#[derive(Debug, Clone)]
pub struct PaymentRow {
    pub date: &'static str,
    pub amount: String,
    pub status: &'static str,
}

/// Left-hand copy on a portal's sign-in page.
#[derive(Debug, Clone, Copy)]
pub struct PortalPitch {
    pub badge: &'static str,
    pub headline: &'static str,
    pub headline_accent: &'static str,
    pub blurb: &'static str,
    pub perks: [&'static str; 4],
}

impl PortalPitch {
    #[must_use]
    pub const fn for_role(role: PortalRole) -> Self {
        match role {
            PortalRole::Producer => Self {
                badge: "Producer Portal",
                headline: "Ship Directly to",
                headline_accent: "Retailers",
                blurb: "Schedule pickups, manage deliveries, and grow your distribution network with UrbanSwift.",
                perks: [
                    "Same-day pickup",
                    "Bulk handling",
                    "Real-time tracking",
                    "Verified partners",
                ],
            },
            PortalRole::Wholesaler => Self {
                badge: "Wholesaler Portal",
                headline: "Bulk Delivery",
                headline_accent: "Solutions",
                blurb: "Upload product lists, manage orders, and get competitive rates for bulk shipments.",
                perks: [
                    "Easy product upload",
                    "Scheduled routes",
                    "Volume discounts",
                    "Invoice management",
                ],
            },
            PortalRole::Retailer => Self {
                badge: "Retailer Portal",
                headline: "Order from",
                headline_accent: "Suppliers",
                blurb: "Source products from producers and wholesalers with streamlined ordering and delivery tracking.",
                perks: [
                    "Direct from producers",
                    "Wholesale options",
                    "Quick reorder",
                    "Flexible payments",
                ],
            },
        }
    }
}

fn money(currency: CurrencyCode, grouped: &str) -> String {
    format!("{}{grouped}", currency.symbol())
}

// =============================================================================
// Producer
// =============================================================================

#[must_use]
pub fn producer_stats() -> Vec<StatCard> {
    vec![
        StatCard::new("Pending Orders", "12", "orange"),
        StatCard::new("Pickup Scheduled", "5", "blue"),
        StatCard::new("In Transit", "8", "purple"),
        StatCard::new("Delivered", "156", "green"),
    ]
}

#[must_use]
pub fn producer_orders() -> Vec<ShipmentRow> {
    [
        ("ORD-001", "Fresh Mart", 24, ShipmentStatus::InTransit),
        ("ORD-002", "City Grocers", 48, ShipmentStatus::PendingPickup),
        ("ORD-003", "Metro Foods", 36, ShipmentStatus::Delivered),
        ("ORD-004", "Quick Stop", 12, ShipmentStatus::Scheduled),
    ]
    .into_iter()
    .map(|(id, retailer, items, status)| ShipmentRow {
        id,
        detail: format!("{retailer} • {items} items"),
        status,
    })
    .collect()
}

// =============================================================================
// Wholesaler
// =============================================================================

#[must_use]
pub fn wholesaler_stats(currency: CurrencyCode) -> Vec<StatCard> {
    vec![
        StatCard::new("Pending Orders", "8", "orange"),
        StatCard::new("Active Deliveries", "15", "blue"),
        StatCard::new("This Month", money(currency, "12,450"), "green"),
    ]
}

#[must_use]
pub fn wholesaler_orders() -> Vec<ShipmentRow> {
    [
        ("WHL-001", "SuperStore Chain", 12, ShipmentStatus::InTransit),
        ("WHL-002", "Corner Markets", 6, ShipmentStatus::Processing),
        ("WHL-003", "Metro Retail", 24, ShipmentStatus::Delivered),
    ]
    .into_iter()
    .map(|(id, retailer, pallets, status)| ShipmentRow {
        id,
        detail: format!("{retailer} • {pallets} pallets"),
        status,
    })
    .collect()
}

// =============================================================================
// Retailer
// =============================================================================

#[must_use]
pub fn retailer_stats(currency: CurrencyCode) -> Vec<StatCard> {
    vec![
        StatCard::new("Active Orders", "6", "orange"),
        StatCard::new("Incoming Deliveries", "4", "blue"),
        StatCard::new("This Month Spent", money(currency, "8,240"), "green"),
    ]
}

#[must_use]
pub fn retailer_orders() -> Vec<ShipmentRow> {
    [
        ("RET-001", "Fresh Farms Co.", 48, ShipmentStatus::InTransit, "Today 3PM"),
        ("RET-002", "Metro Wholesale", 120, ShipmentStatus::Processing, "Tomorrow"),
        ("RET-003", "City Producers", 36, ShipmentStatus::OutForDelivery, "Today 1PM"),
    ]
    .into_iter()
    .map(|(id, supplier, items, status, eta)| ShipmentRow {
        id,
        detail: format!("{supplier} • {items} items • ETA: {eta}"),
        status,
    })
    .collect()
}

#[must_use]
pub fn retailer_payments(currency: CurrencyCode) -> Vec<PaymentRow> {
    [
        ("Dec 5", "1,240"),
        ("Dec 3", "890"),
        ("Nov 28", "2,150"),
        ("Nov 25", "1,560"),
    ]
    .into_iter()
    .map(|(date, amount)| PaymentRow {
        date,
        amount: money(currency, amount),
        status: "Paid",
    })
    .collect()
}
