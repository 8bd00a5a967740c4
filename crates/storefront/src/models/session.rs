//! Session-related types.
//!
//! Every piece of visitor state is stored under one of these keys in the
//! tower-sessions session.

use urbanswift_core::PortalRole;

/// Session keys for visitor state.
pub mod keys {
    /// Key for the ordering page's `OrderFlow`.
    pub const ORDER_FLOW: &str = "order_flow";

    /// Key for queued notices awaiting the next rendered page.
    pub const NOTICES: &str = "notices";

    /// Key for the retailer's chosen order source.
    pub const RETAILER_SOURCE: &str = "retailer_source";

    /// Key for the visitor's portal product list.
    pub const LISTINGS: &str = "listings";

    /// Prefix for per-role `PortalSession` keys (`portal:producer`, ...).
    pub const PORTAL_PREFIX: &str = "portal:";
}

/// Session key holding the signed-in context for `role`.
#[must_use]
pub fn portal_key(role: PortalRole) -> String {
    format!("{}{}", keys::PORTAL_PREFIX, role.slug())
}
