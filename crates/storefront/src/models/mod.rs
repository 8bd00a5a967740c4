//! View-side models for the storefront.
//!
//! Domain types live in `urbanswift-core`; this module holds what only the
//! web layer needs: session keys and the static dashboard fixtures.

pub mod dashboard;
pub mod session;

pub use session::keys as session_keys;
