//! HTTP route handlers for the UrbanSwift site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - About page
//! GET  /contact                - Contact page
//! POST /contact                - Send a contact message
//! GET  /health                 - Health check (added in `app`)
//!
//! # Ordering
//! GET  /order                  - Browse, checkout or tracking view
//! POST /order/cart/add         - Add one unit of a product
//! POST /order/cart/adjust      - Step a cart line by +1/-1
//! POST /order/checkout         - Browsing -> Checkout
//! POST /order/back             - Checkout -> Browsing
//! POST /order/place            - Checkout -> Tracking
//! POST /order/continue         - Tracking -> Browsing
//!
//! # Product lists
//! GET  /products               - Product list (?source=&edit=)
//! POST /products               - Add a product
//! POST /products/{id}          - Save an edited product
//! POST /products/{id}/delete   - Remove a product
//!
//! # Portals ({role} is producer, wholesaler or retailer)
//! GET  /{role}                 - Sign-in form or dashboard
//! POST /{role}/login           - Sign in
//! POST /{role}/register        - Register
//! POST /{role}/logout          - Sign out
//! POST /producer/pickup        - Schedule a pickup
//! POST /wholesaler/upload      - Upload a product list
//! POST /wholesaler/delivery    - Request a delivery
//! POST /wholesaler/estimate    - Delivery cost estimate
//! POST /retailer/reorder       - Quick reorder
//! POST /retailer/source        - Choose producers or wholesalers
//! ```

pub mod about;
pub mod contact;
pub mod home;
pub mod listings;
pub mod order;
pub mod portals;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the ordering routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order::show))
        .route("/cart/add", post(order::add_to_cart))
        .route("/cart/adjust", post(order::adjust_quantity))
        .route("/checkout", post(order::checkout))
        .route("/back", post(order::back))
        .route("/place", post(order::place))
        .route("/continue", post(order::continue_shopping))
}

/// Create the product list routes router.
pub fn listing_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(listings::index).post(listings::create))
        .route("/{id}", post(listings::update))
        .route("/{id}/delete", post(listings::delete))
}

/// Create the portal routes router.
///
/// Static dashboard action paths win over the `{role}` captures.
pub fn portal_routes() -> Router<AppState> {
    Router::new()
        .route("/{role}", get(portals::show))
        .route("/{role}/login", post(portals::login))
        .route("/{role}/register", post(portals::register))
        .route("/{role}/logout", post(portals::logout))
        .route("/producer/pickup", post(portals::schedule_pickup))
        .route("/wholesaler/upload", post(portals::upload_product_list))
        .route("/wholesaler/delivery", post(portals::request_delivery))
        .route("/wholesaler/estimate", post(portals::estimate))
        .route("/retailer/reorder", post(portals::quick_reorder))
        .route("/retailer/source", post(portals::choose_source))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Marketing pages
        .route("/", get(home::home))
        .route("/about", get(about::about))
        .route("/contact", get(contact::show).post(contact::submit))
        // Ordering
        .nest("/order", order_routes())
        // Product lists
        .nest("/products", listing_routes())
        // Portals
        .merge(portal_routes())
}
