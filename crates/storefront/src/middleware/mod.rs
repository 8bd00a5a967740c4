//! HTTP middleware stack for the storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded on the span, echoed in the response)
//! 4. Session layer (tower-sessions with `MemoryStore`)
//! 5. Security headers
//!
//! Notices and portal sign-ins are read from the session by extractors
//! rather than by a layer.

pub mod notices;
pub mod portal;
pub mod request_id;
pub mod security_headers;
pub mod session;

pub use notices::{Notices, push_notice, take_notices};
pub use portal::{OptionalPortal, RequirePortal, clear_portal, current_portal, set_portal};
pub use request_id::request_id_middleware;
pub use security_headers::security_headers_middleware;
pub use session::create_session_layer;
