//! Producer, wholesaler and retailer portal handlers.
//!
//! `GET /{role}` shows the sign-in form until the visitor signs in to that
//! portal, then the role's dashboard. Dashboard buttons are stubs that only
//! queue a confirmation notice, apart from the wholesaler cost estimator
//! and the retailer's order-source choice.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use urbanswift_core::estimate::{EstimateInput, estimate_notice, estimate_out_of_range_notice};
use urbanswift_core::{
    AuthMode, EstimateForm, Notice, OrderSource, PortalAuthForm, PortalRole, PortalSession,
};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{
    Notices, OptionalPortal, RequirePortal, clear_portal, push_notice, set_portal,
};
use crate::models::dashboard::{self, PaymentRow, PortalPitch, ShipmentRow, StatCard};
use crate::models::session_keys;
use crate::state::AppState;

/// `?mode=register` switches the sign-in page to the registration form.
#[derive(Debug, Default, Deserialize)]
pub struct PortalQuery {
    #[serde(default)]
    pub mode: Option<String>,
}

impl PortalQuery {
    fn auth_mode(&self) -> AuthMode {
        match self.mode.as_deref() {
            Some("register") => AuthMode::Register,
            _ => AuthMode::Login,
        }
    }
}

/// Sign-in page for `role` showing the `mode` form.
fn auth_path(role: PortalRole, mode: AuthMode) -> String {
    match mode {
        AuthMode::Login => format!("/{}", role.slug()),
        AuthMode::Register => format!("/{}?mode=register", role.slug()),
    }
}

/// Retailer order-source form data.
#[derive(Debug, Deserialize)]
pub struct SourceForm {
    pub source: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Sign-in / registration page for one portal.
#[derive(Template, WebTemplate)]
#[template(path = "portal/auth.html")]
pub struct AuthTemplate {
    pub notices: Vec<Notice>,
    pub role: PortalRole,
    pub mode: AuthMode,
    /// Link to the other form.
    pub toggle_href: String,
    pub pitch: PortalPitch,
}

#[derive(Template, WebTemplate)]
#[template(path = "portal/producer.html")]
pub struct ProducerTemplate {
    pub notices: Vec<Notice>,
    pub portal: PortalSession,
    pub stats: Vec<StatCard>,
    pub orders: Vec<ShipmentRow>,
}

#[derive(Template, WebTemplate)]
#[template(path = "portal/wholesaler.html")]
pub struct WholesalerTemplate {
    pub notices: Vec<Notice>,
    pub portal: PortalSession,
    pub stats: Vec<StatCard>,
    pub orders: Vec<ShipmentRow>,
}

#[derive(Template, WebTemplate)]
#[template(path = "portal/retailer.html")]
pub struct RetailerTemplate {
    pub notices: Vec<Notice>,
    pub portal: PortalSession,
    /// Slug of the chosen source, empty until one is picked.
    pub source: &'static str,
    pub stats: Vec<StatCard>,
    pub orders: Vec<ShipmentRow>,
    pub payments: Vec<PaymentRow>,
}

// =============================================================================
// Pages
// =============================================================================

/// Sign-in form or dashboard.
///
/// GET /{role}?mode=register
#[instrument(skip(state, session, notices, portal), fields(role = %portal.role))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Notices(notices): Notices,
    portal: OptionalPortal,
    Query(query): Query<PortalQuery>,
) -> Result<Response> {
    let OptionalPortal { role, signed_in } = portal;
    let currency = state.config().currency;

    let Some(portal) = signed_in else {
        return Ok(AuthTemplate {
            notices,
            role,
            mode: query.auth_mode(),
            toggle_href: auth_path(role, query.auth_mode().toggled()),
            pitch: PortalPitch::for_role(role),
        }
        .into_response());
    };

    let page = match role {
        PortalRole::Producer => ProducerTemplate {
            notices,
            portal,
            stats: dashboard::producer_stats(),
            orders: dashboard::producer_orders(),
        }
        .into_response(),
        PortalRole::Wholesaler => WholesalerTemplate {
            notices,
            portal,
            stats: dashboard::wholesaler_stats(currency),
            orders: dashboard::wholesaler_orders(),
        }
        .into_response(),
        PortalRole::Retailer => {
            let source = session
                .get::<OrderSource>(session_keys::RETAILER_SOURCE)
                .await?;
            RetailerTemplate {
                notices,
                portal,
                source: source.map_or("", |s| s.slug()),
                stats: dashboard::retailer_stats(currency),
                orders: dashboard::retailer_orders(),
                payments: dashboard::retailer_payments(currency),
            }
            .into_response()
        }
    };

    Ok(page)
}

// =============================================================================
// Sign-in
// =============================================================================

async fn sign_in(
    session: &Session,
    role: PortalRole,
    mode: AuthMode,
    form: &PortalAuthForm,
) -> Result<Redirect> {
    match form.sign_in(role, mode, Utc::now()) {
        Ok(portal) => {
            set_portal(session, &portal).await?;
            push_notice(session, portal.welcome_notice()).await?;
            tracing::info!(role = %role, registered = portal.registered, "Portal sign-in");
            Ok(Redirect::to(&format!("/{}", role.slug())))
        }
        Err(err) => {
            tracing::debug!(role = %role, field = err.field(), "Portal sign-in refused");
            push_notice(session, err.notice()).await?;
            Ok(Redirect::to(&auth_path(role, mode)))
        }
    }
}

/// POST /{role}/login
#[instrument(skip(session, portal, form), fields(role = %portal.role))]
pub async fn login(
    session: Session,
    portal: OptionalPortal,
    Form(form): Form<PortalAuthForm>,
) -> Result<Redirect> {
    sign_in(&session, portal.role, AuthMode::Login, &form).await
}

/// POST /{role}/register
#[instrument(skip(session, portal, form), fields(role = %portal.role))]
pub async fn register(
    session: Session,
    portal: OptionalPortal,
    Form(form): Form<PortalAuthForm>,
) -> Result<Redirect> {
    sign_in(&session, portal.role, AuthMode::Register, &form).await
}

/// POST /{role}/logout
#[instrument(skip(session, portal), fields(role = %portal.role))]
pub async fn logout(session: Session, portal: OptionalPortal) -> Result<Redirect> {
    let role = portal.role;
    if clear_portal(&session, role).await?.is_some() {
        push_notice(
            &session,
            Notice::info(
                "Signed out",
                format!("You've been logged out of your {} account.", role.slug()),
            ),
        )
        .await?;
    }
    Ok(Redirect::to(&format!("/{}", role.slug())))
}

// =============================================================================
// Dashboard actions
// =============================================================================

async fn acknowledge(session: &Session, role: PortalRole, notice: Notice) -> Result<Redirect> {
    push_notice(session, notice).await?;
    Ok(Redirect::to(&format!("/{}", role.slug())))
}

/// POST /producer/pickup
#[instrument(skip_all)]
pub async fn schedule_pickup(
    session: Session,
    RequirePortal(portal): RequirePortal,
) -> Result<Redirect> {
    tracing::info!(email = %portal.email, "Pickup requested");
    acknowledge(
        &session,
        portal.role,
        Notice::info(
            "Pickup Scheduled!",
            "Our team will arrive at your location within 2 hours.",
        ),
    )
    .await
}

/// POST /wholesaler/upload
#[instrument(skip_all)]
pub async fn upload_product_list(
    session: Session,
    RequirePortal(portal): RequirePortal,
) -> Result<Redirect> {
    acknowledge(
        &session,
        portal.role,
        Notice::info(
            "Product list uploaded!",
            "Your catalog has been updated successfully.",
        ),
    )
    .await
}

/// POST /wholesaler/delivery
#[instrument(skip_all)]
pub async fn request_delivery(
    session: Session,
    RequirePortal(portal): RequirePortal,
) -> Result<Redirect> {
    tracing::info!(email = %portal.email, "Delivery requested");
    acknowledge(
        &session,
        portal.role,
        Notice::info(
            "Delivery requested!",
            "We'll contact you shortly to confirm the details.",
        ),
    )
    .await
}

/// Quote a bulk delivery.
///
/// POST /wholesaler/estimate
#[instrument(skip(state, session, portal))]
pub async fn estimate(
    State(state): State<AppState>,
    session: Session,
    RequirePortal(portal): RequirePortal,
    Form(form): Form<EstimateForm>,
) -> Result<Redirect> {
    let input = EstimateInput::from(&form);
    let Some(cost) = state.rates().estimate(&input, state.config().currency) else {
        tracing::debug!(?input, "Delivery estimate out of range");
        return acknowledge(&session, portal.role, estimate_out_of_range_notice()).await;
    };
    tracing::debug!(cost = %cost, "Delivery estimate");
    acknowledge(&session, portal.role, estimate_notice(cost)).await
}

/// POST /retailer/reorder
#[instrument(skip_all)]
pub async fn quick_reorder(
    session: Session,
    RequirePortal(portal): RequirePortal,
) -> Result<Redirect> {
    acknowledge(
        &session,
        portal.role,
        Notice::info(
            "Reorder placed!",
            "Your last order has been duplicated and submitted.",
        ),
    )
    .await
}

/// Remember whether the retailer is sourcing from producers or
/// wholesalers.
///
/// POST /retailer/source
#[instrument(skip(session, portal))]
pub async fn choose_source(
    session: Session,
    RequirePortal(portal): RequirePortal,
    Form(form): Form<SourceForm>,
) -> Result<Redirect> {
    let source: OrderSource = form.source.parse().map_err(AppError::BadRequest)?;
    session
        .insert(session_keys::RETAILER_SOURCE, source)
        .await?;
    Ok(Redirect::to(&format!("/{}", portal.role.slug())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_selects_register_mode() {
        let query = PortalQuery {
            mode: Some("register".to_string()),
        };
        assert_eq!(query.auth_mode(), AuthMode::Register);
        assert_eq!(PortalQuery::default().auth_mode(), AuthMode::Login);
    }

    #[test]
    fn test_auth_path_per_mode() {
        let role = PortalRole::Wholesaler;
        assert_eq!(auth_path(role, AuthMode::Login), "/wholesaler");
        assert_eq!(
            auth_path(role, AuthMode::Login.toggled()),
            "/wholesaler?mode=register"
        );
    }
}
