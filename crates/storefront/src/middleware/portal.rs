//! Portal sign-in extractors.
//!
//! The portal a request belongs to is the first path segment (`/producer`,
//! `/wholesaler/estimate`, ...). Each role's [`PortalSession`] is stored
//! under its own session key, so signing in to one portal says nothing
//! about the others.

use axum::{
    extract::FromRequestParts,
    http::request::Parts,
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use urbanswift_core::{PortalRole, PortalSession};

use crate::error::AppError;
use crate::models::session::portal_key;

/// Portal named by the first segment of `path`, if any.
#[must_use]
pub fn role_from_path(path: &str) -> Option<PortalRole> {
    path.trim_start_matches('/')
        .split('/')
        .next()
        .and_then(|segment| segment.parse().ok())
}

fn request_role(parts: &Parts) -> Result<PortalRole, AppError> {
    role_from_path(parts.uri.path())
        .ok_or_else(|| AppError::NotFound(format!("no portal at {}", parts.uri.path())))
}

fn request_session(parts: &Parts) -> Result<Session, AppError> {
    parts
        .extensions
        .get::<Session>()
        .cloned()
        .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))
}

/// Extractor for a portal page that works signed in or out.
///
/// # Example
///
/// ```rust,ignore
/// async fn show(OptionalPortal { role, signed_in }: OptionalPortal) -> impl IntoResponse {
///     match signed_in {
///         Some(portal) => dashboard(portal),
///         None => sign_in_form(role),
///     }
/// }
/// ```
pub struct OptionalPortal {
    pub role: PortalRole,
    pub signed_in: Option<PortalSession>,
}

impl<S> FromRequestParts<S> for OptionalPortal
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = request_role(parts)?;
        let session = request_session(parts)?;
        let signed_in = current_portal(&session, role).await?;

        Ok(Self { role, signed_in })
    }
}

/// Extractor for dashboard actions that need a signed-in portal.
///
/// Visitors who are not signed in are sent back to the portal's sign-in
/// page.
pub struct RequirePortal(pub PortalSession);

/// Why [`RequirePortal`] turned a request away.
pub enum PortalRejection {
    /// Redirect to the portal's sign-in page.
    SignInRequired(PortalRole),
    Error(AppError),
}

impl IntoResponse for PortalRejection {
    fn into_response(self) -> Response {
        match self {
            Self::SignInRequired(role) => Redirect::to(&format!("/{}", role.slug())).into_response(),
            Self::Error(err) => err.into_response(),
        }
    }
}

impl From<AppError> for PortalRejection {
    fn from(err: AppError) -> Self {
        Self::Error(err)
    }
}

impl<S> FromRequestParts<S> for RequirePortal
where
    S: Send + Sync,
{
    type Rejection = PortalRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let role = request_role(parts)?;
        let session = request_session(parts)?;

        current_portal(&session, role)
            .await
            .map_err(AppError::from)?
            .map(Self)
            .ok_or(PortalRejection::SignInRequired(role))
    }
}

/// Signed-in context for `role`, if any.
///
/// # Errors
///
/// Returns an error if the session cannot be read.
pub async fn current_portal(
    session: &Session,
    role: PortalRole,
) -> Result<Option<PortalSession>, tower_sessions::session::Error> {
    session.get(&portal_key(role)).await
}

/// Store a freshly opened portal session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn set_portal(
    session: &Session,
    portal: &PortalSession,
) -> Result<(), tower_sessions::session::Error> {
    // New privilege level, new session id
    session.cycle_id().await?;
    session.insert(&portal_key(portal.role), portal).await
}

/// Sign out of one portal, leaving the others and the cart alone.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn clear_portal(
    session: &Session,
    role: PortalRole,
) -> Result<Option<PortalSession>, tower_sessions::session::Error> {
    session.remove(&portal_key(role)).await
}
