//! Flash notices carried across a POST-redirect-GET.
//!
//! Handlers queue a [`Notice`] in the session before redirecting; the next
//! page that renders takes the whole queue through the [`Notices`]
//! extractor, so each notice is shown exactly once.

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use urbanswift_core::Notice;

use crate::error::AppError;
use crate::models::session_keys;

/// Queue a notice for the next rendered page.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn push_notice(
    session: &Session,
    notice: Notice,
) -> Result<(), tower_sessions::session::Error> {
    let mut queued: Vec<Notice> = session
        .get(session_keys::NOTICES)
        .await?
        .unwrap_or_default();
    queued.push(notice);
    session.insert(session_keys::NOTICES, queued).await
}

/// Remove and return every queued notice.
///
/// # Errors
///
/// Returns an error if the session cannot be read or modified.
pub async fn take_notices(session: &Session) -> Result<Vec<Notice>, tower_sessions::session::Error> {
    if session
        .get::<Vec<Notice>>(session_keys::NOTICES)
        .await?
        .is_none()
    {
        return Ok(Vec::new());
    }
    Ok(session
        .remove::<Vec<Notice>>(session_keys::NOTICES)
        .await?
        .unwrap_or_default())
}

/// Extractor that drains the visitor's queued notices.
///
/// # Example
///
/// ```rust,ignore
/// async fn page(Notices(notices): Notices) -> impl IntoResponse {
///     PageTemplate { notices }
/// }
/// ```
pub struct Notices(pub Vec<Notice>);

impl<S> FromRequestParts<S> for Notices
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or_else(|| AppError::Internal("session layer not installed".to_string()))?;

        Ok(Self(take_notices(&session).await?))
    }
}
