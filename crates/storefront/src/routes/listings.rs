//! Portal product list handlers.
//!
//! Each visitor edits their own copy of the list, kept in the session and
//! seeded with the sample listings on first visit.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use urbanswift_core::{
    Listing, ListingBook, ListingError, ListingForm, ListingId, Notice, PortalRole,
};

use crate::error::{AppError, Result};
use crate::filters;
use crate::middleware::{Notices, push_notice};
use crate::models::session_keys;
use crate::state::AppState;

/// `?source=` picks the portal the back link returns to.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    #[serde(default)]
    pub source: Option<String>,
}

impl ListingQuery {
    fn portal(&self) -> PortalRole {
        self.source
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(PortalRole::Retailer)
    }
}

/// Product list page.
#[derive(Template, WebTemplate)]
#[template(path = "listings.html")]
pub struct ListingsTemplate {
    pub notices: Vec<Notice>,
    pub source: PortalRole,
    pub rows: Vec<ListingRow>,
    pub currency_symbol: &'static str,
}

/// One table row; `editing` opens the inline edit form.
pub struct ListingRow {
    pub listing: Listing,
    pub editing: bool,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListingPageQuery {
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub edit: Option<i32>,
}

async fn load_book(session: &Session, state: &AppState) -> Result<ListingBook> {
    Ok(session
        .get::<ListingBook>(session_keys::LISTINGS)
        .await?
        .unwrap_or_else(|| ListingBook::sample(state.config().currency)))
}

/// Save the book on success, queue the outcome notice either way.
async fn settle(
    session: &Session,
    book: &ListingBook,
    outcome: std::result::Result<Notice, ListingError>,
) -> Result<()> {
    match outcome {
        Ok(notice) => {
            session.insert(session_keys::LISTINGS, book).await?;
            push_notice(session, notice).await?;
        }
        Err(ListingError::NotFound(id)) => {
            return Err(AppError::NotFound(format!("listing {id}")));
        }
        Err(err) => {
            push_notice(session, err.notice()).await?;
        }
    }
    Ok(())
}

fn list_location(query: &ListingQuery) -> String {
    format!("/products?source={}", query.portal().slug())
}

/// GET /products?source=&edit=
#[instrument(skip(state, session, notices))]
pub async fn index(
    State(state): State<AppState>,
    session: Session,
    Notices(notices): Notices,
    Query(query): Query<ListingPageQuery>,
) -> Result<ListingsTemplate> {
    let book = load_book(&session, &state).await?;
    let source = ListingQuery {
        source: query.source,
    }
    .portal();

    let editing = query.edit.map(ListingId::new);

    Ok(ListingsTemplate {
        notices,
        source,
        rows: book
            .listings()
            .iter()
            .map(|listing| ListingRow {
                editing: Some(listing.id) == editing,
                listing: listing.clone(),
            })
            .collect(),
        currency_symbol: state.config().currency.symbol(),
    })
}

/// POST /products
#[instrument(skip(state, session))]
pub async fn create(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<ListingQuery>,
    Form(form): Form<ListingForm>,
) -> Result<Redirect> {
    let mut book = load_book(&session, &state).await?;
    let outcome = book.add(&form);
    settle(&session, &book, outcome).await?;
    Ok(Redirect::to(&list_location(&query)))
}

/// POST /products/{id}
#[instrument(skip(state, session))]
pub async fn update(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(query): Query<ListingQuery>,
    Form(form): Form<ListingForm>,
) -> Result<Redirect> {
    let mut book = load_book(&session, &state).await?;
    let outcome = book.update(ListingId::new(id), &form);
    settle(&session, &book, outcome).await?;
    Ok(Redirect::to(&list_location(&query)))
}

/// POST /products/{id}/delete
#[instrument(skip(state, session))]
pub async fn delete(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Query(query): Query<ListingQuery>,
) -> Result<Redirect> {
    let mut book = load_book(&session, &state).await?;
    let outcome = book.remove(ListingId::new(id));
    settle(&session, &book, outcome).await?;
    Ok(Redirect::to(&list_location(&query)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_defaults_to_retailer() {
        assert_eq!(ListingQuery::default().portal(), PortalRole::Retailer);
        let query = ListingQuery {
            source: Some("wholesaler".to_string()),
        };
        assert_eq!(query.portal(), PortalRole::Wholesaler);
        assert_eq!(list_location(&query), "/products?source=wholesaler");
    }

    #[test]
    fn test_unknown_source_falls_back() {
        let query = ListingQuery {
            source: Some("warehouse".to_string()),
        };
        assert_eq!(query.portal(), PortalRole::Retailer);
    }
}
