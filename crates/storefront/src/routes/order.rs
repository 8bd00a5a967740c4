//! Ordering page route handlers.
//!
//! `GET /order` renders whichever view the visitor's `OrderFlow` is in;
//! every button on those views is a form that POSTs a transition and is
//! redirected back. The flow is stored in the session and only written back
//! when a transition succeeds.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;
use rand::Rng;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use urbanswift_core::checkout::ProgressStep;
use urbanswift_core::{
    CartLine, CartTotals, CategoryFilter, CheckoutForm, DeliverySlot, Notice, OrderFlow,
    OrderFlowError, OrderFlowStage, OrderReference, PlacedOrder, Product, ProductId,
};

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::{Notices, push_notice};
use crate::models::session_keys;
use crate::state::AppState;

// =============================================================================
// Session Helpers
// =============================================================================

/// Load the visitor's flow, starting a fresh one on first visit.
async fn load_flow(session: &Session, state: &AppState) -> Result<OrderFlow> {
    Ok(session
        .get::<OrderFlow>(session_keys::ORDER_FLOW)
        .await?
        .unwrap_or_else(|| OrderFlow::new(state.config().currency)))
}

async fn save_flow(session: &Session, flow: &OrderFlow) -> Result<()> {
    session.insert(session_keys::ORDER_FLOW, flow).await?;
    Ok(())
}

/// Persist a successful transition, or queue the refusal notice.
///
/// A refused transition leaves the stored flow untouched.
async fn settle(
    session: &Session,
    flow: &OrderFlow,
    outcome: std::result::Result<Option<Notice>, OrderFlowError>,
) -> Result<()> {
    match outcome {
        Ok(notice) => {
            save_flow(session, flow).await?;
            if let Some(notice) = notice {
                push_notice(session, notice).await?;
            }
        }
        Err(OrderFlowError::UnknownProduct(id)) => {
            return Err(AppError::BadRequest(format!("unknown product: {id}")));
        }
        Err(err) => {
            tracing::debug!(error = %err, stage = %flow.stage(), "Order action refused");
            push_notice(session, err.notice()).await?;
        }
    }
    Ok(())
}

// =============================================================================
// Forms and Views
// =============================================================================

/// Search box and category chip state for the browse view.
#[derive(Debug, Default, Deserialize)]
pub struct BrowseQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

impl BrowseQuery {
    fn filter(&self) -> CategoryFilter {
        self.category.parse().unwrap_or_default()
    }

    /// `/order` with the current search carried along.
    fn location(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if !self.q.is_empty() {
            query.append_pair("q", &self.q);
        }
        if !self.category.is_empty() {
            query.append_pair("category", &self.category);
        }
        let query = query.finish();

        if query.is_empty() {
            "/order".to_string()
        } else {
            format!("/order?{query}")
        }
    }
}

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    pub product_id: i32,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

/// Quantity stepper form data.
#[derive(Debug, Deserialize)]
pub struct AdjustQuantityForm {
    pub product_id: i32,
    pub delta: i32,
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub category: String,
}

/// A category chip.
pub struct CategoryOption {
    pub label: &'static str,
    pub selected: bool,
}

/// A delivery slot radio button.
pub struct SlotOption {
    pub value: &'static str,
    pub label: &'static str,
    pub window: &'static str,
    pub checked: bool,
}

/// Browse view: search, product grid and cart sidebar.
#[derive(Template, WebTemplate)]
#[template(path = "order/browse.html")]
pub struct BrowseTemplate {
    pub notices: Vec<Notice>,
    pub query: String,
    pub category: String,
    pub categories: Vec<CategoryOption>,
    pub products: Vec<Product>,
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub totals: CartTotals,
    pub free_delivery_threshold: String,
}

/// Checkout view: address, slot, payment and summary.
#[derive(Template, WebTemplate)]
#[template(path = "order/checkout.html")]
pub struct CheckoutTemplate {
    pub notices: Vec<Notice>,
    pub lines: Vec<CartLine>,
    pub item_count: u32,
    pub totals: CartTotals,
    pub slots: Vec<SlotOption>,
}

/// Tracking view for the order just placed.
#[derive(Template, WebTemplate)]
#[template(path = "order/tracking.html")]
pub struct TrackingTemplate {
    pub notices: Vec<Notice>,
    pub order: PlacedOrder,
    pub steps: Vec<ProgressStep>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the view for the visitor's current stage.
///
/// GET /order?q=&category=
#[instrument(skip(state, session, notices))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    Notices(notices): Notices,
    Query(query): Query<BrowseQuery>,
) -> Result<Response> {
    let flow = load_flow(&session, &state).await?;
    let cart = flow.cart();
    let totals = flow.totals(state.delivery());

    let page = match flow.stage() {
        OrderFlowStage::Browsing => {
            let filter = query.filter();
            BrowseTemplate {
                notices,
                categories: CategoryFilter::options()
                    .into_iter()
                    .map(|option| CategoryOption {
                        label: option.label(),
                        selected: option == filter,
                    })
                    .collect(),
                products: state
                    .catalog()
                    .filter(&query.q, filter)
                    .cloned()
                    .collect(),
                lines: cart.lines().cloned().collect(),
                item_count: cart.item_count(),
                totals,
                free_delivery_threshold: state.delivery().free_delivery_threshold.display(),
                query: query.q,
                category: query.category,
            }
            .into_response()
        }
        OrderFlowStage::Checkout => CheckoutTemplate {
            notices,
            lines: cart.lines().cloned().collect(),
            item_count: cart.item_count(),
            totals,
            slots: DeliverySlot::ALL
                .into_iter()
                .map(|slot| SlotOption {
                    value: slot.value(),
                    label: slot.label(),
                    window: slot.window(),
                    checked: slot == DeliverySlot::default(),
                })
                .collect(),
        }
        .into_response(),
        OrderFlowStage::Tracking => {
            let order = flow
                .placed_order()
                .cloned()
                .ok_or_else(|| AppError::Internal("tracking without a placed order".to_string()))?;
            TrackingTemplate {
                notices,
                steps: order.progress_steps(),
                order,
            }
            .into_response()
        }
    };

    Ok(page)
}

/// Add one unit of a product.
///
/// POST /order/cart/add
#[instrument(skip(state, session))]
pub async fn add_to_cart(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AddToCartForm>,
) -> Result<Redirect> {
    let mut flow = load_flow(&session, &state).await?;
    let product_id = ProductId::new(form.product_id);

    let outcome = flow.add_to_cart(state.catalog(), product_id);
    if outcome.is_ok() {
        let id = product_id.to_string();
        add_breadcrumb("order", "Added to cart", Some(&[("product_id", id.as_str())]));
    }
    settle(&session, &flow, outcome.map(Some)).await?;

    let back = BrowseQuery {
        q: form.q,
        category: form.category,
    };
    Ok(Redirect::to(&back.location()))
}

/// Step a cart line up or down.
///
/// POST /order/cart/adjust
#[instrument(skip(state, session))]
pub async fn adjust_quantity(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdjustQuantityForm>,
) -> Result<Redirect> {
    let mut flow = load_flow(&session, &state).await?;
    let outcome = flow
        .adjust_quantity(ProductId::new(form.product_id), form.delta)
        .map(|_| None);
    settle(&session, &flow, outcome).await?;

    let back = BrowseQuery {
        q: form.q,
        category: form.category,
    };
    Ok(Redirect::to(&back.location()))
}

/// Browsing -> Checkout.
///
/// POST /order/checkout
#[instrument(skip(state, session))]
pub async fn checkout(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let mut flow = load_flow(&session, &state).await?;
    let outcome = flow.request_checkout().map(|()| None);
    settle(&session, &flow, outcome).await?;
    Ok(Redirect::to("/order"))
}

/// Checkout -> Browsing.
///
/// POST /order/back
#[instrument(skip(state, session))]
pub async fn back(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let mut flow = load_flow(&session, &state).await?;
    let outcome = flow.back_to_browsing().map(|()| None);
    settle(&session, &flow, outcome).await?;
    Ok(Redirect::to("/order"))
}

/// Checkout -> Tracking.
///
/// POST /order/place
#[instrument(skip(state, session, form))]
pub async fn place(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CheckoutForm>,
) -> Result<Redirect> {
    let mut flow = load_flow(&session, &state).await?;
    if let Err(err) = flow.can_place_order() {
        settle(&session, &flow, Err(err)).await?;
        return Ok(Redirect::to("/order"));
    }

    let details = match form.validate() {
        Ok(details) => details,
        Err(err) => {
            tracing::debug!(field = err.field(), "Checkout form incomplete");
            push_notice(&session, err.notice()).await?;
            return Ok(Redirect::to("/order"));
        }
    };

    let reference = OrderReference::from_number(rand::rng().random_range(0..10_000));
    let outcome = flow.place_order(&details, state.delivery(), reference, Utc::now());

    if let Some(order) = flow.placed_order().filter(|_| outcome.is_ok()) {
        tracing::info!(
            reference = %order.reference,
            items = order.item_count,
            total = %order.totals.total,
            slot = %order.slot,
            "Order placed"
        );
    }
    settle(&session, &flow, outcome.map(Some)).await?;
    Ok(Redirect::to("/order"))
}

/// Tracking -> Browsing.
///
/// POST /order/continue
#[instrument(skip(state, session))]
pub async fn continue_shopping(State(state): State<AppState>, session: Session) -> Result<Redirect> {
    let mut flow = load_flow(&session, &state).await?;
    let outcome = flow.continue_shopping().map(|()| None);
    settle(&session, &flow, outcome).await?;
    Ok(Redirect::to("/order"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_without_search() {
        assert_eq!(BrowseQuery::default().location(), "/order");
    }

    #[test]
    fn test_location_keeps_search_and_category() {
        let query = BrowseQuery {
            q: "fresh fruit".to_string(),
            category: "Groceries".to_string(),
        };
        assert_eq!(query.location(), "/order?q=fresh+fruit&category=Groceries");
    }

    #[test]
    fn test_unknown_category_means_all() {
        let query = BrowseQuery {
            q: String::new(),
            category: "Hardware".to_string(),
        };
        assert_eq!(query.filter(), CategoryFilter::All);
    }
}
