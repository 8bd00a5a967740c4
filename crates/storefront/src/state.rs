//! Application state shared across handlers.

use std::sync::Arc;

use urbanswift_core::{Catalog, DeliveryPolicy, RateCard};

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything in it is
/// read-only after startup; per-visitor state lives in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    delivery: DeliveryPolicy,
    rates: RateCard,
}

impl AppState {
    /// Create application state with the built-in sample catalog.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::sample(config.currency);
        Self::with_catalog(config, catalog)
    }

    /// Create application state around a specific catalog.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog) -> Self {
        let delivery = config.delivery_policy();

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                delivery,
                rates: RateCard::default(),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Products offered on the ordering page.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    #[must_use]
    pub fn delivery(&self) -> &DeliveryPolicy {
        &self.inner.delivery
    }

    /// Rates for the wholesaler delivery estimator.
    #[must_use]
    pub fn rates(&self) -> &RateCard {
        &self.inner.rates
    }
}
