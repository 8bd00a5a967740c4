//! UrbanSwift Core - domain types and ordering logic.
//!
//! This crate holds everything the storefront renders that has rules of its
//! own:
//! - the product [`catalog`] and its search/category filter
//! - the shopping [`cart`] with its delivery pricing policy
//! - the [`order_flow`] state machine (browse, checkout, tracking)
//! - the role [`portal`] sign-in stub and its session context
//! - the wholesaler cost [`estimate`] and the portal product [`listing`] book
//! - [`contact`] form validation
//!
//! # Architecture
//!
//! The core crate contains only types and synchronous logic - no I/O, no
//! HTTP, no sessions. Every mutable value here is owned by exactly one
//! visitor session; the storefront loads it, calls into this crate, and
//! stores it back.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod contact;
pub mod estimate;
pub mod forms;
pub mod listing;
pub mod notice;
pub mod order_flow;
pub mod portal;
pub mod types;

pub use cart::{Cart, CartLine, CartTotals, DeliveryPolicy};
pub use catalog::{Catalog, Category, CategoryFilter, Product};
pub use checkout::{CheckoutDetails, CheckoutForm, DeliverySlot, PlacedOrder};
pub use contact::{ContactForm, ContactMessage};
pub use estimate::{EstimateForm, RateCard};
pub use forms::FieldError;
pub use listing::{Listing, ListingBook, ListingError, ListingForm};
pub use notice::{Notice, Tone};
pub use order_flow::{FlowAction, OrderFlow, OrderFlowError};
pub use portal::{AuthMode, OrderSource, PortalAuthForm, PortalRole, PortalSession};
pub use types::*;
