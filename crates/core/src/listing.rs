//! A portal's own product list (name, price, unit, stock).
//!
//! Each visitor edits a private copy seeded from [`ListingBook::sample`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::{self, FieldError};
use crate::notice::Notice;
use crate::types::{CurrencyCode, ListingId, Price};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error("listing {0} not found")]
    NotFound(ListingId),

    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ListingError {
    #[must_use]
    pub fn notice(&self) -> Notice {
        match self {
            Self::NotFound(_) => {
                Notice::destructive("Product not found", "It may already have been removed.")
            }
            Self::Field(err) => err.notice(),
        }
    }
}

/// One product on the list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub price: Price,
    pub unit: String,
    pub stock: u32,
}

/// Add / edit form. All four fields are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub stock: String,
}

struct ValidListing {
    name: String,
    price: Decimal,
    unit: String,
    stock: u32,
}

impl ListingForm {
    fn validate(&self) -> Result<ValidListing, FieldError> {
        Ok(ValidListing {
            name: forms::required("Product name", &self.name)?,
            price: forms::decimal("Price", &self.price)?,
            unit: forms::required("Unit", &self.unit)?,
            stock: forms::count("Stock quantity", &self.stock)?,
        })
    }
}

/// The product list for one portal session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingBook {
    currency: CurrencyCode,
    listings: Vec<Listing>,
}

impl ListingBook {
    /// The five starter listings.
    #[must_use]
    pub fn sample(currency: CurrencyCode) -> Self {
        let listing = |id: i32, name: &str, price: i64, unit: &str, stock: u32| Listing {
            id: ListingId::new(id),
            name: name.to_owned(),
            price: Price::whole(price, currency),
            unit: unit.to_owned(),
            stock,
        };

        Self {
            currency,
            listings: vec![
                listing(1, "Fresh Vegetables Bundle", 49, "1 kg", 100),
                listing(2, "Organic Rice", 38, "1 kg", 250),
                listing(3, "Premium Coffee Beans", 39, "250 gm", 80),
                listing(4, "Fresh Milk", 28, "1 litre", 150),
                listing(5, "Whole Wheat Bread", 22, "1 loaf", 60),
            ],
        }
    }

    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    #[must_use]
    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    fn next_id(&self) -> ListingId {
        let max = self.listings.iter().map(|l| l.id.as_i32()).max().unwrap_or(0);
        ListingId::new(max.saturating_add(1))
    }

    /// Append a listing.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] if any field is blank or not a number.
    pub fn add(&mut self, form: &ListingForm) -> Result<Notice, ListingError> {
        let valid = form.validate()?;
        let listing = Listing {
            id: self.next_id(),
            name: valid.name,
            price: Price::new(valid.price, self.currency),
            unit: valid.unit,
            stock: valid.stock,
        };
        let notice = Notice::info(
            "Product added!",
            format!("{} has been added to your list.", listing.name),
        );
        self.listings.push(listing);
        Ok(notice)
    }

    /// Replace the fields of an existing listing.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id, otherwise a field error.
    pub fn update(&mut self, id: ListingId, form: &ListingForm) -> Result<Notice, ListingError> {
        let currency = self.currency;
        let listing = self
            .listings
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or(ListingError::NotFound(id))?;
        let valid = form.validate()?;

        listing.name = valid.name;
        listing.price = Price::new(valid.price, currency);
        listing.unit = valid.unit;
        listing.stock = valid.stock;
        Ok(Notice::info("Product updated!", "Changes saved successfully."))
    }

    /// Delete a listing.
    ///
    /// # Errors
    ///
    /// `NotFound` for an unknown id.
    pub fn remove(&mut self, id: ListingId) -> Result<Notice, ListingError> {
        let index = self
            .listings
            .iter()
            .position(|l| l.id == id)
            .ok_or(ListingError::NotFound(id))?;
        self.listings.remove(index);
        Ok(Notice::info(
            "Product removed",
            "Product has been deleted from your list.",
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, price: &str, unit: &str, stock: &str) -> ListingForm {
        ListingForm {
            name: name.to_string(),
            price: price.to_string(),
            unit: unit.to_string(),
            stock: stock.to_string(),
        }
    }

    #[test]
    fn test_add_assigns_next_id() {
        let mut book = ListingBook::sample(CurrencyCode::INR);
        let notice = book.add(&form("Brown Eggs", "72", "12 pcs", "40")).unwrap();
        assert_eq!(notice.title, "Product added!");
        assert_eq!(book.len(), 6);
        assert_eq!(book.get(ListingId::new(6)).unwrap().name, "Brown Eggs");
    }

    #[test]
    fn test_add_into_emptied_book_starts_at_one() {
        let mut book = ListingBook::sample(CurrencyCode::INR);
        for id in 1..=5 {
            book.remove(ListingId::new(id)).unwrap();
        }
        assert!(book.is_empty());
        book.add(&form("Ghee", "510", "1 litre", "5")).unwrap();
        assert!(book.get(ListingId::new(1)).is_some());
    }

    #[test]
    fn test_add_rejects_missing_fields() {
        let mut book = ListingBook::sample(CurrencyCode::INR);
        let err = book.add(&form("Ghee", "", "1 litre", "5")).unwrap_err();
        assert_eq!(err, ListingError::Field(FieldError::Missing { field: "Price" }));
        assert_eq!(err.notice().title, "Missing fields");
        assert_eq!(book.len(), 5);
    }

    #[test]
    fn test_update_replaces_fields() {
        let mut book = ListingBook::sample(CurrencyCode::INR);
        book.update(ListingId::new(2), &form("Basmati Rice", "45.5", "1 kg", "200"))
            .unwrap();
        let listing = book.get(ListingId::new(2)).unwrap();
        assert_eq!(listing.name, "Basmati Rice");
        assert_eq!(listing.price.amount, Decimal::new(455, 1));
        assert_eq!(listing.stock, 200);
    }

    #[test]
    fn test_update_and_remove_unknown_id() {
        let mut book = ListingBook::sample(CurrencyCode::INR);
        assert_eq!(
            book.update(ListingId::new(99), &form("x", "1", "1", "1")),
            Err(ListingError::NotFound(ListingId::new(99)))
        );
        assert!(book.remove(ListingId::new(99)).is_err());
    }

    #[test]
    fn test_remove() {
        let mut book = ListingBook::sample(CurrencyCode::INR);
        book.remove(ListingId::new(1)).unwrap();
        assert_eq!(book.len(), 4);
        assert!(book.get(ListingId::new(1)).is_none());
    }
}
