//! Product catalog for the consumer ordering page.
//!
//! The catalog is fixed at startup and never mutated, so one instance is
//! shared read-only by every session.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::{CurrencyCode, Price, ProductId};

/// Product category tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Groceries,
    Bakery,
    Beverages,
    Dairy,
}

impl Category {
    /// All categories in sidebar order.
    pub const ALL: [Self; 4] = [Self::Groceries, Self::Bakery, Self::Beverages, Self::Dairy];

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Groceries => "Groceries",
            Self::Bakery => "Bakery",
            Self::Beverages => "Beverages",
            Self::Dairy => "Dairy",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Category selection in the sidebar: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// The sentinel label for [`CategoryFilter::All`].
    pub const ALL_LABEL: &'static str = "All";

    /// Whether a product in `category` passes this filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => *selected == category,
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::All => Self::ALL_LABEL,
            Self::Only(category) => category.label(),
        }
    }

    /// Every selectable filter, "All" first.
    #[must_use]
    pub fn options() -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(Category::ALL.into_iter().map(Self::Only))
            .collect()
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
    /// Store the product is sold by.
    pub store: String,
    /// Unit of sale, e.g. "1 kg".
    pub unit: String,
    /// Distance label shown next to the store, e.g. "0.8 km".
    pub distance: String,
    /// Emoji glyph used as the product image.
    pub image: String,
}

/// Read-only product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// The demo catalog, priced in `currency`.
    #[must_use]
    pub fn sample(currency: CurrencyCode) -> Self {
        let entry = |id: i32,
                     name: &str,
                     category: Category,
                     price: i64,
                     store: &str,
                     unit: &str,
                     distance: &str,
                     image: &str| Product {
            id: ProductId::new(id),
            name: name.to_owned(),
            category,
            price: Price::whole(price, currency),
            store: store.to_owned(),
            unit: unit.to_owned(),
            distance: distance.to_owned(),
            image: image.to_owned(),
        };

        Self {
            products: vec![
            entry(1, "Organic Vegetables Bundle", Category::Groceries, 249, "Fresh Farms", "1 bundle", "0.8 km", "🥦"),
            entry(2, "Artisan Bread Selection", Category::Bakery, 125, "City Bakery", "1 loaf set", "1.2 km", "🍞"),
            entry(3, "Premium Coffee Beans", Category::Beverages, 189, "Bean Bros", "250 gm", "2.1 km", "☕"),
            entry(4, "Fresh Fruit Basket", Category::Groceries, 320, "Orchard Fresh", "1 basket", "1.5 km", "🍎"),
            entry(5, "Dairy Essentials Pack", Category::Dairy, 157, "Farm Direct", "1 pack", "0.5 km", "🥛"),
            entry(6, "Gourmet Cheese Selection", Category::Dairy, 285, "Cheese House", "500 gm", "3.0 km", "🧀"),
            ],
        }
    }

    /// Look up a product by id.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in `category` whose name contains `query`, ignoring case.
    ///
    /// Lazily evaluated and in catalog order. An empty query with
    /// [`CategoryFilter::All`] yields the whole catalog.
    pub fn filter<'a>(
        &'a self,
        query: &str,
        category: CategoryFilter,
    ) -> impl Iterator<Item = &'a Product> + use<'a> {
        let needle = query.to_lowercase();
        self.products.iter().filter(move |product| {
            category.matches(product.category) && product.name.to_lowercase().contains(&needle)
        })
    }
}
