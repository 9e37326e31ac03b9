//! Static catalog of everything the wizard lets a user pick.
//!
//! The catalog holds three immutable lists: car categories, delivery months
//! and subscription terms. It supports enumeration and lookup by selection
//! key, nothing more. The standard catalog is built in; a catalog with the
//! same shape can also be loaded from JSON.
//!
//! # Example
//!
//! ```rust
//! use car_subscription::catalog::Catalog;
//!
//! let catalog = Catalog::standard();
//!
//! assert_eq!(catalog.categories().len(), 3);
//! assert_eq!(catalog.months().len(), 12);
//! assert_eq!(catalog.term("6").map(|t| t.label.as_str()), Some("6 months"));
//! assert!(catalog.category("City Compact").is_some());
//! assert!(catalog.term("99").is_none());
//! ```

mod category;
pub mod error;
mod term;

pub use category::{CarCategory, CarModel, CategoryIcon, CategorySpecs};
pub use error::CatalogError;
pub use term::{SubscriptionTerm, MONTHS};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Read-only source of categories, months and terms.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<CarCategory>,
    months: Vec<String>,
    terms: Vec<SubscriptionTerm>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Catalog {
    /// The built-in catalog: three categories, twelve months, four terms.
    pub fn standard() -> Self {
        Self {
            categories: category::standard_categories(),
            months: term::standard_months(),
            terms: term::standard_terms(),
        }
    }

    /// Assemble a catalog from explicit lists and check it.
    pub fn new(
        categories: Vec<CarCategory>,
        months: Vec<String>,
        terms: Vec<SubscriptionTerm>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self {
            categories,
            months,
            terms,
        };
        catalog.check()?;
        Ok(catalog)
    }

    /// Parse a catalog from JSON and check it.
    ///
    /// The JSON shape is the serde form of [`Catalog`]: an object with
    /// `categories`, `months` and `terms` arrays.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.check()?;
        Ok(catalog)
    }

    /// Verify every list is non-empty and its keys are unique and non-empty.
    pub fn check(&self) -> Result<(), CatalogError> {
        check_keys("categories", self.categories.iter().map(|c| c.title.as_str()))?;
        check_keys("months", self.months.iter().map(String::as_str))?;
        check_keys("terms", self.terms.iter().map(|t| t.value.as_str()))
    }

    pub fn categories(&self) -> &[CarCategory] {
        &self.categories
    }

    pub fn months(&self) -> &[String] {
        &self.months
    }

    pub fn terms(&self) -> &[SubscriptionTerm] {
        &self.terms
    }

    /// Category whose title equals `title` exactly.
    pub fn category(&self, title: &str) -> Option<&CarCategory> {
        self.categories.iter().find(|c| c.title == title)
    }

    /// Category at a card position. Hover tracking validates indices here.
    pub fn category_at(&self, index: usize) -> Option<&CarCategory> {
        self.categories.get(index)
    }

    /// Term whose value equals `value` exactly.
    pub fn term(&self, value: &str) -> Option<&SubscriptionTerm> {
        self.terms.iter().find(|t| t.value == value)
    }

    pub fn has_month(&self, month: &str) -> bool {
        self.months.iter().any(|m| m == month)
    }
}

fn check_keys<'a>(
    list: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if key.is_empty() {
            return Err(CatalogError::EmptyKey { list });
        }
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                list,
                key: key.to_string(),
            });
        }
    }
    if seen.is_empty() {
        return Err(CatalogError::Empty { list });
    }
    Ok(())
}
