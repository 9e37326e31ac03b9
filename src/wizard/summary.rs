//! Read-only summary of the final selections.

use crate::catalog::Catalog;
use crate::wizard::Selections;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const SUMMARY_TITLE: &str = "Your Subscription Summary";

/// Human-readable view of the three selections.
///
/// The term label is looked up in the catalog; it is `None` when the stored
/// term value is not a catalog key.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Summary {
    pub delivery_month: String,
    pub car_category: String,
    pub subscription_term_label: Option<String>,
}

impl Summary {
    pub fn from_selections(selections: &Selections, catalog: &Catalog) -> Self {
        Self {
            delivery_month: selections.month().to_string(),
            car_category: selections.category().to_string(),
            subscription_term_label: catalog
                .term(selections.term())
                .map(|term| term.label.clone()),
        }
    }

    /// The three display lines, in order.
    pub fn lines(&self) -> [String; 3] {
        [
            format!("Delivery Month: {}", self.delivery_month),
            format!("Car Category: {}", self.car_category),
            format!(
                "Subscription Term: {}",
                self.subscription_term_label.as_deref().unwrap_or_default()
            ),
        ]
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{SUMMARY_TITLE}")?;
        let [month, category, term] = self.lines();
        writeln!(f, "{month}")?;
        writeln!(f, "{category}")?;
        write!(f, "{term}")
    }
}

/// A completed subscription as handed to a [`CompletionHandler`](super::CompletionHandler).
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Subscription {
    /// Session of the wizard that produced it
    pub session: Uuid,
    pub summary: Summary,
    pub completed_at: DateTime<Utc>,
}
