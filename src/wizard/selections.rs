//! The user's three selections.

use crate::core::{Guard, Step};
use serde::{Deserialize, Serialize};

/// Values chosen on each step. An empty string means "nothing selected".
///
/// Selections reference the catalog only by key (month name, category
/// title, term value); nothing here enforces that the keys exist.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Selections {
    month: String,
    category: String,
    term: String,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build selections from raw values.
    pub fn from_values(
        month: impl Into<String>,
        category: impl Into<String>,
        term: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            category: category.into(),
            term: term.into(),
        }
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Value bound to `step`.
    pub fn value(&self, step: Step) -> &str {
        match step {
            Step::DeliveryMonth => &self.month,
            Step::CarCategory => &self.category,
            Step::SubscriptionTerm => &self.term,
        }
    }

    pub fn is_filled(&self, step: Step) -> bool {
        !self.value(step).is_empty()
    }

    pub(crate) fn set(&mut self, step: Step, value: String) {
        let slot = match step {
            Step::DeliveryMonth => &mut self.month,
            Step::CarCategory => &mut self.category,
            Step::SubscriptionTerm => &mut self.term,
        };
        *slot = value;
    }
}

/// Guard deciding whether `step` is complete: its selection is non-empty.
pub fn completion_guard(step: Step) -> Guard<Selections> {
    Guard::new(move |selections: &Selections| selections.is_filled(step))
}
