//! Subscription terms and delivery months.

use serde::{Deserialize, Serialize};

/// A selectable subscription length.
///
/// `value` is the selection key (month count as a string), `label` is what
/// the user sees.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SubscriptionTerm {
    pub value: String,
    pub label: String,
}

impl SubscriptionTerm {
    /// Term of `months` months, labelled "`months` months".
    pub fn months(months: u32) -> Self {
        Self {
            value: months.to_string(),
            label: format!("{months} months"),
        }
    }
}

pub fn standard_terms() -> Vec<SubscriptionTerm> {
    [3, 6, 12, 24]
        .into_iter()
        .map(SubscriptionTerm::months)
        .collect()
}

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub fn standard_months() -> Vec<String> {
    MONTHS.iter().map(|m| m.to_string()).collect()
}
