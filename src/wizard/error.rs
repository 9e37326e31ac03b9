//! Wizard error types.

use crate::validation::SelectionViolation;
use thiserror::Error;

/// A selection rejected under the strict policy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{value}' is not a delivery month")]
    UnknownMonth { value: String },

    #[error("'{title}' is not a car category")]
    UnknownCategory { title: String },

    #[error("'{value}' is not a subscription term")]
    UnknownTerm { value: String },

    #[error("Category card {index} does not exist (catalog has {len})")]
    HoverOutOfRange { index: usize, len: usize },
}

/// Why the "Complete Subscription" action did not go through.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("Subscription can only be completed on step 3 (current step: {current})")]
    WrongStep { current: u8 },

    #[error("No subscription term selected")]
    Incomplete,

    #[error("Selections are invalid: {}", describe(.0))]
    Invalid(Vec<SelectionViolation>),

    #[error("Completion handler failed: {0}")]
    Handler(String),
}

/// Any error a dispatched UI event can produce.
#[derive(Debug, Error)]
pub enum WizardError {
    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Completion(#[from] CompletionError),
}

fn describe(violations: &[SelectionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
