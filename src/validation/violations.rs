//! Selection violations.

use crate::core::Step;
use thiserror::Error;

/// A problem found when checking a full set of selections
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SelectionViolation {
    #[error("Step {step} has no selection")]
    Missing { step: Step },

    #[error("Step {step} selection '{value}' is not in the catalog")]
    Unknown { step: Step, value: String },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}

impl SelectionViolation {
    /// Step the violation refers to, if it is tied to one.
    pub fn step(&self) -> Option<Step> {
        match self {
            Self::Missing { step } | Self::Unknown { step, .. } => Some(*step),
            Self::CustomCheckFailed { .. } => None,
        }
    }
}
