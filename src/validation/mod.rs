//! Validation of the full selection set before completion.
//!
//! Navigation only asks "is this step's selection non-empty". Completing a
//! subscription under the strict policy asks more: are all three selections
//! present, and do they name real catalog entries. The permissive policy
//! only runs custom checks added by the caller. These checks use
//! Stillwater's `Validation` type so a user sees every problem at once
//! instead of one per attempt.
//!
//! # Example
//!
//! ```rust
//! use car_subscription::catalog::Catalog;
//! use car_subscription::config::SelectionPolicy;
//! use car_subscription::validation::{SelectionContext, SelectionRules};
//! use car_subscription::wizard::Selections;
//!
//! let catalog = Catalog::standard();
//! let selections = Selections::from_values("March", "", "99");
//! let rules = SelectionRules::new(SelectionPolicy::Strict);
//!
//! let violations = rules.violations(&SelectionContext {
//!     selections: &selections,
//!     catalog: &catalog,
//! });
//! assert_eq!(violations.len(), 2);
//! ```

pub mod rules;
pub mod violations;

pub use rules::{is_known, SelectionCheck, SelectionContext, SelectionRules};
pub use violations::SelectionViolation;
