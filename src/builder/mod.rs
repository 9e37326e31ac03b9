//! Builder API for ergonomic wizard construction.
//!
//! The builder is where a wizard is configured: which catalog it offers,
//! how strictly it checks selections, whether it records navigation, extra
//! completion rules, and who receives completed subscriptions.

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::WizardBuilder;

use crate::config::SelectionPolicy;
use crate::wizard::Wizard;

/// Wizard that stores any selected string, as the reference UI does.
///
/// # Example
///
/// ```
/// use car_subscription::builder::permissive_wizard;
///
/// let mut wizard = permissive_wizard();
/// wizard.set_term("99").unwrap();
/// assert!(wizard.is_step_complete(3));
/// ```
pub fn permissive_wizard() -> Wizard {
    Wizard::with_policy(SelectionPolicy::Permissive)
}

/// Wizard that rejects selections missing from the standard catalog.
///
/// # Example
///
/// ```
/// use car_subscription::builder::strict_wizard;
///
/// let mut wizard = strict_wizard();
/// assert!(wizard.set_term("99").is_err());
/// assert!(!wizard.is_step_complete(3));
/// ```
pub fn strict_wizard() -> Wizard {
    Wizard::with_policy(SelectionPolicy::Strict)
}
