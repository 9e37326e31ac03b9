//! Core State trait for wizard states.
//!
//! States are plain values describing where a user is in a linear flow.
//! Inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for states of a linear, bidirectional flow.
///
/// All methods are pure. A state knows its display name and whether it sits
/// at either end of the flow; it does not know how to move.
///
/// # Required Traits
///
/// - `Clone`: states are copied into the navigation history
/// - `PartialEq`: states are compared by transition logic
/// - `Debug`: states are debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states can be logged and exported
///
/// # Example
///
/// ```rust
/// use car_subscription::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Checkout {
///     Cart,
///     Payment,
///     Review,
/// }
///
/// impl State for Checkout {
///     fn name(&self) -> &str {
///         match self {
///             Self::Cart => "Cart",
///             Self::Payment => "Payment",
///             Self::Review => "Review",
///         }
///     }
///
///     fn is_first(&self) -> bool {
///         matches!(self, Self::Cart)
///     }
///
///     fn is_last(&self) -> bool {
///         matches!(self, Self::Review)
///     }
/// }
///
/// assert!(Checkout::Cart.is_first());
/// assert!(!Checkout::Payment.is_last());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if there is no state before this one.
    ///
    /// Default implementation returns `false`.
    fn is_first(&self) -> bool {
        false
    }

    /// Check if there is no state after this one.
    ///
    /// Being last does not make a state terminal: a flow may still move
    /// backwards from it.
    ///
    /// Default implementation returns `false`.
    fn is_last(&self) -> bool {
        false
    }
}
