//! Guard predicates for gating progress through a flow.
//!
//! Guards are pure boolean functions over some context (for the wizard, the
//! current selections). They let completion rules be declared as values
//! instead of being hard-coded into navigation.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether a context satisfies a rule.
///
/// Guards are cheap to clone; clones share the same predicate.
///
/// # Example
///
/// ```rust
/// use car_subscription::core::Guard;
///
/// let non_empty = Guard::new(|value: &String| !value.is_empty());
///
/// assert!(non_empty.check(&"March".to_string()));
/// assert!(!non_empty.check(&String::new()));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard accepts this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
