//! Navigation history tracking.
//!
//! Records every effective move through a flow, appending in place.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which way a transition moved through the flow.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// Record of a single move between states.
///
/// # Example
///
/// ```rust
/// use car_subscription::core::{Direction, Step, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Step::DeliveryMonth,
///     to: Step::CarCategory,
///     direction: Direction::Forward,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.direction, Direction::Forward);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being left
    pub from: S,
    /// The state being entered
    pub to: S,
    /// Whether the move went forward or back
    pub direction: Direction,
    /// When the move happened
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use car_subscription::core::{Direction, StateHistory, StateTransition, Step};
/// use chrono::Utc;
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition {
///     from: Step::DeliveryMonth,
///     to: Step::CarCategory,
///     direction: Direction::Forward,
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: Step::CarCategory,
///     to: Step::DeliveryMonth,
///     direction: Direction::Backward,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Step::DeliveryMonth, &Step::CarCategory, &Step::DeliveryMonth]);
/// assert_eq!(history.count(Direction::Backward), 1);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition.
    pub fn record(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the starting state followed by every state entered, in
    /// order. An empty history has an empty path.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of transitions that moved in `direction`.
    pub fn count(&self, direction: Direction) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.direction == direction)
            .count()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions in recording order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
