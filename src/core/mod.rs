//! Core flow types and logic.
//!
//! This module contains the pure core of the wizard:
//! - The three wizard steps and the `State` trait they implement
//! - Guard predicates that decide step completion
//! - Navigation history
//!
//! Nothing in this module performs I/O or logging.

mod guard;
mod history;
mod state;
mod step;

pub use guard::Guard;
pub use history::{Direction, StateHistory, StateTransition};
pub use state::State;
pub use step::Step;
