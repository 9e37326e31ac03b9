//! The subscription wizard.
//!
//! This module is the "imperative shell" around the pure core: it owns the
//! mutable wizard state, logs what happens to it and hands completed
//! subscriptions to an injected handler.
//!
//! # Key Concepts
//!
//! - **Wizard**: current step, selections, hover hint, navigation
//! - **Selections**: the three chosen values, kept apart from hover state
//! - **Summary**: the read-only view of the final selections
//! - **Events**: the UI boundary, dispatched with button gating applied

mod completion;
mod error;
mod event;
mod hover;
mod machine;
mod selections;
mod summary;

pub use completion::{CompletionHandler, LogCompletion};
pub use error::{CompletionError, SelectionError, WizardError};
pub use event::{Outcome, WizardEvent};
pub use hover::HoverState;
pub use machine::Wizard;
pub use selections::{completion_guard, Selections};
pub use summary::{Subscription, Summary, SUMMARY_TITLE};
