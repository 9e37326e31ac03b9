//! UI events and their dispatch.
//!
//! A rendering layer translates clicks and pointer movement into
//! [`WizardEvent`]s and feeds them to [`Wizard::dispatch`]. Dispatch honours
//! the same affordances the UI shows: a disabled "Next" or "Complete
//! Subscription" button and a hidden "Back" button do nothing, and neither
//! does input aimed at a control that only exists on another step.

use crate::core::{State, Step};
use crate::wizard::error::WizardError;
use crate::wizard::machine::Wizard;
use crate::wizard::summary::Subscription;

/// Inbound events from the UI boundary.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum WizardEvent {
    MonthSelected(String),
    CategorySelected(String),
    TermSelected(String),
    CardHoverEnter(usize),
    CardHoverExit,
    NextClicked,
    BackClicked,
    CompleteClicked,
}

impl WizardEvent {
    /// The step whose control produces this event, for step-bound input.
    /// Button clicks are not bound to a single step.
    pub fn step(&self) -> Option<Step> {
        match self {
            WizardEvent::MonthSelected(_) => Some(Step::DeliveryMonth),
            WizardEvent::CategorySelected(_)
            | WizardEvent::CardHoverEnter(_)
            | WizardEvent::CardHoverExit => Some(Step::CarCategory),
            WizardEvent::TermSelected(_) => Some(Step::SubscriptionTerm),
            WizardEvent::NextClicked
            | WizardEvent::BackClicked
            | WizardEvent::CompleteClicked => None,
        }
    }
}

/// What dispatching an event did.
#[derive(Clone, PartialEq, Debug)]
pub enum Outcome {
    /// The event changed (or re-set) wizard state.
    Applied,
    /// The control behind the event is disabled or hidden.
    Ignored,
    /// The subscription was completed and handed off.
    Completed(Subscription),
}

impl Wizard {
    /// Apply one UI event.
    ///
    /// ```rust
    /// use car_subscription::wizard::{Outcome, Wizard, WizardEvent};
    ///
    /// let mut wizard = Wizard::new();
    /// assert_eq!(wizard.dispatch(WizardEvent::NextClicked).unwrap(), Outcome::Ignored);
    ///
    /// wizard
    ///     .dispatch(WizardEvent::MonthSelected("March".to_string()))
    ///     .unwrap();
    /// assert_eq!(wizard.dispatch(WizardEvent::NextClicked).unwrap(), Outcome::Applied);
    /// assert_eq!(wizard.current_step().number(), 2);
    /// ```
    pub fn dispatch(&mut self, event: WizardEvent) -> Result<Outcome, WizardError> {
        tracing::trace!(session = %self.session_id(), ?event, "Dispatching event");
        if event.step().is_some_and(|step| step != self.current_step()) {
            return Ok(Outcome::Ignored);
        }

        let outcome = match event {
            WizardEvent::MonthSelected(value) => {
                self.set_month(value)?;
                Outcome::Applied
            }
            WizardEvent::CategorySelected(title) => {
                self.set_category(title)?;
                Outcome::Applied
            }
            WizardEvent::TermSelected(value) => {
                self.set_term(value)?;
                Outcome::Applied
            }
            WizardEvent::CardHoverEnter(index) => {
                self.set_hovered_category(Some(index))?;
                Outcome::Applied
            }
            WizardEvent::CardHoverExit => {
                self.set_hovered_category(None)?;
                Outcome::Applied
            }
            WizardEvent::NextClicked => {
                if !self.current_step().is_last() && self.is_current_step_complete() {
                    self.advance();
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            WizardEvent::BackClicked => {
                if self.retreat() {
                    Outcome::Applied
                } else {
                    Outcome::Ignored
                }
            }
            WizardEvent::CompleteClicked => {
                if self.current_step().is_last() && self.is_current_step_complete() {
                    Outcome::Completed(self.complete()?)
                } else {
                    Outcome::Ignored
                }
            }
        };
        Ok(outcome)
    }
}
