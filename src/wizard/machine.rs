//! The wizard state machine.

use crate::catalog::Catalog;
use crate::config::{SelectionPolicy, WizardConfig};
use crate::core::{Direction, Guard, State, StateHistory, StateTransition, Step};
use crate::validation::{is_known, SelectionContext, SelectionRules};
use crate::wizard::completion::{CompletionHandler, LogCompletion};
use crate::wizard::error::{CompletionError, SelectionError};
use crate::wizard::hover::HoverState;
use crate::wizard::selections::{completion_guard, Selections};
use crate::wizard::summary::{Subscription, Summary};
use chrono::Utc;
use std::fmt;
use uuid::Uuid;

/// Three-step subscription wizard.
///
/// Owns the current step, the three selections and the hover hint. All
/// mutation happens through `&mut self` in response to user input; dropping
/// the wizard discards everything.
///
/// # Example
///
/// ```rust
/// use car_subscription::core::Step;
/// use car_subscription::wizard::Wizard;
///
/// let mut wizard = Wizard::new();
/// assert_eq!(wizard.current_step(), Step::DeliveryMonth);
///
/// wizard.set_month("March").unwrap();
/// assert!(wizard.is_step_complete(1));
/// wizard.advance();
///
/// wizard.set_category("City Compact").unwrap();
/// wizard.advance();
///
/// wizard.set_term("6").unwrap();
/// let summary = wizard.summary().unwrap();
/// assert_eq!(summary.subscription_term_label.as_deref(), Some("6 months"));
/// ```
pub struct Wizard {
    session: Uuid,
    step: Step,
    selections: Selections,
    hover: HoverState,
    catalog: Catalog,
    policy: SelectionPolicy,
    gates: [Guard<Selections>; 3],
    rules: SelectionRules,
    record_history: bool,
    history: StateHistory<Step>,
    handler: Box<dyn CompletionHandler>,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Wizard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wizard")
            .field("session", &self.session)
            .field("step", &self.step)
            .field("selections", &self.selections)
            .field("hover", &self.hover)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl Wizard {
    /// Fresh wizard over the standard catalog with default configuration.
    pub fn new() -> Self {
        Self::with_policy(SelectionPolicy::default())
    }

    /// Fresh wizard over the standard catalog using `policy`.
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        let config = WizardConfig {
            policy,
            ..WizardConfig::default()
        };
        Self::from_parts(
            Catalog::standard(),
            config,
            SelectionRules::new(config.policy),
            Box::new(LogCompletion),
        )
    }

    /// Assemble a wizard from already-checked parts.
    pub(crate) fn from_parts(
        catalog: Catalog,
        config: WizardConfig,
        rules: SelectionRules,
        handler: Box<dyn CompletionHandler>,
    ) -> Self {
        let session = Uuid::new_v4();
        tracing::debug!(session = %session, policy = ?config.policy, "Wizard created");
        Self {
            session,
            step: Step::default(),
            selections: Selections::new(),
            hover: HoverState::default(),
            catalog,
            policy: config.policy,
            gates: Step::ALL.map(completion_guard),
            rules,
            record_history: config.record_history,
            history: StateHistory::new(),
            handler,
        }
    }

    /// Identifier of this wizard instance, used to correlate logs.
    pub fn session_id(&self) -> Uuid {
        self.session
    }

    pub fn current_step(&self) -> Step {
        self.step
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn hovered_category(&self) -> Option<usize> {
        self.hover.category()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Effective step changes so far. Empty when recording is disabled.
    pub fn history(&self) -> &StateHistory<Step> {
        &self.history
    }

    /// Move to the next step. No-op on the last step.
    ///
    /// Completion of the current step is not checked here; the caller
    /// decides whether "Next" is available. Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.move_to(next, Direction::Forward);
                true
            }
            None => false,
        }
    }

    /// Move to the previous step. No-op on the first step.
    /// Returns whether the step changed.
    pub fn retreat(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.move_to(previous, Direction::Backward);
                true
            }
            None => false,
        }
    }

    /// Whether the selection bound to step number `step` is non-empty.
    ///
    /// Step numbers outside 1..=3 are never complete.
    pub fn is_step_complete(&self, step: u8) -> bool {
        Step::from_number(step).is_some_and(|step| self.is_complete(step))
    }

    pub fn is_complete(&self, step: Step) -> bool {
        self.gates[usize::from(step.number() - 1)].check(&self.selections)
    }

    pub fn is_current_step_complete(&self) -> bool {
        self.is_complete(self.step)
    }

    pub fn set_month(&mut self, value: impl Into<String>) -> Result<(), SelectionError> {
        self.select(Step::DeliveryMonth, value.into())
    }

    pub fn set_category(&mut self, title: impl Into<String>) -> Result<(), SelectionError> {
        self.select(Step::CarCategory, title.into())
    }

    pub fn set_term(&mut self, value: impl Into<String>) -> Result<(), SelectionError> {
        self.select(Step::SubscriptionTerm, value.into())
    }

    /// Record which category card is hovered, or `None` when the pointer
    /// leaves. Never affects completion or navigation.
    pub fn set_hovered_category(&mut self, index: Option<usize>) -> Result<(), SelectionError> {
        let strict = self.policy == SelectionPolicy::Strict;
        if let Some(index) = index.filter(|i| strict && self.catalog.category_at(*i).is_none()) {
            let len = self.catalog.categories().len();
            tracing::warn!(session = %self.session, index, len, "Hover index rejected");
            return Err(SelectionError::HoverOutOfRange { index, len });
        }
        self.hover.set(index);
        Ok(())
    }

    /// Summary of the selections, available once the last step is reached
    /// and complete.
    pub fn summary(&self) -> Option<Summary> {
        (self.step.is_last() && self.is_current_step_complete())
            .then(|| Summary::from_selections(&self.selections, &self.catalog))
    }

    /// The "Complete Subscription" action.
    ///
    /// Requires the last step to be current and complete. Under the Strict
    /// policy every selection must also be filled and known to the catalog;
    /// custom rules apply under either policy. The resulting subscription is
    /// handed to the completion handler. The wizard's state is unchanged
    /// either way.
    pub fn complete(&mut self) -> Result<Subscription, CompletionError> {
        if !self.step.is_last() {
            return Err(CompletionError::WrongStep {
                current: self.step.number(),
            });
        }
        let summary = self.summary().ok_or(CompletionError::Incomplete)?;

        let violations = self.rules.violations(&SelectionContext {
            selections: &self.selections,
            catalog: &self.catalog,
        });
        if !violations.is_empty() {
            tracing::warn!(
                session = %self.session,
                count = violations.len(),
                "Completion blocked by invalid selections"
            );
            return Err(CompletionError::Invalid(violations));
        }

        let subscription = Subscription {
            session: self.session,
            summary,
            completed_at: Utc::now(),
        };
        self.handler
            .complete(&subscription)
            .map_err(CompletionError::Handler)?;
        Ok(subscription)
    }

    fn select(&mut self, step: Step, value: String) -> Result<(), SelectionError> {
        let accepted = value.is_empty()
            || self.policy == SelectionPolicy::Permissive
            || is_known(&self.catalog, step, &value);

        if !accepted {
            tracing::warn!(session = %self.session, step = step.number(), %value, "Selection rejected");
            return Err(match step {
                Step::DeliveryMonth => SelectionError::UnknownMonth { value },
                Step::CarCategory => SelectionError::UnknownCategory { title: value },
                Step::SubscriptionTerm => SelectionError::UnknownTerm { value },
            });
        }

        tracing::debug!(session = %self.session, step = step.number(), %value, "Selection updated");
        self.selections.set(step, value);
        Ok(())
    }

    fn move_to(&mut self, to: Step, direction: Direction) {
        let from = self.step;
        self.step = to;
        if self.record_history {
            self.history.record(StateTransition {
                from,
                to,
                direction,
                timestamp: Utc::now(),
            });
        }
        tracing::debug!(
            session = %self.session,
            from = from.number(),
            to = to.number(),
            ?direction,
            "Step changed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::SelectionViolation;
    use std::sync::{Arc, Mutex};

    fn permissive() -> Wizard {
        Wizard::with_policy(SelectionPolicy::Permissive)
    }

    fn at_last_step(wizard: &mut Wizard) {
        wizard.advance();
        wizard.advance();
    }

    #[test]
    fn new_wizard_starts_empty_on_first_step() {
        let wizard = Wizard::new();

        assert_eq!(wizard.current_step(), Step::DeliveryMonth);
        assert_eq!(wizard.selections(), &Selections::new());
        assert_eq!(wizard.hovered_category(), None);
        assert!(wizard.history().is_empty());
        assert_eq!(wizard.policy(), SelectionPolicy::Strict);
    }

    #[test]
    fn advance_stops_at_last_step() {
        let mut wizard = Wizard::new();

        assert!(wizard.advance());
        assert!(wizard.advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), Step::SubscriptionTerm);
    }

    #[test]
    fn retreat_stops_at_first_step() {
        let mut wizard = Wizard::new();

        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), Step::DeliveryMonth);

        wizard.advance();
        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), Step::DeliveryMonth);
    }

    #[test]
    fn advance_keeps_selections() {
        let mut wizard = Wizard::new();
        wizard.set_month("March").unwrap();
        wizard.advance();

        assert_eq!(wizard.current_step(), Step::CarCategory);
        assert_eq!(wizard.selections(), &Selections::from_values("March", "", ""));
    }

    #[test]
    fn advance_does_not_require_completion() {
        let mut wizard = Wizard::new();
        assert!(!wizard.is_current_step_complete());
        assert!(wizard.advance());
    }

    #[test]
    fn step_completion_follows_bound_field() {
        let mut wizard = Wizard::new();
        assert!(!wizard.is_step_complete(1));
        assert!(!wizard.is_step_complete(2));
        assert!(!wizard.is_step_complete(3));

        wizard.set_category("Premium Sport").unwrap();
        assert!(!wizard.is_step_complete(1));
        assert!(wizard.is_step_complete(2));
        assert!(!wizard.is_step_complete(3));
    }

    #[test]
    fn unknown_step_numbers_are_incomplete() {
        let mut wizard = Wizard::new();
        wizard.set_month("March").unwrap();
        wizard.set_category("Family SUV").unwrap();
        wizard.set_term("3").unwrap();

        assert!(!wizard.is_step_complete(0));
        assert!(!wizard.is_step_complete(4));
    }

    #[test]
    fn strict_policy_rejects_unknown_values() {
        let mut wizard = Wizard::new();
        wizard.set_term("6").unwrap();

        assert_eq!(
            wizard.set_term("99"),
            Err(SelectionError::UnknownTerm {
                value: "99".to_string()
            })
        );
        assert_eq!(
            wizard.set_month("Smarch"),
            Err(SelectionError::UnknownMonth {
                value: "Smarch".to_string()
            })
        );
        assert_eq!(
            wizard.set_category("Hovercraft"),
            Err(SelectionError::UnknownCategory {
                title: "Hovercraft".to_string()
            })
        );
        assert_eq!(wizard.selections().term(), "6");
    }

    #[test]
    fn empty_value_clears_selection() {
        let mut wizard = Wizard::new();
        wizard.set_month("May").unwrap();
        wizard.set_month("").unwrap();
        assert!(!wizard.is_step_complete(1));
    }

    #[test]
    fn permissive_policy_accepts_anything() {
        let mut wizard = permissive();
        wizard.set_term("99").unwrap();
        at_last_step(&mut wizard);

        assert!(wizard.is_step_complete(3));
        let summary = wizard.summary().unwrap();
        assert_eq!(summary.subscription_term_label, None);
    }

    #[test]
    fn hover_does_not_change_completion() {
        let mut wizard = Wizard::new();
        wizard.set_month("March").unwrap();
        let before: Vec<_> = (0..=4).map(|s| wizard.is_step_complete(s)).collect();

        wizard.set_hovered_category(Some(1)).unwrap();
        let after: Vec<_> = (0..=4).map(|s| wizard.is_step_complete(s)).collect();

        assert_eq!(before, after);
        assert_eq!(wizard.hovered_category(), Some(1));
    }

    #[test]
    fn strict_hover_rejects_missing_cards() {
        let mut wizard = Wizard::new();
        assert_eq!(
            wizard.set_hovered_category(Some(3)),
            Err(SelectionError::HoverOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(wizard.hovered_category(), None);

        let mut loose = permissive();
        loose.set_hovered_category(Some(7)).unwrap();
        assert_eq!(loose.hovered_category(), Some(7));
    }

    #[test]
    fn strict_hover_follows_catalog_cards() {
        let standard = Catalog::standard();
        let catalog = Catalog::new(
            standard.categories()[..2].to_vec(),
            standard.months().to_vec(),
            standard.terms().to_vec(),
        )
        .unwrap();
        let config = WizardConfig::default();
        let mut wizard = Wizard::from_parts(
            catalog,
            config,
            SelectionRules::new(config.policy),
            Box::new(LogCompletion),
        );

        wizard.set_hovered_category(Some(1)).unwrap();
        assert_eq!(
            wizard.set_hovered_category(Some(2)),
            Err(SelectionError::HoverOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(wizard.hovered_category(), Some(1));
    }

    #[test]
    fn summary_needs_last_step_and_term() {
        let mut wizard = Wizard::new();
        wizard.set_month("March").unwrap();
        wizard.set_category("City Compact").unwrap();
        wizard.set_term("6").unwrap();
        assert!(wizard.summary().is_none());

        at_last_step(&mut wizard);
        assert_eq!(
            wizard.summary(),
            Some(Summary {
                delivery_month: "March".to_string(),
                car_category: "City Compact".to_string(),
                subscription_term_label: Some("6 months".to_string()),
            })
        );

        wizard.set_term("").unwrap();
        assert!(wizard.summary().is_none());
    }

    #[test]
    fn history_records_only_effective_moves() {
        let mut wizard = Wizard::new();
        wizard.retreat();
        wizard.advance();
        wizard.advance();
        wizard.advance();
        wizard.retreat();

        let history = wizard.history();
        assert_eq!(history.transitions().len(), 3);
        assert_eq!(history.count(Direction::Forward), 2);
        assert_eq!(history.count(Direction::Backward), 1);
        assert_eq!(
            history.get_path(),
            vec![
                &Step::DeliveryMonth,
                &Step::CarCategory,
                &Step::SubscriptionTerm,
                &Step::CarCategory
            ]
        );
    }

    #[test]
    fn complete_requires_last_step() {
        let mut wizard = Wizard::new();
        assert!(matches!(
            wizard.complete(),
            Err(CompletionError::WrongStep { current: 1 })
        ));
    }

    #[test]
    fn complete_requires_term() {
        let mut wizard = Wizard::new();
        at_last_step(&mut wizard);
        assert!(matches!(
            wizard.complete(),
            Err(CompletionError::Incomplete)
        ));
    }

    #[test]
    fn complete_reports_all_missing_selections() {
        let mut wizard = Wizard::new();
        at_last_step(&mut wizard);
        wizard.set_term("12").unwrap();

        match wizard.complete() {
            Err(CompletionError::Invalid(violations)) => {
                assert_eq!(
                    violations,
                    vec![
                        SelectionViolation::Missing {
                            step: Step::DeliveryMonth
                        },
                        SelectionViolation::Missing {
                            step: Step::CarCategory
                        },
                    ]
                );
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn permissive_completes_after_ungated_navigation() {
        let mut wizard = permissive();
        at_last_step(&mut wizard);
        wizard.set_term("6").unwrap();
        assert!(wizard.is_step_complete(3));

        let subscription = wizard.complete().unwrap();
        assert_eq!(
            subscription.summary,
            Summary {
                delivery_month: String::new(),
                car_category: String::new(),
                subscription_term_label: Some("6 months".to_string()),
            }
        );
    }

    #[test]
    fn complete_hands_subscription_to_handler() {
        let received = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&received);

        let config = WizardConfig::default();
        let mut wizard = Wizard::from_parts(
            Catalog::standard(),
            config,
            SelectionRules::new(config.policy),
            Box::new(move |s: &Subscription| -> Result<(), String> {
                sink.lock().unwrap().push(s.clone());
                Ok(())
            }),
        );

        wizard.set_month("March").unwrap();
        wizard.set_category("City Compact").unwrap();
        wizard.set_term("6").unwrap();
        at_last_step(&mut wizard);

        let subscription = wizard.complete().unwrap();

        assert_eq!(subscription.session, wizard.session_id());
        assert_eq!(received.lock().unwrap().as_slice(), &[subscription]);
        assert_eq!(wizard.current_step(), Step::SubscriptionTerm);
    }

    #[test]
    fn handler_failure_surfaces() {
        let config = WizardConfig::default();
        let mut wizard = Wizard::from_parts(
            Catalog::standard(),
            config,
            SelectionRules::new(config.policy),
            Box::new(|_: &Subscription| -> Result<(), String> { Err("offline".to_string()) }),
        );
        wizard.set_month("March").unwrap();
        wizard.set_category("City Compact").unwrap();
        wizard.set_term("6").unwrap();
        at_last_step(&mut wizard);

        match wizard.complete() {
            Err(CompletionError::Handler(message)) => assert_eq!(message, "offline"),
            other => panic!("Expected Handler error, got {other:?}"),
        }
    }
}
