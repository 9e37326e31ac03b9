//! Validation rules for a complete set of selections.

use crate::catalog::Catalog;
use crate::config::SelectionPolicy;
use crate::core::Step;
use crate::validation::violations::SelectionViolation;
use crate::wizard::Selections;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// What a selection check sees.
#[derive(Clone, Copy, Debug)]
pub struct SelectionContext<'a> {
    pub selections: &'a Selections,
    pub catalog: &'a Catalog,
}

/// Type alias for custom selection check functions
pub type SelectionCheck = Box<
    dyn Fn(&SelectionContext<'_>) -> Validation<(), NonEmptyVec<SelectionViolation>> + Send + Sync,
>;

/// Rules applied to the selections before a subscription is completed.
/// Uses Validation to accumulate ALL violations.
pub struct SelectionRules {
    policy: SelectionPolicy,
    required_checks: Vec<SelectionCheck>,
}

impl SelectionRules {
    pub fn new(policy: SelectionPolicy) -> Self {
        Self {
            policy,
            required_checks: Vec::new(),
        }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&SelectionContext<'_>) -> Validation<(), NonEmptyVec<SelectionViolation>>
            + Send
            + Sync
            + 'static,
    {
        self.required_checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&SelectionContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &SelectionContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(SelectionViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.required_checks.push(Box::new(check));
        self
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    /// Check every step's selection (Strict only), then run custom checks.
    /// Returns Validation::Failure with ALL violations if any fail.
    pub fn enforce(
        &self,
        context: &SelectionContext<'_>,
    ) -> Validation<(), NonEmptyVec<SelectionViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<SelectionViolation>>> =
            match self.policy {
                SelectionPolicy::Strict => Step::ALL
                    .iter()
                    .map(|step| self.check_step(*step, context))
                    .collect(),
                SelectionPolicy::Permissive => Vec::new(),
            };

        for check_fn in &self.required_checks {
            checks.push(check_fn(context));
        }
        if checks.is_empty() {
            return Validation::success(());
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Run [`enforce`](Self::enforce) and flatten failures into a list.
    pub fn violations(&self, context: &SelectionContext<'_>) -> Vec<SelectionViolation> {
        match self.enforce(context) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().cloned().collect(),
        }
    }

    fn check_step(
        &self,
        step: Step,
        context: &SelectionContext<'_>,
    ) -> Validation<(), NonEmptyVec<SelectionViolation>> {
        let value = context.selections.value(step);
        if value.is_empty() {
            return Validation::fail(SelectionViolation::Missing { step });
        }
        if is_known(context.catalog, step, value) {
            Validation::success(())
        } else {
            Validation::fail(SelectionViolation::Unknown {
                step,
                value: value.to_string(),
            })
        }
    }
}

/// Whether `value` is a selection key of the catalog list bound to `step`.
pub fn is_known(catalog: &Catalog, step: Step, value: &str) -> bool {
    match step {
        Step::DeliveryMonth => catalog.has_month(value),
        Step::CarCategory => catalog.category(value).is_some(),
        Step::SubscriptionTerm => catalog.term(value).is_some(),
    }
}
