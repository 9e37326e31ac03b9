//! Step indicator and per-step copy.

use crate::core::Step;

/// One numbered badge of the progress indicator.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct StepBadge {
    pub number: u8,
    /// Badge is highlighted: the wizard has reached this step.
    pub active: bool,
    /// Connector drawn after the badge, `Some(filled)`; the last badge has none.
    pub connector: Option<bool>,
}

pub fn step_indicator(current: Step) -> [StepBadge; 3] {
    Step::ALL.map(|step| StepBadge {
        number: step.number(),
        active: current >= step,
        connector: step.next().map(|_| current > step),
    })
}

pub fn heading(step: Step) -> &'static str {
    match step {
        Step::DeliveryMonth => "Step 1: Choose Your Delivery Month",
        Step::CarCategory => "Step 2: Choose Your Car Category",
        Step::SubscriptionTerm => "Step 3: Choose Your Subscription Term",
    }
}

/// Placeholder of the dropdown shown on `step`; the category step has none.
pub fn placeholder(step: Step) -> Option<&'static str> {
    match step {
        Step::DeliveryMonth => Some("Select delivery month"),
        Step::CarCategory => None,
        Step::SubscriptionTerm => Some("Select subscription term"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_step_lights_one_badge() {
        let badges = step_indicator(Step::DeliveryMonth);
        assert_eq!(
            badges.map(|b| (b.active, b.connector)),
            [(true, Some(false)), (false, Some(false)), (false, None)]
        );
    }

    #[test]
    fn last_step_fills_every_connector() {
        let badges = step_indicator(Step::SubscriptionTerm);
        assert!(badges.iter().all(|b| b.active));
        assert_eq!(
            badges.map(|b| b.connector),
            [Some(true), Some(true), None]
        );
    }

    #[test]
    fn middle_step_fills_first_connector_only() {
        let badges = step_indicator(Step::CarCategory);
        assert_eq!(badges.map(|b| b.number), [1, 2, 3]);
        assert_eq!(
            badges.map(|b| (b.active, b.connector)),
            [(true, Some(true)), (true, Some(false)), (false, None)]
        );
    }

    #[test]
    fn copy_per_step() {
        assert_eq!(
            heading(Step::CarCategory),
            "Step 2: Choose Your Car Category"
        );
        assert_eq!(placeholder(Step::CarCategory), None);
        assert_eq!(
            placeholder(Step::SubscriptionTerm),
            Some("Select subscription term")
        );
    }
}
