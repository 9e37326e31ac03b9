//! The three wizard steps.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three sequential stages of the subscription wizard.
///
/// Steps are numbered 1 to 3. There is no step outside that range, so the
/// wizard's position can never drift below the first or past the last step.
///
/// # Example
///
/// ```rust
/// use car_subscription::core::{State, Step};
///
/// assert_eq!(Step::DeliveryMonth.number(), 1);
/// assert_eq!(Step::from_number(2), Some(Step::CarCategory));
/// assert_eq!(Step::from_number(4), None);
/// assert_eq!(Step::SubscriptionTerm.next(), None);
/// assert!(Step::DeliveryMonth.is_first());
/// ```
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize,
)]
pub enum Step {
    #[default]
    DeliveryMonth,
    CarCategory,
    SubscriptionTerm,
}

impl Step {
    /// Every step in flow order.
    pub const ALL: [Step; 3] = [Step::DeliveryMonth, Step::CarCategory, Step::SubscriptionTerm];

    /// 1-based position of the step.
    pub fn number(self) -> u8 {
        match self {
            Self::DeliveryMonth => 1,
            Self::CarCategory => 2,
            Self::SubscriptionTerm => 3,
        }
    }

    /// Step at a 1-based position, `None` outside 1..=3.
    pub fn from_number(number: u8) -> Option<Step> {
        match number {
            1 => Some(Self::DeliveryMonth),
            2 => Some(Self::CarCategory),
            3 => Some(Self::SubscriptionTerm),
            _ => None,
        }
    }

    pub fn next(self) -> Option<Step> {
        Self::from_number(self.number() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }
}

impl State for Step {
    fn name(&self) -> &str {
        match self {
            Self::DeliveryMonth => "DeliveryMonth",
            Self::CarCategory => "CarCategory",
            Self::SubscriptionTerm => "SubscriptionTerm",
        }
    }

    fn is_first(&self) -> bool {
        self.previous().is_none()
    }

    fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.number(), self.name())
    }
}
