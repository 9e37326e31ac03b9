//! Navigation buttons.

use crate::core::State;
use crate::wizard::Wizard;

/// The right-hand button: "Next" before the last step, "Complete
/// Subscription" on it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PrimaryAction {
    Next,
    Complete,
}

impl PrimaryAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Next => "Next",
            Self::Complete => "Complete Subscription",
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Controls {
    pub back_visible: bool,
    pub primary: PrimaryAction,
    /// Disabled while the current step has no selection.
    pub primary_enabled: bool,
}

impl Controls {
    pub fn of(wizard: &Wizard) -> Self {
        let step = wizard.current_step();
        Self {
            back_visible: !step.is_first(),
            primary: if step.is_last() {
                PrimaryAction::Complete
            } else {
                PrimaryAction::Next
            },
            primary_enabled: wizard.is_current_step_complete(),
        }
    }
}
