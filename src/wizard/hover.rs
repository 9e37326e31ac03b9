//! Transient hover state for category cards.

/// Which category card the pointer is over, if any.
///
/// Kept apart from [`Selections`](super::Selections): hovering is a
/// rendering hint and never counts towards completing a step.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct HoverState {
    category: Option<usize>,
}

impl HoverState {
    pub fn category(&self) -> Option<usize> {
        self.category
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.category == Some(index)
    }

    pub(crate) fn set(&mut self, index: Option<usize>) {
        self.category = index;
    }
}
