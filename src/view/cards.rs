//! Category cards and dropdown options.

use crate::catalog::{CarCategory, CarModel};
use crate::wizard::Wizard;

/// A category card as the grid should draw it.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CategoryCard<'a> {
    pub index: usize,
    pub category: &'a CarCategory,
    /// Card title equals the selected category.
    pub selected: bool,
    /// Models revealed over the card image while it is hovered.
    pub preview: Option<&'a [CarModel]>,
}

pub fn category_cards(wizard: &Wizard) -> Vec<CategoryCard<'_>> {
    let selected = wizard.selections().category();
    wizard
        .catalog()
        .categories()
        .iter()
        .enumerate()
        .map(|(index, category)| CategoryCard {
            index,
            category,
            selected: category.title == selected,
            preview: wizard
                .hover()
                .is_hovered(index)
                .then_some(category.possible_models.as_slice()),
        })
        .collect()
}

/// One entry of a dropdown.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SelectOption<'a> {
    pub value: &'a str,
    pub label: &'a str,
    pub selected: bool,
}

pub fn month_options(wizard: &Wizard) -> Vec<SelectOption<'_>> {
    let current = wizard.selections().month();
    wizard
        .catalog()
        .months()
        .iter()
        .map(|month| SelectOption {
            value: month,
            label: month,
            selected: month == current,
        })
        .collect()
}

pub fn term_options(wizard: &Wizard) -> Vec<SelectOption<'_>> {
    let current = wizard.selections().term();
    wizard
        .catalog()
        .terms()
        .iter()
        .map(|term| SelectOption {
            value: &term.value,
            label: &term.label,
            selected: term.value == current,
        })
        .collect()
}
