//! Presentation model of the wizard page.
//!
//! Everything a rendering layer needs to draw the wizard, derived purely
//! from a [`Wizard`]: the progress indicator, the current step's heading and
//! body, which buttons are shown and enabled, and the summary. Nothing here
//! mutates the wizard.
//!
//! `PageView` also implements `Display` as a plain-text rendering, which is
//! enough for terminals and snapshot-style tests.
//!
//! # Example
//!
//! ```rust
//! use car_subscription::view::{PageView, StepBody};
//! use car_subscription::wizard::Wizard;
//!
//! let wizard = Wizard::new();
//! let page = PageView::of(&wizard);
//!
//! assert_eq!(page.heading, "Step 1: Choose Your Delivery Month");
//! assert!(matches!(page.body, StepBody::MonthSelect { .. }));
//! assert!(!page.controls.primary_enabled);
//! assert!(page.summary.is_none());
//! ```

mod cards;
mod controls;
mod indicator;

pub use cards::{category_cards, month_options, term_options, CategoryCard, SelectOption};
pub use controls::{Controls, PrimaryAction};
pub use indicator::{heading, placeholder, step_indicator, StepBadge};

use crate::core::Step;
use crate::wizard::{Summary, Wizard};
use std::fmt;

pub const PAGE_TITLE: &str = "Subscribe to Your Surprise Car";
pub const PAGE_SUBTITLE: &str = "Follow these 3 simple steps to get your perfect car subscription";

/// Content area of the current step.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum StepBody<'a> {
    MonthSelect {
        placeholder: &'static str,
        options: Vec<SelectOption<'a>>,
    },
    CategoryGrid {
        cards: Vec<CategoryCard<'a>>,
    },
    TermSelect {
        placeholder: &'static str,
        options: Vec<SelectOption<'a>>,
    },
}

/// The whole page for one wizard state.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PageView<'a> {
    pub indicator: [StepBadge; 3],
    pub heading: &'static str,
    pub body: StepBody<'a>,
    pub controls: Controls,
    /// Present only on the last step once a term is selected.
    pub summary: Option<Summary>,
}

impl<'a> PageView<'a> {
    pub fn of(wizard: &'a Wizard) -> Self {
        let step = wizard.current_step();
        let body = match step {
            Step::DeliveryMonth => StepBody::MonthSelect {
                placeholder: placeholder(step).unwrap_or_default(),
                options: month_options(wizard),
            },
            Step::CarCategory => StepBody::CategoryGrid {
                cards: category_cards(wizard),
            },
            Step::SubscriptionTerm => StepBody::TermSelect {
                placeholder: placeholder(step).unwrap_or_default(),
                options: term_options(wizard),
            },
        };

        Self {
            indicator: step_indicator(step),
            heading: heading(step),
            body,
            controls: Controls::of(wizard),
            summary: wizard.summary(),
        }
    }
}

impl fmt::Display for PageView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{PAGE_TITLE}")?;
        writeln!(f, "{PAGE_SUBTITLE}")?;
        writeln!(f)?;

        for badge in &self.indicator {
            if badge.active {
                write!(f, "[{}]", badge.number)?;
            } else {
                write!(f, " {} ", badge.number)?;
            }
            match badge.connector {
                Some(true) => write!(f, "===")?,
                Some(false) => write!(f, "---")?,
                None => writeln!(f)?,
            }
        }
        writeln!(f)?;
        writeln!(f, "{}", self.heading)?;

        match &self.body {
            StepBody::MonthSelect {
                placeholder,
                options,
            }
            | StepBody::TermSelect {
                placeholder,
                options,
            } => {
                let chosen = options.iter().find(|o| o.selected).map(|o| o.label);
                writeln!(f, "  < {} >", chosen.unwrap_or(*placeholder))?;
                for option in options {
                    let mark = if option.selected { '*' } else { ' ' };
                    writeln!(f, "  {mark} {}", option.label)?;
                }
            }
            StepBody::CategoryGrid { cards } => {
                for card in cards {
                    let category = card.category;
                    let mark = if card.selected { '*' } else { ' ' };
                    writeln!(f, "  {mark} {} ({})", category.title, category.price_range)?;
                    writeln!(f, "      {}", category.description)?;
                    writeln!(
                        f,
                        "      {} | {} | {}",
                        category.specs.seats, category.specs.fuel, category.specs.body_type
                    )?;
                    if let Some(models) = card.preview {
                        let names: Vec<_> = models.iter().map(|m| m.name.as_str()).collect();
                        writeln!(f, "      Possible Models: {}", names.join(", "))?;
                    }
                }
            }
        }

        writeln!(f)?;
        if self.controls.back_visible {
            write!(f, "[Back] ")?;
        }
        let primary = self.controls.primary.label();
        if self.controls.primary_enabled {
            writeln!(f, "[{primary}]")?;
        } else {
            writeln!(f, "({primary})")?;
        }

        if let Some(summary) = &self.summary {
            writeln!(f)?;
            writeln!(f, "{summary}")?;
        }
        Ok(())
    }
}
