//! Property-based tests for the wizard state machine.
//!
//! These tests use proptest to drive wizards through random sequences of
//! operations and check that the navigation and completion rules hold.

use car_subscription::builder::{permissive_wizard, strict_wizard};
use car_subscription::catalog::MONTHS;
use car_subscription::core::{Direction, Step};
use car_subscription::wizard::Wizard;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Advance,
    Retreat,
    Month(String),
    Category(String),
    Term(String),
    Hover(Option<usize>),
}

fn selection_value() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        prop::sample::select(MONTHS.to_vec()).prop_map(str::to_string),
        prop::sample::select(vec!["Family SUV", "City Compact", "Premium Sport"])
            .prop_map(str::to_string),
        prop::sample::select(vec!["3", "6", "12", "24"]).prop_map(str::to_string),
        "[a-z0-9 ]{1,8}",
    ]
}

prop_compose! {
    fn arbitrary_op()(variant in 0..6u8, value in selection_value(), index in 0..6usize) -> Op {
        match variant {
            0 => Op::Advance,
            1 => Op::Retreat,
            2 => Op::Month(value),
            3 => Op::Category(value),
            4 => Op::Term(value),
            _ => Op::Hover(if index < 5 { Some(index) } else { None }),
        }
    }
}

fn apply(wizard: &mut Wizard, op: &Op) {
    // Strict wizards reject some values; rejection is part of what is tested.
    match op {
        Op::Advance => {
            wizard.advance();
        }
        Op::Retreat => {
            wizard.retreat();
        }
        Op::Month(v) => {
            let _ = wizard.set_month(v.clone());
        }
        Op::Category(v) => {
            let _ = wizard.set_category(v.clone());
        }
        Op::Term(v) => {
            let _ = wizard.set_term(v.clone());
        }
        Op::Hover(i) => {
            let _ = wizard.set_hovered_category(*i);
        }
    }
}

fn completion(wizard: &Wizard) -> Vec<bool> {
    (0..=5).map(|s| wizard.is_step_complete(s)).collect()
}

proptest! {
    #[test]
    fn step_stays_in_range(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut wizard = permissive_wizard();
        for op in &ops {
            apply(&mut wizard, op);
            let number = wizard.current_step().number();
            prop_assert!((1..=3).contains(&number));
        }
    }

    #[test]
    fn completion_matches_bound_field(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut wizard = permissive_wizard();
        for op in &ops {
            apply(&mut wizard, op);
        }

        let selections = wizard.selections();
        prop_assert_eq!(wizard.is_step_complete(1), !selections.month().is_empty());
        prop_assert_eq!(wizard.is_step_complete(2), !selections.category().is_empty());
        prop_assert_eq!(wizard.is_step_complete(3), !selections.term().is_empty());
        prop_assert!(!wizard.is_step_complete(0));
        prop_assert!(!wizard.is_step_complete(4));
    }

    #[test]
    fn hover_never_changes_completion(
        ops in prop::collection::vec(arbitrary_op(), 0..20),
        hover in prop::option::of(0..3usize),
    ) {
        let mut wizard = strict_wizard();
        for op in &ops {
            apply(&mut wizard, op);
        }

        let before = completion(&wizard);
        let step = wizard.current_step();
        wizard.set_hovered_category(hover).unwrap();

        prop_assert_eq!(completion(&wizard), before);
        prop_assert_eq!(wizard.current_step(), step);
        prop_assert_eq!(wizard.hovered_category(), hover);
    }

    #[test]
    fn boundary_navigation_is_a_no_op(ops in prop::collection::vec(arbitrary_op(), 0..20)) {
        let mut wizard = permissive_wizard();
        for op in &ops {
            apply(&mut wizard, op);
        }

        while wizard.retreat() {}
        let selections = wizard.selections().clone();
        let recorded = wizard.history().transitions().len();

        prop_assert!(!wizard.retreat());
        prop_assert_eq!(wizard.current_step(), Step::DeliveryMonth);
        prop_assert_eq!(wizard.selections(), &selections);
        prop_assert_eq!(wizard.history().transitions().len(), recorded);

        while wizard.advance() {}
        let recorded = wizard.history().transitions().len();

        prop_assert!(!wizard.advance());
        prop_assert_eq!(wizard.current_step(), Step::SubscriptionTerm);
        prop_assert_eq!(wizard.selections(), &selections);
        prop_assert_eq!(wizard.history().transitions().len(), recorded);
    }

    #[test]
    fn history_replays_to_current_step(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut wizard = permissive_wizard();
        for op in &ops {
            apply(&mut wizard, op);
        }

        let history = wizard.history();
        let forward = history.count(Direction::Forward) as i64;
        let backward = history.count(Direction::Backward) as i64;

        prop_assert_eq!(1 + forward - backward, i64::from(wizard.current_step().number()));
        if let Some(last) = history.last() {
            prop_assert_eq!(last.to, wizard.current_step());
        }
    }

    #[test]
    fn strict_selections_stay_in_catalog(ops in prop::collection::vec(arbitrary_op(), 0..40)) {
        let mut wizard = strict_wizard();
        for op in &ops {
            apply(&mut wizard, op);
        }

        let catalog = wizard.catalog();
        let selections = wizard.selections();
        prop_assert!(selections.month().is_empty() || catalog.has_month(selections.month()));
        prop_assert!(
            selections.category().is_empty() || catalog.category(selections.category()).is_some()
        );
        prop_assert!(selections.term().is_empty() || catalog.term(selections.term()).is_some());
        prop_assert!(wizard.hovered_category().is_none_or(|i| i < catalog.categories().len()));
    }

    #[test]
    fn summary_label_is_catalog_lookup(term in selection_value()) {
        let mut wizard = permissive_wizard();
        wizard.set_term(term.clone()).unwrap();
        wizard.advance();
        wizard.advance();

        match wizard.summary() {
            None => prop_assert!(term.is_empty()),
            Some(summary) => {
                let expected = wizard.catalog().term(&term).map(|t| t.label.clone());
                prop_assert_eq!(summary.subscription_term_label, expected);
            }
        }
    }
}
