//! Subscription Walkthrough
//!
//! This example drives the wizard with a scripted sequence of UI events and
//! prints the page after each one, the way a terminal front end would.
//!
//! Key concepts:
//! - Events go through `dispatch`, which ignores disabled buttons
//! - The page is derived from wizard state on every render
//! - Completion hands the subscription to an injected handler
//!
//! Run with: RUST_LOG=car_subscription=debug cargo run --example subscription_walkthrough

use car_subscription::view::PageView;
use car_subscription::wizard::{Outcome, Subscription, WizardEvent};
use car_subscription::WizardBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    car_subscription::init();

    println!("=== Car Subscription Wizard ===\n");

    let mut wizard = WizardBuilder::new()
        .on_complete(|s: &Subscription| -> Result<(), String> {
            println!("Submitting subscription {}:", s.session);
            println!("{}", serde_json::to_string_pretty(s).map_err(|e| e.to_string())?);
            Ok(())
        })
        .build()?;

    let script = [
        WizardEvent::NextClicked,
        WizardEvent::MonthSelected("March".to_string()),
        WizardEvent::NextClicked,
        WizardEvent::CardHoverEnter(1),
        WizardEvent::CategorySelected("City Compact".to_string()),
        WizardEvent::CardHoverExit,
        WizardEvent::NextClicked,
        WizardEvent::TermSelected("6".to_string()),
        WizardEvent::CompleteClicked,
    ];

    for event in script {
        println!(">>> {event:?}");
        match wizard.dispatch(event)? {
            Outcome::Applied => println!("{}", PageView::of(&wizard)),
            Outcome::Ignored => println!("(control disabled, nothing happened)\n"),
            Outcome::Completed(subscription) => {
                println!("\nCompleted at {}", subscription.completed_at);
            }
        }
    }

    println!("\nSteps visited:");
    for step in wizard.history().get_path() {
        println!("  {step}");
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
