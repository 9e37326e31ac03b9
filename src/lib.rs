//! Car Subscription: a three-step subscription wizard.
//!
//! A user picks a delivery month, a car category and a subscription term,
//! then sees a summary. This crate holds everything except the pixels: the
//! static catalog, the wizard state machine and a presentation model a
//! rendering layer can draw from.
//!
//! # Core Concepts
//!
//! - **Step**: one of three sequential stages; the wizard never leaves 1..=3
//! - **Selection**: the value chosen on a step; a step is complete when its
//!   selection is non-empty
//! - **Catalog**: the immutable categories, months and terms on offer
//! - **Summary**: the read-only view of the final selections
//!
//! # Example
//!
//! ```rust
//! use car_subscription::wizard::{Outcome, Wizard, WizardEvent};
//!
//! let mut wizard = Wizard::new();
//!
//! for event in [
//!     WizardEvent::MonthSelected("March".to_string()),
//!     WizardEvent::NextClicked,
//!     WizardEvent::CategorySelected("City Compact".to_string()),
//!     WizardEvent::NextClicked,
//!     WizardEvent::TermSelected("6".to_string()),
//! ] {
//!     wizard.dispatch(event).unwrap();
//! }
//!
//! let summary = wizard.summary().unwrap();
//! assert_eq!(summary.delivery_month, "March");
//! assert_eq!(summary.car_category, "City Compact");
//! assert_eq!(summary.subscription_term_label.as_deref(), Some("6 months"));
//!
//! match wizard.dispatch(WizardEvent::CompleteClicked).unwrap() {
//!     Outcome::Completed(subscription) => assert_eq!(subscription.summary, summary),
//!     other => panic!("unexpected outcome: {other:?}"),
//! }
//! ```

pub mod builder;
pub mod catalog;
pub mod config;
pub mod core;
pub mod validation;
pub mod view;
pub mod wizard;

// Re-export commonly used types
pub use builder::{BuildError, WizardBuilder};
pub use catalog::Catalog;
pub use config::{SelectionPolicy, WizardConfig};
pub use crate::core::Step;
pub use wizard::{Summary, Wizard, WizardEvent};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Installs a global `tracing` subscriber honouring `RUST_LOG`, with
/// `car_subscription=info` as the default directive.
///
/// Safe to call more than once; only the first call has an effect. Does
/// nothing if another global subscriber is already installed.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::filter::Directive;
        use tracing_subscriber::{fmt, EnvFilter};

        let mut filter = EnvFilter::from_default_env();
        if let Ok(directive) = "car_subscription=info".parse::<Directive>() {
            filter = filter.add_directive(directive);
        }

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("Car subscription tracing initialized.");
        }
    });
}
