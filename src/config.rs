//! Wizard configuration.
//!
//! A wizard is configured by value: the selection policy and whether
//! navigation is recorded. Configuration can be built in code or read from
//! JSON; missing fields take their defaults.
//!
//! ```rust
//! use car_subscription::config::{SelectionPolicy, WizardConfig};
//!
//! let config = WizardConfig::from_json(r#"{ "policy": "permissive" }"#).unwrap();
//! assert_eq!(config.policy, SelectionPolicy::Permissive);
//! assert!(config.record_history);
//! ```

use serde::{Deserialize, Serialize};

/// How setters treat values that are not catalog keys.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Store any string; unknown keys only surface as a missing summary label.
    Permissive,
    /// Reject unknown keys and leave the selection unchanged.
    #[default]
    Strict,
}

/// Settings applied when a wizard is built.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardConfig {
    pub policy: SelectionPolicy,
    /// Record every effective step change in the wizard's history.
    pub record_history: bool,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self {
            policy: SelectionPolicy::default(),
            record_history: true,
        }
    }
}

impl WizardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
