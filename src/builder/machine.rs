//! Builder for constructing wizards.

use crate::builder::error::BuildError;
use crate::catalog::Catalog;
use crate::config::{SelectionPolicy, WizardConfig};
use crate::validation::{SelectionContext, SelectionRules};
use crate::wizard::{CompletionHandler, LogCompletion, Wizard};

type ExtraCheck = (Box<dyn Fn(&SelectionContext<'_>) -> bool + Send + Sync>, String);

/// Builder for constructing wizards with a fluent API.
///
/// Every setting is optional: an untouched builder produces the same wizard
/// as [`Wizard::new`].
///
/// ```rust
/// use car_subscription::builder::WizardBuilder;
/// use car_subscription::config::SelectionPolicy;
///
/// let mut wizard = WizardBuilder::new()
///     .policy(SelectionPolicy::Permissive)
///     .record_history(false)
///     .build()
///     .unwrap();
///
/// wizard.set_term("99").unwrap();
/// wizard.advance();
/// assert!(wizard.history().is_empty());
/// ```
pub struct WizardBuilder {
    catalog: Option<Catalog>,
    config: WizardConfig,
    handler: Option<Box<dyn CompletionHandler>>,
    checks: Vec<ExtraCheck>,
}

impl WizardBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            catalog: None,
            config: WizardConfig::default(),
            handler: None,
            checks: Vec::new(),
        }
    }

    /// Start from a JSON configuration (see [`WizardConfig`]).
    pub fn from_config_json(json: &str) -> Result<Self, BuildError> {
        Ok(Self::new().config(WizardConfig::from_json(json)?))
    }

    /// Use a catalog other than the standard one.
    pub fn catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    pub fn policy(mut self, policy: SelectionPolicy) -> Self {
        self.config.policy = policy;
        self
    }

    pub fn record_history(mut self, record: bool) -> Self {
        self.config.record_history = record;
        self
    }

    /// Handler receiving completed subscriptions (defaults to logging).
    pub fn on_complete<H>(mut self, handler: H) -> Self
    where
        H: CompletionHandler + 'static,
    {
        self.handler = Some(Box::new(handler));
        self
    }

    /// Extra rule checked, together with the built-in ones, before a
    /// subscription is completed.
    pub fn require_pred<F>(mut self, predicate: F, error_msg: impl Into<String>) -> Self
    where
        F: Fn(&SelectionContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.checks.push((Box::new(predicate), error_msg.into()));
        self
    }

    /// Build the wizard.
    /// Returns an error if the catalog fails its checks.
    pub fn build(self) -> Result<Wizard, BuildError> {
        let catalog = self.catalog.unwrap_or_default();
        catalog.check()?;

        let rules = self
            .checks
            .into_iter()
            .fold(SelectionRules::new(self.config.policy), |rules, (check, msg)| {
                rules.require_pred(check, msg)
            });
        let handler = self.handler.unwrap_or_else(|| Box::new(LogCompletion));

        Ok(Wizard::from_parts(catalog, self.config, rules, handler))
    }
}

impl Default for WizardBuilder {
    fn default() -> Self {
        Self::new()
    }
}
