//! Hand-off point for completed subscriptions.
//!
//! The wizard does not submit anything itself. When the user completes the
//! last step it passes a [`Subscription`] to a handler; what happens next
//! (logging, a submission service, a test double) is up to the handler.

use super::summary::Subscription;

/// Receives completed subscriptions.
///
/// Closures of the form `FnMut(&Subscription) -> Result<(), String>`
/// implement this trait, which makes test doubles one-liners.
///
/// ```rust
/// use car_subscription::wizard::{CompletionHandler, Subscription, Summary};
///
/// fn submit(handler: &mut dyn CompletionHandler, subscription: &Subscription) -> bool {
///     handler.complete(subscription).is_ok()
/// }
///
/// let subscription = Subscription {
///     session: uuid::Uuid::new_v4(),
///     summary: Summary {
///         delivery_month: "March".to_string(),
///         car_category: "City Compact".to_string(),
///         subscription_term_label: Some("6 months".to_string()),
///     },
///     completed_at: chrono::Utc::now(),
/// };
///
/// let mut submitted = Vec::new();
/// let mut handler = |s: &Subscription| -> Result<(), String> {
///     submitted.push(s.summary.car_category.clone());
///     Ok(())
/// };
/// assert!(submit(&mut handler, &subscription));
/// assert_eq!(submitted, ["City Compact"]);
/// ```
pub trait CompletionHandler {
    fn complete(&mut self, subscription: &Subscription) -> Result<(), String>;
}

impl<F> CompletionHandler for F
where
    F: FnMut(&Subscription) -> Result<(), String>,
{
    fn complete(&mut self, subscription: &Subscription) -> Result<(), String> {
        self(subscription)
    }
}

/// Default handler: logs the subscription and accepts it.
#[derive(Clone, Copy, Default, Debug)]
pub struct LogCompletion;

impl CompletionHandler for LogCompletion {
    fn complete(&mut self, subscription: &Subscription) -> Result<(), String> {
        let summary = &subscription.summary;
        tracing::info!(
            session = %subscription.session,
            delivery_month = %summary.delivery_month,
            car_category = %summary.car_category,
            term = summary.subscription_term_label.as_deref().unwrap_or_default(),
            "Subscription completed"
        );
        Ok(())
    }
}
