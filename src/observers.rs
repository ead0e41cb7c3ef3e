use tracing::debug;

use crate::desk::LoanTransition;

/// Trait for loan state observation
pub trait LoanObserver {
    /// Called after a transition has been applied to the catalog
    fn on_transition(&self, transition: &LoanTransition);
}

/// Logs every applied transition through `tracing`
#[derive(Debug)]
pub struct TransitionLogger;

impl LoanObserver for TransitionLogger {
    fn on_transition(&self, transition: &LoanTransition) {
        debug!(
            book = %transition.book,
            title = transition.title,
            action = %transition.action,
            from = ?transition.from,
            to = ?transition.to,
            "loan state changed"
        );
    }
}
