use std::{
    collections::{HashMap, VecDeque},
    fmt,
    time::Instant,
};

use crate::{
    book_state::LoanState,
    catalog::{Book, BookId, Catalog},
    config::{DEFAULT_HISTORY_LIMIT, DeskConfig},
    error::LendingError,
    events::LoanAction,
    observers::LoanObserver,
};

/// Represents an applied loan transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanTransition {
    /// The book whose state changed
    pub book: BookId,
    /// Title of that book
    pub title: &'static str,
    /// The state before the transition
    pub from: LoanState,
    /// The state after the transition
    pub to: LoanState,
    /// The action that triggered the transition
    pub action: LoanAction,
    /// When the transition occurred
    pub at: Instant,
}

/// Totals reported when a session ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Net number of loans performed
    pub loan_count: i64,
    /// Transitions applied during the session
    pub transitions: usize,
}

/// Lending state machine over the fixed catalog
///
/// Owns the catalog, the session loan counter and the transition history for
/// one authenticated session.
pub struct LendingDesk {
    /// Loan status of every book
    catalog: Catalog,
    /// Allowed transitions keyed by action and current state
    transitions: HashMap<(LoanAction, LoanState), LoanState>,
    /// Net loans this session, incremented on borrow and decremented on return
    loan_count: i64,
    /// Applied transitions, oldest first
    history: VecDeque<LoanTransition>,
    /// Maximum number of history entries to keep
    max_history_size: usize,
    /// Total transitions applied, including ones dropped from history
    applied: usize,
    /// Registered transition observers
    observers: Vec<Box<dyn LoanObserver>>,
}

// Manual implementation of Debug for LendingDesk
impl fmt::Debug for LendingDesk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LendingDesk")
            .field("catalog", &self.catalog)
            .field("transitions", &self.transitions)
            .field("loan_count", &self.loan_count)
            .field("history", &self.history)
            .field("max_history_size", &self.max_history_size)
            .field("applied", &self.applied)
            .field("observers_count", &self.observers.len())
            .finish()
    }
}

impl LendingDesk {
    /// Create a desk with every book available and the default history size
    #[must_use]
    pub fn new() -> Self {
        Self::with_history_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create a desk using the settings from `config`
    #[must_use]
    pub fn with_config(config: &DeskConfig) -> Self {
        Self::with_history_limit(config.history_limit)
    }

    /// Create a desk that keeps at most `max_history_size` transitions
    #[must_use]
    pub fn with_history_limit(max_history_size: usize) -> Self {
        let transitions = HashMap::from([
            ((LoanAction::Borrow, LoanState::Available), LoanState::OnLoan),
            ((LoanAction::Return, LoanState::OnLoan), LoanState::Available),
        ]);

        Self {
            catalog: Catalog::new(),
            transitions,
            loan_count: 0,
            history: VecDeque::new(),
            max_history_size,
            applied: 0,
            observers: Vec::new(),
        }
    }

    /// Register an observer to be notified of applied transitions
    pub fn register_observer(&mut self, observer: Box<dyn LoanObserver>) {
        self.observers.push(observer);
    }

    /// The state `action` leads to from `state`, if the action applies at all
    #[must_use]
    pub fn transition_for(&self, action: LoanAction, state: LoanState) -> Option<LoanState> {
        self.transitions.get(&(action, state)).copied()
    }

    /// Apply `action` to exactly one book
    ///
    /// The transition table is consulted with the book's current state, so a
    /// borrow only succeeds on an available book and a return only on a book
    /// that is on loan. Rejected actions leave every book and the counter
    /// untouched.
    ///
    /// # Errors
    ///
    /// - `LendingError::AlreadyOnLoan` when borrowing a book that is lent out
    /// - `LendingError::NotBorrowed` when returning a book that is on the shelf
    /// - `LendingError::UnknownBook` when `id` names no book
    pub fn process(&mut self, action: LoanAction, id: BookId) -> Result<&Book, LendingError> {
        let book = self.catalog.book(id).ok_or(LendingError::UnknownBook(id))?;
        let from = book.state();
        let title = book.title();

        let Some(to) = self.transition_for(action, from) else {
            return Err(match action {
                LoanAction::Borrow => LendingError::AlreadyOnLoan { title },
                LoanAction::Return => LendingError::NotBorrowed { title },
            });
        };

        if !self.catalog.set_state(id, to) {
            return Err(LendingError::UnknownBook(id));
        }

        self.loan_count = match action {
            LoanAction::Borrow => self.loan_count.saturating_add(1),
            LoanAction::Return => self.loan_count.saturating_sub(1),
        };
        self.applied = self.applied.saturating_add(1);

        let transition = LoanTransition { book: id, title, from, to, action, at: Instant::now() };

        for observer in &self.observers {
            observer.on_transition(&transition);
        }

        self.history.push_back(transition);
        while self.history.len() > self.max_history_size {
            self.history.pop_front();
        }

        self.catalog.book(id).ok_or(LendingError::UnknownBook(id))
    }

    /// Lend out an available book
    ///
    /// # Errors
    ///
    /// See [`LendingDesk::process`].
    pub fn borrow(&mut self, id: BookId) -> Result<&Book, LendingError> {
        self.process(LoanAction::Borrow, id)
    }

    /// Take back a book that is on loan
    ///
    /// # Errors
    ///
    /// See [`LendingDesk::process`].
    pub fn return_book(&mut self, id: BookId) -> Result<&Book, LendingError> {
        self.process(LoanAction::Return, id)
    }

    /// Current loan status of the whole catalog
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Net loans performed this session
    #[must_use]
    pub fn loan_count(&self) -> i64 {
        self.loan_count
    }

    /// Applied transitions still kept in history, oldest first
    pub fn history(&self) -> impl Iterator<Item = &LoanTransition> {
        self.history.iter()
    }

    /// Totals for the end-of-session report
    #[must_use]
    pub fn summary(&self) -> SessionSummary {
        SessionSummary { loan_count: self.loan_count, transitions: self.applied }
    }
}

impl Default for LendingDesk {
    fn default() -> Self {
        Self::new()
    }
}

// Include tests module
#[cfg(test)]
mod tests;
