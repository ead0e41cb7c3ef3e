use std::{cell::RefCell, rc::Rc};

use rstest::rstest;

use crate::{
    book_state::LoanState,
    catalog::{Book, BookId, Category},
    desk::{LendingDesk, LoanTransition},
    error::LendingError,
    events::LoanAction,
    observers::LoanObserver,
};

/// Helper function to name a book by its menu position
#[allow(clippy::expect_used)]
fn book(category: Category, number: u8) -> BookId {
    BookId::new(category, number).expect("position should exist in the catalog")
}

/// Observer that records every transition it sees
#[derive(Debug, Default, Clone)]
struct Recorder(Rc<RefCell<Vec<LoanTransition>>>);

impl LoanObserver for Recorder {
    fn on_transition(&self, transition: &LoanTransition) {
        self.0.borrow_mut().push(transition.clone());
    }
}

#[test]
fn test_initial_state() {
    let desk = LendingDesk::new();

    assert_eq!(desk.loan_count(), 0);
    assert_eq!(desk.catalog().on_loan().count(), 0);
    assert_eq!(desk.history().count(), 0);
}

#[test]
fn test_borrow_marks_book_and_counts_loan() {
    let mut desk = LendingDesk::new();
    let dune = book(Category::ScienceFiction, 1);

    let result = desk.borrow(dune).map(Book::state);
    assert_eq!(result, Ok(LoanState::OnLoan));
    assert_eq!(desk.loan_count(), 1);
}

#[test]
fn test_double_borrow_is_rejected_without_mutation() {
    let mut desk = LendingDesk::new();
    let dune = book(Category::ScienceFiction, 1);
    assert!(desk.borrow(dune).is_ok());
    let before = desk.catalog().clone();

    // Borrowing the same book again must not touch anything
    let result = desk.borrow(dune);
    assert_eq!(result, Err(LendingError::AlreadyOnLoan { title: "Dune" }));
    assert_eq!(desk.loan_count(), 1);
    assert_eq!(*desk.catalog(), before);
    assert_eq!(desk.history().count(), 1);
}

#[test]
fn test_return_releases_book() {
    let mut desk = LendingDesk::new();
    let divergent = book(Category::YoungAdult, 3);
    assert!(desk.borrow(divergent).is_ok());

    let result = desk.return_book(divergent).map(Book::state);
    assert_eq!(result, Ok(LoanState::Available));
    assert_eq!(desk.loan_count(), 0);
}

#[test]
fn test_return_without_borrow_is_rejected() {
    let mut desk = LendingDesk::new();
    let neuromancer = book(Category::ScienceFiction, 2);

    let result = desk.return_book(neuromancer);
    assert_eq!(result, Err(LendingError::NotBorrowed { title: "Neuromancer" }));
    assert_eq!(desk.loan_count(), 0);
    assert_eq!(desk.catalog().on_loan().count(), 0);
}

#[rstest]
#[case(Category::ScienceFiction, 1, "Dune")]
#[case(Category::ScienceFiction, 2, "Neuromancer")]
#[case(Category::ScienceFiction, 3, "Foundation")]
#[case(Category::YoungAdult, 1, "The Fault in Our Stars")]
#[case(Category::YoungAdult, 2, "The Maze Runner")]
#[case(Category::YoungAdult, 3, "Divergent")]
#[case(Category::Childrens, 1, "The Little Prince")]
#[case(Category::Childrens, 2, "Where the Wild Things Are")]
#[case(Category::Childrens, 3, "Harry Potter and the Sorcerer's Stone")]
fn test_every_book_follows_the_same_guarded_policy(
    #[case] category: Category,
    #[case] number: u8,
    #[case] title: &'static str,
) {
    let mut desk = LendingDesk::new();
    let id = book(category, number);

    assert_eq!(desk.return_book(id), Err(LendingError::NotBorrowed { title }));
    assert_eq!(desk.loan_count(), 0);

    assert!(desk.borrow(id).is_ok());
    assert_eq!(desk.borrow(id), Err(LendingError::AlreadyOnLoan { title }));
    assert_eq!(desk.loan_count(), 1);

    // Only the targeted book is lent out
    let lent: Vec<_> = desk.catalog().on_loan().map(Book::title).collect();
    assert_eq!(lent, [title]);

    assert!(desk.return_book(id).is_ok());
    assert_eq!(desk.return_book(id), Err(LendingError::NotBorrowed { title }));
    assert_eq!(desk.loan_count(), 0);
}

#[test]
fn test_transition_table() {
    let desk = LendingDesk::new();

    assert_eq!(
        desk.transition_for(LoanAction::Borrow, LoanState::Available),
        Some(LoanState::OnLoan)
    );
    assert_eq!(
        desk.transition_for(LoanAction::Return, LoanState::OnLoan),
        Some(LoanState::Available)
    );
    assert_eq!(desk.transition_for(LoanAction::Borrow, LoanState::OnLoan), None);
    assert_eq!(desk.transition_for(LoanAction::Return, LoanState::Available), None);
}

#[test]
#[allow(clippy::expect_used)]
fn test_history_tracking() {
    let mut desk = LendingDesk::new();
    let prince = book(Category::Childrens, 1);

    // Initially empty history
    assert_eq!(desk.history().count(), 0);

    assert!(desk.borrow(prince).is_ok());
    assert!(desk.borrow(prince).is_err());
    assert!(desk.return_book(prince).is_ok());

    // Rejected actions are not recorded
    assert_eq!(desk.history().count(), 2);

    let first = desk.history().next().expect("History should have an entry");
    assert_eq!(first.book, prince);
    assert_eq!(first.title, "The Little Prince");
    assert_eq!(first.from, LoanState::Available);
    assert_eq!(first.to, LoanState::OnLoan);
    assert_eq!(first.action, LoanAction::Borrow);
}

#[test]
fn test_history_limit_drops_oldest() {
    let mut desk = LendingDesk::with_history_limit(2);
    let dune = book(Category::ScienceFiction, 1);
    let foundation = book(Category::ScienceFiction, 3);

    assert!(desk.borrow(dune).is_ok());
    assert!(desk.borrow(foundation).is_ok());
    assert!(desk.return_book(dune).is_ok());

    let kept: Vec<_> = desk.history().map(|t| (t.title, t.action)).collect();
    assert_eq!(kept, [("Foundation", LoanAction::Borrow), ("Dune", LoanAction::Return)]);

    // The summary still counts every applied transition
    let summary = desk.summary();
    assert_eq!(summary.transitions, 3);
    assert_eq!(summary.loan_count, 1);
}

#[test]
fn test_observers_see_applied_transitions_only() {
    let mut desk = LendingDesk::new();
    let recorder = Recorder::default();
    desk.register_observer(Box::new(recorder.clone()));
    let maze = book(Category::YoungAdult, 2);

    assert!(desk.return_book(maze).is_err());
    assert!(desk.borrow(maze).is_ok());
    assert!(desk.borrow(maze).is_err());

    let seen = recorder.0.borrow();
    assert_eq!(seen.len(), 1);
    assert!(seen.iter().all(|t| t.book == maze && t.to == LoanState::OnLoan));
}
