use std::io;

use thiserror::Error;

use crate::catalog::BookId;

/// Rejections raised by the lending desk when an action does not apply
///
/// These are expected outcomes of user input and are shown to the user as
/// ordinary messages; none of them ends the session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LendingError {
    /// The book was borrowed earlier and has not been returned
    #[error("The book '{title}' is already on loan.")]
    AlreadyOnLoan {
        /// Title of the requested book
        title: &'static str,
    },
    /// The book is on the shelf, so there is nothing to return
    #[error(
        "The book '{title}' is not currently borrowed. Please check the book you want to return."
    )]
    NotBorrowed {
        /// Title of the requested book
        title: &'static str,
    },
    /// No book is shelved at the requested position
    #[error("No book is shelved at {0}.")]
    UnknownBook(BookId),
}

/// Failures of the terminal the desk talks through
#[derive(Debug, Error)]
pub enum DeskError {
    /// Reading the input stream or writing the output stream failed
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}
