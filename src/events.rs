use std::fmt;

/// Actions that can change the loan state of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoanAction {
    /// Lend an available book out
    Borrow,
    /// Bring a lent book back to the shelf
    Return,
}

impl fmt::Display for LoanAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Borrow => f.write_str("borrow"),
            Self::Return => f.write_str("return"),
        }
    }
}
