/// Loan status of a single book on the shelf
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoanState {
    /// Book is on the shelf and can be borrowed
    #[default]
    Available,
    /// Book has been lent out and must be returned first
    OnLoan,
}

impl LoanState {
    /// Get the availability wording used in listings
    #[must_use]
    pub fn get_description(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnLoan => "not available",
        }
    }

    /// Whether the book is currently lent out
    #[must_use]
    pub fn is_on_loan(self) -> bool {
        matches!(self, Self::OnLoan)
    }
}
