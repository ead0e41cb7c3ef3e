//! Main menu options and the dispatch table that turns menu answers into
//! desk commands.

use crate::catalog::{BookId, Category};

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    /// Borrow a book
    Borrow,
    /// Return a book
    Return,
    /// List every book on loan
    ListLoans,
    /// List availability of one category
    Availability,
    /// Leave the desk
    Exit,
}

impl MenuOption {
    /// Every option in menu order
    pub const ALL: [Self; 5] =
        [Self::Borrow, Self::Return, Self::ListLoans, Self::Availability, Self::Exit];

    /// Resolve a 1-based menu number into an option
    #[must_use]
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::Borrow),
            2 => Some(Self::Return),
            3 => Some(Self::ListLoans),
            4 => Some(Self::Availability),
            5 => Some(Self::Exit),
            _ => None,
        }
    }

    /// The 1-based number shown for this option
    #[must_use]
    pub fn choice(self) -> u8 {
        match self {
            Self::Borrow => 1,
            Self::Return => 2,
            Self::ListLoans => 3,
            Self::Availability => 4,
            Self::Exit => 5,
        }
    }

    /// Menu wording for this option
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Borrow => "Borrow a book",
            Self::Return => "Return a book",
            Self::ListLoans => "List active loans",
            Self::Availability => "List available books",
            Self::Exit => "Exit",
        }
    }

    /// Whether the option asks for a category next
    #[must_use]
    pub fn needs_category(self) -> bool {
        matches!(self, Self::Borrow | Self::Return | Self::Availability)
    }

    /// Whether the option asks for a book once a category is chosen
    #[must_use]
    pub fn needs_book(self) -> bool {
        matches!(self, Self::Borrow | Self::Return)
    }
}

/// A fully resolved request from the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Lend out the given book
    Borrow(BookId),
    /// Take back the given book
    Return(BookId),
    /// Show every book on loan
    ListLoans,
    /// Show availability of one category
    Availability(Category),
    /// Leave the desk
    Exit,
    /// `0` at the book prompt: go back to the menu
    Back,
    /// Category answer was not 1-3
    InvalidCategory,
    /// Book answer was not 0-3
    InvalidBook,
}

/// Resolve the answers given for one menu round into a command
///
/// `category` is `None` when the answer was not a known category and `book`
/// is `None` when the answer was not a number. Answers an option never asks
/// for are ignored.
#[must_use]
pub fn resolve(option: MenuOption, category: Option<Category>, book: Option<u8>) -> Command {
    match (option, category, book) {
        (MenuOption::ListLoans, _, _) => Command::ListLoans,
        (MenuOption::Exit, _, _) => Command::Exit,
        (MenuOption::Availability, Some(category), _) => Command::Availability(category),
        (MenuOption::Borrow | MenuOption::Return | MenuOption::Availability, None, _) => {
            Command::InvalidCategory
        }
        (MenuOption::Borrow | MenuOption::Return, Some(_), Some(0)) => Command::Back,
        (MenuOption::Borrow, Some(category), Some(number)) => {
            BookId::new(category, number).map_or(Command::InvalidBook, Command::Borrow)
        }
        (MenuOption::Return, Some(category), Some(number)) => {
            BookId::new(category, number).map_or(Command::InvalidBook, Command::Return)
        }
        (MenuOption::Borrow | MenuOption::Return, Some(_), None) => Command::InvalidBook,
    }
}
