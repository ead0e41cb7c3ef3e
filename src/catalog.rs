//! The fixed, compiled-in catalog of the lending desk.
//!
//! Three categories hold three books each. Titles and positions never change
//! during a session; only the [`LoanState`] of each book does.

use std::fmt;

use crate::book_state::LoanState;

/// Number of books shelved under every category
pub const BOOKS_PER_CATEGORY: usize = 3;

/// Titles on the science fiction shelf, in menu order
const SCIENCE_FICTION: [&str; BOOKS_PER_CATEGORY] = ["Dune", "Neuromancer", "Foundation"];

/// Titles on the young adult shelf, in menu order
const YOUNG_ADULT: [&str; BOOKS_PER_CATEGORY] =
    ["The Fault in Our Stars", "The Maze Runner", "Divergent"];

/// Titles on the children's shelf, in menu order
const CHILDRENS: [&str; BOOKS_PER_CATEGORY] = [
    "The Little Prince",
    "Where the Wild Things Are",
    "Harry Potter and the Sorcerer's Stone",
];

/// The three shelves of the desk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Science fiction
    ScienceFiction,
    /// Young adult fiction
    YoungAdult,
    /// Children's books
    Childrens,
}

impl Category {
    /// Every category in menu order
    pub const ALL: [Self; 3] = [Self::ScienceFiction, Self::YoungAdult, Self::Childrens];

    /// Resolve a 1-based menu number into a category
    #[must_use]
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Self::ScienceFiction),
            2 => Some(Self::YoungAdult),
            3 => Some(Self::Childrens),
            _ => None,
        }
    }

    /// The 1-based number shown for this category in menus
    #[must_use]
    pub fn choice(self) -> u8 {
        match self {
            Self::ScienceFiction => 1,
            Self::YoungAdult => 2,
            Self::Childrens => 3,
        }
    }

    /// Human-readable shelf name
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ScienceFiction => "Science fiction",
            Self::YoungAdult => "Young adult",
            Self::Childrens => "Children's",
        }
    }

    /// Titles shelved under this category, in menu order
    #[must_use]
    pub fn titles(self) -> [&'static str; BOOKS_PER_CATEGORY] {
        match self {
            Self::ScienceFiction => SCIENCE_FICTION,
            Self::YoungAdult => YOUNG_ADULT,
            Self::Childrens => CHILDRENS,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position of a book in the catalog
///
/// Only valid positions can be constructed, so a `BookId` always names
/// exactly one book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BookId {
    /// Shelf the book sits on
    category: Category,
    /// Zero-based position on the shelf
    slot: usize,
}

impl BookId {
    /// Build an id from a category and the 1-based number shown in menus
    #[must_use]
    pub fn new(category: Category, number: u8) -> Option<Self> {
        let slot = usize::from(number).checked_sub(1)?;
        (slot < BOOKS_PER_CATEGORY).then_some(Self { category, slot })
    }

    /// Shelf the book sits on
    #[must_use]
    pub fn category(self) -> Category {
        self.category
    }

    /// The 1-based number shown for this book in menus
    #[must_use]
    pub fn number(self) -> usize {
        self.slot.saturating_add(1)
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} #{}", self.category, self.number())
    }
}

/// A single book and its loan status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    /// Where the book is shelved
    id: BookId,
    /// Fixed title
    title: &'static str,
    /// Current loan status
    state: LoanState,
}

impl Book {
    /// Where the book is shelved
    #[must_use]
    pub fn id(&self) -> BookId {
        self.id
    }

    /// Fixed title
    #[must_use]
    pub fn title(&self) -> &'static str {
        self.title
    }

    /// Current loan status
    #[must_use]
    pub fn state(&self) -> LoanState {
        self.state
    }
}

/// The nine books of the desk with their loan status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    /// Science fiction shelf
    science_fiction: [Book; BOOKS_PER_CATEGORY],
    /// Young adult shelf
    young_adult: [Book; BOOKS_PER_CATEGORY],
    /// Children's shelf
    childrens: [Book; BOOKS_PER_CATEGORY],
}

/// Build a shelf with every book available
fn stock_shelf(category: Category) -> [Book; BOOKS_PER_CATEGORY] {
    let titles = category.titles();
    std::array::from_fn(|slot| Book {
        id: BookId { category, slot },
        title: titles.get(slot).copied().unwrap_or_default(),
        state: LoanState::Available,
    })
}

impl Catalog {
    /// Create the catalog with every book available
    #[must_use]
    pub fn new() -> Self {
        Self {
            science_fiction: stock_shelf(Category::ScienceFiction),
            young_adult: stock_shelf(Category::YoungAdult),
            childrens: stock_shelf(Category::Childrens),
        }
    }

    /// Books of one category in menu order
    #[must_use]
    pub fn shelf(&self, category: Category) -> &[Book] {
        match category {
            Category::ScienceFiction => &self.science_fiction,
            Category::YoungAdult => &self.young_adult,
            Category::Childrens => &self.childrens,
        }
    }

    /// Mutable access to the books of one category
    fn shelf_mut(&mut self, category: Category) -> &mut [Book] {
        match category {
            Category::ScienceFiction => &mut self.science_fiction,
            Category::YoungAdult => &mut self.young_adult,
            Category::Childrens => &mut self.childrens,
        }
    }

    /// Look up a book by position
    #[must_use]
    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.shelf(id.category).get(id.slot)
    }

    /// Overwrite the loan status of exactly one book
    ///
    /// Returns `false` when no book sits at `id`.
    pub(crate) fn set_state(&mut self, id: BookId, state: LoanState) -> bool {
        match self.shelf_mut(id.category).get_mut(id.slot) {
            Some(book) => {
                book.state = state;
                true
            }
            None => false,
        }
    }

    /// Every book in catalog order
    pub fn books(&self) -> impl Iterator<Item = &Book> {
        Category::ALL.into_iter().flat_map(move |category| self.shelf(category).iter())
    }

    /// Books currently lent out, in catalog order
    pub fn on_loan(&self) -> impl Iterator<Item = &Book> {
        self.books().filter(|book| book.state.is_on_loan())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
