use std::io::{self, Write};

use crate::{
    catalog::{Catalog, Category},
    menu::MenuOption,
};

/// Text rendering of menus and catalog listings
#[derive(Debug)]
pub struct Report;

impl Report {
    /// Write the main menu
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_main_menu<W: Write>(out: &mut W) -> io::Result<()> {
        writeln!(out, "Select an option:")?;
        for option in MenuOption::ALL {
            writeln!(out, "{}. {}", option.choice(), option.label())?;
        }
        Ok(())
    }

    /// Write the category menu under `heading`
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_category_menu<W: Write>(out: &mut W, heading: &str) -> io::Result<()> {
        writeln!(out, "{heading}")?;
        for category in Category::ALL {
            writeln!(out, "{}. {category}", category.choice())?;
        }
        Ok(())
    }

    /// Write the book menu of one shelf, with `0` to go back
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_book_menu<W: Write>(
        out: &mut W,
        catalog: &Catalog,
        category: Category,
    ) -> io::Result<()> {
        writeln!(out, "{category}:")?;
        writeln!(out, "0. Back")?;
        for book in catalog.shelf(category) {
            writeln!(out, "{}. {}", book.id().number(), book.title())?;
        }
        Ok(())
    }

    /// Write the title of every book on loan, in catalog order
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_active_loans<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
        writeln!(out, "Books on loan:")?;
        for book in catalog.on_loan() {
            writeln!(out, "{}", book.title())?;
        }
        Ok(())
    }

    /// Write whether each book of one shelf can be borrowed
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn write_availability<W: Write>(
        out: &mut W,
        catalog: &Catalog,
        category: Category,
    ) -> io::Result<()> {
        writeln!(out, "{category}:")?;
        for book in catalog.shelf(category) {
            writeln!(out, "{} is {}.", book.title(), book.state().get_description())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{book_state::LoanState, catalog::BookId};

    /// Render with `write` into a string
    fn render(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut out = Vec::new();
        assert!(write(&mut out).is_ok());
        String::from_utf8_lossy(&out).into_owned()
    }

    #[test]
    fn test_main_menu_lists_five_options() {
        let text = render(Report::write_main_menu);

        assert_eq!(text.lines().count(), 6);
        assert!(text.contains("1. Borrow a book"));
        assert!(text.contains("5. Exit"));
    }

    #[test]
    fn test_book_menu_offers_back() {
        let catalog = Catalog::new();
        let text = render(|out| Report::write_book_menu(out, &catalog, Category::ScienceFiction));

        assert_eq!(text, "Science fiction:\n0. Back\n1. Dune\n2. Neuromancer\n3. Foundation\n");
    }

    #[test]
    #[allow(clippy::expect_used)]
    fn test_availability_follows_loan_state() {
        let mut catalog = Catalog::new();
        let id = BookId::new(Category::Childrens, 2).expect("slot 2 exists");
        assert!(catalog.set_state(id, LoanState::OnLoan));

        let text = render(|out| Report::write_availability(out, &catalog, Category::Childrens));

        let lines: Vec<_> = text.lines().skip(1).collect();
        assert_eq!(
            lines,
            [
                "The Little Prince is available.",
                "Where the Wild Things Are is not available.",
                "Harry Potter and the Sorcerer's Stone is available.",
            ]
        );
    }

    #[test]
    fn test_active_loans_with_nothing_lent() {
        let catalog = Catalog::new();
        let text = render(|out| Report::write_active_loans(out, &catalog));

        assert_eq!(text, "Books on loan:\n");
    }
}
