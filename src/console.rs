//! Menu loop of the lending desk.
//!
//! Every round shows the main menu, collects the answers the chosen option
//! needs, resolves them into a [`Command`] and only then touches the desk.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, info};

use crate::{
    catalog::{BookId, Category},
    desk::{LendingDesk, SessionSummary},
    error::DeskError,
    events::LoanAction,
    menu::{self, Command, MenuOption},
    prompt,
    report::Report,
};

/// Whether the loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    /// Show the menu again
    Continue,
    /// Leave the loop
    Exit,
}

/// Interactive console over a line input and a text output
#[derive(Debug)]
pub struct LendingConsole<R, W> {
    /// Where answers are read from
    input: R,
    /// Where menus and outcomes are written
    output: W,
}

impl<R: BufRead, W: Write> LendingConsole<R, W> {
    /// Create a console over the given streams
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output stream
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user exits or input ends
    ///
    /// Prints the number of loans performed this session before returning.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Io` if the console cannot be read or written.
    pub fn run(&mut self, desk: &mut LendingDesk) -> Result<SessionSummary, DeskError> {
        info!("lending session opened");

        loop {
            Report::write_main_menu(&mut self.output)?;
            let Some(answer) = prompt::read_line(&mut self.input)? else {
                debug!("input ended at the main menu");
                break;
            };

            let Some(option) = prompt::parse_choice(&answer).and_then(MenuOption::from_choice)
            else {
                writeln!(
                    self.output,
                    "{}",
                    "Invalid option. Please select an option from the menu.".yellow()
                )?;
                continue;
            };

            let Some(command) = self.select(option, desk)? else {
                debug!(?option, "input ended during selection");
                break;
            };

            if self.execute(command, desk)? == Flow::Exit {
                break;
            }
        }

        let summary = desk.summary();
        info!(
            loan_count = summary.loan_count,
            transitions = summary.transitions,
            "lending session closed"
        );
        writeln!(
            self.output,
            "{}",
            format!("Number of loans performed this session: {}", summary.loan_count).bold()
        )?;
        Ok(summary)
    }

    /// Collect the answers `option` needs and resolve them
    ///
    /// Returns `None` when input ends before the answers are complete.
    fn select(
        &mut self,
        option: MenuOption,
        desk: &LendingDesk,
    ) -> Result<Option<Command>, DeskError> {
        if !option.needs_category() {
            return Ok(Some(menu::resolve(option, None, None)));
        }

        let heading = match option {
            MenuOption::Return => "Select the category of the book you want to return:",
            MenuOption::Availability => "Available books by category:",
            _ => "The available book categories are:",
        };
        Report::write_category_menu(&mut self.output, heading)?;
        let Some(answer) = prompt::read_line(&mut self.input)? else {
            return Ok(None);
        };
        let category = prompt::parse_choice(&answer).and_then(Category::from_choice);

        let book = match category {
            Some(category) if option.needs_book() => {
                Report::write_book_menu(&mut self.output, desk.catalog(), category)?;
                let Some(answer) = prompt::read_line(&mut self.input)? else {
                    return Ok(None);
                };
                prompt::parse_choice(&answer)
            }
            _ => None,
        };

        Ok(Some(menu::resolve(option, category, book)))
    }

    /// Carry out one resolved command
    fn execute(&mut self, command: Command, desk: &mut LendingDesk) -> Result<Flow, DeskError> {
        match command {
            Command::Borrow(id) => self.apply(desk, LoanAction::Borrow, id)?,
            Command::Return(id) => self.apply(desk, LoanAction::Return, id)?,
            Command::ListLoans => Report::write_active_loans(&mut self.output, desk.catalog())?,
            Command::Availability(category) => {
                Report::write_availability(&mut self.output, desk.catalog(), category)?;
            }
            Command::Back => writeln!(self.output, "Returning to the main menu.")?,
            Command::InvalidCategory => writeln!(self.output, "{}", "Invalid category.".yellow())?,
            Command::InvalidBook => writeln!(self.output, "{}", "Invalid book option.".yellow())?,
            Command::Exit => {
                writeln!(
                    self.output,
                    "Leaving the system. Thank you for using the virtual library."
                )?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Run a borrow or return against the desk and report the outcome
    fn apply(
        &mut self,
        desk: &mut LendingDesk,
        action: LoanAction,
        id: BookId,
    ) -> Result<(), DeskError> {
        match desk.process(action, id) {
            Ok(book) => {
                let message = match action {
                    LoanAction::Borrow => format!("You have borrowed '{}'.", book.title()),
                    LoanAction::Return => format!("You have returned '{}'.", book.title()),
                };
                writeln!(self.output, "{}", message.green())?;
            }
            Err(rejection) => {
                debug!(%id, %action, %rejection, "loan action rejected");
                writeln!(self.output, "{}", rejection.to_string().yellow())?;
            }
        }
        Ok(())
    }
}
