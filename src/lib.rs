//! Console lending desk over a fixed catalog of nine books.
//!
//! A [`SessionGate`] checks credentials, then a [`LendingConsole`] drives a
//! [`LendingDesk`], the state machine that lends and takes back books.

pub mod book_state;
pub mod catalog;
pub mod config;
pub mod console;
pub mod desk;
pub mod error;
pub mod events;
pub mod gate;
pub mod menu;
pub mod observers;
pub mod prompt;
pub mod report;

pub use book_state::LoanState;
pub use catalog::{Book, BookId, Catalog, Category};
pub use config::DeskConfig;
pub use console::LendingConsole;
pub use desk::{LendingDesk, SessionSummary};
pub use error::{DeskError, LendingError};
pub use events::LoanAction;
pub use gate::{GateOutcome, SessionGate};
