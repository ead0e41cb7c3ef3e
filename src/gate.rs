//! Credential check guarding the lending console.

use std::io::{BufRead, Write};

use colored::Colorize;
use tracing::{debug, warn};

use crate::{
    config::{Credentials, DeskConfig},
    error::DeskError,
    prompt,
};

/// How a login round ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateOutcome {
    /// Credentials matched; the console may be opened
    Granted {
        /// The name the user logged in with
        username: String,
    },
    /// Every allowed attempt failed
    LockedOut {
        /// Number of failed attempts
        attempts: u8,
    },
    /// Input ended before a successful login
    Abandoned,
}

/// Prompts for credentials until they match or attempts run out
#[derive(Debug, Clone)]
pub struct SessionGate {
    /// Accepted credential pair
    credentials: Credentials,
    /// Failed attempts allowed before lockout
    max_attempts: u8,
}

impl SessionGate {
    /// Create a gate from the desk settings
    #[must_use]
    pub fn new(config: &DeskConfig) -> Self {
        Self { credentials: config.credentials.clone(), max_attempts: config.max_login_attempts }
    }

    /// Run the login prompts
    ///
    /// Each attempt asks for a username and then a password. Wrong pairs are
    /// reported together with the attempts left; once all attempts fail a
    /// lockout message is written and `GateOutcome::LockedOut` is returned.
    ///
    /// # Errors
    ///
    /// Returns `DeskError::Io` if the console cannot be read or written.
    pub fn authenticate<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<GateOutcome, DeskError> {
        let mut attempts: u8 = 0;

        while attempts < self.max_attempts {
            let Some(username) = prompt::ask(input, output, "Enter your username: ")? else {
                return Ok(GateOutcome::Abandoned);
            };
            let Some(password) = prompt::ask(input, output, "Enter your password: ")? else {
                return Ok(GateOutcome::Abandoned);
            };

            if self.credentials.matches(&username, &password) {
                debug!(%username, attempt = attempts.saturating_add(1), "login accepted");
                writeln!(output, "{}", format!("Welcome {username}").green().bold())?;
                writeln!(output, "Login successful")?;
                return Ok(GateOutcome::Granted { username });
            }

            attempts = attempts.saturating_add(1);
            let remaining = self.max_attempts.saturating_sub(attempts);
            debug!(attempt = attempts, remaining, "login rejected");
            writeln!(
                output,
                "{}",
                format!("Incorrect username or password. Attempts remaining: {remaining}").red()
            )?;
        }

        warn!(attempts, "login locked after too many failed attempts");
        writeln!(
            output,
            "{}",
            "You have exceeded the maximum number of attempts. Please contact the administrator."
                .red()
                .bold()
        )?;
        Ok(GateOutcome::LockedOut { attempts })
    }
}
