//! Line-oriented prompting over any `BufRead`/`Write` pair.

use std::io::{BufRead, Write};

use crate::error::DeskError;

/// Read one line, without its line terminator
///
/// Returns `None` once the input is exhausted.
///
/// # Errors
///
/// Returns `DeskError::Io` if the input cannot be read.
pub fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>, DeskError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Show `text` without a newline and read the answer
///
/// # Errors
///
/// Returns `DeskError::Io` if the prompt cannot be written or the answer
/// cannot be read.
pub fn ask<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> Result<Option<String>, DeskError> {
    write!(output, "{text}")?;
    output.flush()?;
    read_line(input)
}

/// Parse a numeric menu answer, ignoring surrounding whitespace
#[must_use]
pub fn parse_choice(answer: &str) -> Option<u8> {
    answer.trim().parse().ok()
}
