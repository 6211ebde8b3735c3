use std::io::{BufRead, Write};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Proceed,
    Declined,
}

/// Asks for a yes/no answer on `input`, re-prompting until one arrives.
/// Answers are matched case-insensitively with surrounding whitespace
/// trimmed. End of input (closed stdin) counts as an interrupt.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Confirmation, Error> {
    loop {
        write!(output, "\nDo you want to proceed? (y/n): ")?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Err(Error::interrupted("Operation cancelled by user"));
        }
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => return Ok(Confirmation::Proceed),
            "n" | "no" => return Ok(Confirmation::Declined),
            _ => writeln!(output, "Please enter 'y' or 'n'.")?,
        }
    }
}
