//! Interactive confirmation prompts

use std::io::{BufRead, Write};

use crate::error::PennyResult;

/// Ask a yes/no question on stdin
pub fn confirm(question: &str) -> PennyResult<bool> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    confirm_with(question, &mut stdin.lock(), &mut stdout)
}

/// Ask a yes/no question using the given reader and writer
///
/// Only `y` or `yes` (any case) count as agreement. End of input is a no.
pub fn confirm_with<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> PennyResult<bool> {
    write!(output, "{} (y/n): ", question)?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;

    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
