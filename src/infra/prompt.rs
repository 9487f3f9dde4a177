//! Interactive yes/no confirmation.

use std::io::{self, BufRead, Write};

/// Prints `question`, reads one line from `input`, and reports whether the
/// answer was the literal `yes` (case-insensitive).
///
/// End of input counts as "no".
pub fn confirm(out: &mut dyn Write, input: &mut dyn BufRead, question: &str) -> io::Result<bool> {
    write!(out, "{}", question)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    Ok(is_affirmative(&line))
}

pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}
