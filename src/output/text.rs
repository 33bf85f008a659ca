use std::io::{self, Write};

use crate::error::AppResult;

pub fn print_line(line: &str) -> AppResult<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}")?;
    stdout.flush()?;
    Ok(())
}

pub fn print_lines<I, S>(lines: I) -> AppResult<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut stdout = io::stdout().lock();
    for line in lines {
        writeln!(stdout, "{}", line.as_ref())?;
    }
    stdout.flush()?;
    Ok(())
}

/// Indented bullet used for profile names in listings.
pub fn bullet(item: &str) -> String {
    format!("   • {item}")
}
