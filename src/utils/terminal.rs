//! Terminal output utilities

use std::io::{self, BufRead, Write};

use console::style;

/// Print an error message to stderr
pub fn print_error(message: &str) {
    eprintln!("{}: {}", style("error").red().bold(), message);
}

/// Print a warning message to stderr
pub fn print_warning(message: &str) {
    eprintln!("{}: {}", style("warning").yellow().bold(), message);
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{}: {}", style("success").green().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{}: {}", style("info").blue().bold(), message);
}

/// Print a titled block of diagnostic output
pub fn print_section(title: &str, body: &str) {
    println!("{}", style(title).cyan().bold());
    for line in body.lines() {
        println!("  {}", style(line).dim());
    }
}

/// Write `prompt`, then read one line of input
///
/// End of input is treated as an empty answer. The trailing newline is
/// removed; other whitespace is left to the caller.
pub fn prompt_line<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> io::Result<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim_end_matches(['\r', '\n']).to_string();
    Ok(answer)
}
