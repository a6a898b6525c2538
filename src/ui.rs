//! Terminal status and error output.
//!
//! Status messages go to stdout; error diagnostics go to stderr with a
//! red "error" prefix when the terminal supports color.

use std::io::Write;

/// Print a status message with "tidy-report: " prefix
pub fn status(s: &str) {
    println!("tidy-report: {}", s);
}

/// Print an error message to stderr with a colored "error" prefix
pub fn print_error(msg: &str) {
    if !colored_error_prefix() {
        eprint!("error");
    }
    eprintln!(": {}", msg);
}

/// Write the red "error" prefix to stderr; false means nothing was
/// written and the caller should print the plain fallback.
fn colored_error_prefix() -> bool {
    let Some(mut t) = term::stderr() else {
        return false;
    };
    if t.fg(term::color::BRIGHT_RED).is_err() {
        return false;
    }
    let written = write!(t, "error").is_ok();
    let _ = t.reset();
    written
}
