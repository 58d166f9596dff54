//! Colored terminal output utilities.
//!
//! Messages go to stderr; JSON documents go to stdout so they can be piped.

use console::{Style, Term};
use docnav_config::Diagnostic;
use serde::Serialize;

/// Terminal output formatter.
pub(crate) struct Output {
    term: Term,
    stdout: Term,
    green: Style,
    yellow: Style,
    red: Style,
    dim: Style,
}

impl Output {
    /// Create a new output formatter.
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            term: Term::stderr(),
            stdout: Term::stdout(),
            green: Style::new().green(),
            yellow: Style::new().yellow(),
            red: Style::new().red(),
            dim: Style::new().dim(),
        }
    }

    /// Print an info message.
    pub(crate) fn info(&self, msg: &str) {
        let _ = self.term.write_line(msg);
    }

    /// Print a success message (green).
    pub(crate) fn success(&self, msg: &str) {
        let _ = self.term.write_line(&self.green.apply_to(msg).to_string());
    }

    /// Print a warning message (yellow).
    pub(crate) fn warning(&self, msg: &str) {
        let _ = self.term.write_line(&self.yellow.apply_to(msg).to_string());
    }

    /// Print an error message (red).
    pub(crate) fn error(&self, msg: &str) {
        let _ = self.term.write_line(&self.red.apply_to(msg).to_string());
    }

    /// Print a warning diagnostic with its location dimmed.
    pub(crate) fn warn_diagnostic(&self, diagnostic: &Diagnostic) {
        let _ = self.term.write_line(&format!(
            "  {} {} {}",
            self.yellow.apply_to("warning:"),
            diagnostic.message,
            self.dim.apply_to(format!("at {} ({})", diagnostic.path, diagnostic.kind))
        ));
    }

    /// Write `value` as pretty JSON to stdout.
    pub(crate) fn json<T: Serialize>(&self, value: &T) -> Result<(), crate::error::CliError> {
        let json = serde_json::to_string_pretty(value)?;
        self.stdout.write_line(&json)?;
        Ok(())
    }
}
