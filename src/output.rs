//! Terminal output formatting for the swatch CLI.
//!
//! Status lines go to stderr in Cargo style (right-aligned coloured verb);
//! stdout carries only the palette report.

use std::io::{self, IsTerminal, Write};
use std::path::Path;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Kind of status line, which decides the verb colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Progress,
    Info,
    Warning,
    Error,
}

impl Tone {
    fn code(self) -> &'static str {
        match self {
            Tone::Progress => GREEN,
            Tone::Info => CYAN,
            Tone::Warning => YELLOW,
            Tone::Error => RED,
        }
    }
}

/// Status printer for stderr.
///
/// ANSI colour is used only when stderr is a terminal.
pub struct Printer {
    color: bool,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            color: io::stderr().is_terminal(),
        }
    }

    /// Progress line, e.g. "    Fetching http://example.com/".
    pub fn status(&self, verb: &str, message: &str) {
        self.line(Tone::Progress, verb, message);
    }

    pub fn info(&self, verb: &str, message: &str) {
        self.line(Tone::Info, verb, message);
    }

    pub fn warning(&self, verb: &str, message: &str) {
        self.line(Tone::Warning, verb, message);
    }

    pub fn error(&self, verb: &str, message: &str) {
        self.line(Tone::Error, verb, message);
    }

    /// Dim text, for counts and other secondary detail.
    pub fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    /// Cyan text, for URLs and paths.
    pub fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }

    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn line(&self, tone: Tone, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = if self.color {
            let code = tone.code();
            writeln!(stderr, "{BOLD}{code}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            writeln!(stderr, "{verb:>VERB_WIDTH$} {message}")
        };
    }
}

/// Pluralize a count: `plural(1, "colour", "colours")` → "1 colour".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    format!("{} {}", n, if n == 1 { singular } else { pluralized })
}

/// Path relative to the working directory when it lies below it.
pub fn display_path(path: &Path) -> String {
    let relative = std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(cwd).ok().map(|p| p.display().to_string()));

    match relative {
        Some(s) if s.is_empty() => ".".to_string(),
        Some(s) => s,
        None => path.display().to_string(),
    }
}
