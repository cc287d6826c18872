//! Terminal output formatting for the pxon CLI.
//!
//! Status lines go to stderr with a right-aligned coloured verb, so stdout
//! stays clean for document data and playback output.

use std::io::{self, IsTerminal, Write};

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";

/// Width for right-aligned verb column.
const VERB_WIDTH: usize = 12;

/// Terminal-aware status printer.
///
/// Colour is enabled when stderr is a terminal.
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

    /// Print a progress line, e.g. "     Painted (3, 4) rgba(255, 0, 0, 1) at 120ms".
    pub fn status(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print a completion line.
    pub fn success(&self, verb: &str, message: &str) {
        self.print_line(GREEN, verb, message);
    }

    /// Print an informational line with a cyan verb.
    pub fn info(&self, verb: &str, message: &str) {
        self.print_line(CYAN, verb, message);
    }

    fn print_line(&self, color: &str, verb: &str, message: &str) {
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{}", self.format_line(color, verb, message));
    }

    fn format_line(&self, color: &str, verb: &str, message: &str) -> String {
        if self.color {
            format!("{BOLD}{color}{verb:>VERB_WIDTH$}{RESET} {message}")
        } else {
            format!("{verb:>VERB_WIDTH$} {message}")
        }
    }
}

/// Pluralize a count: `plural(1, "pixel", "pixels")` → "1 pixel".
pub fn plural(n: usize, singular: &str, pluralized: &str) -> String {
    if n == 1 {
        format!("{} {}", n, singular)
    } else {
        format!("{} {}", n, pluralized)
    }
}

/// Return a relative display path when possible, absolute otherwise.
pub fn display_path(path: &std::path::Path) -> String {
    if let Ok(cwd) = std::env::current_dir() {
        if let Ok(relative) = path.strip_prefix(&cwd) {
            let s = relative.display().to_string();
            if s.is_empty() {
                return ".".to_string();
            }
            return s;
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural() {
        assert_eq!(plural(0, "pixel", "pixels"), "0 pixels");
        assert_eq!(plural(1, "pixel", "pixels"), "1 pixel");
        assert_eq!(plural(5, "pixel", "pixels"), "5 pixels");
    }

    #[test]
    fn test_display_path_absolute() {
        let p = std::path::Path::new("/nonexistent/gallery.pxon");
        assert_eq!(display_path(p), "/nonexistent/gallery.pxon");
    }

    #[test]
    fn test_format_line_plain() {
        let printer = Printer { color: false };
        assert_eq!(
            printer.format_line(GREEN, "Created", "gallery.pxon"),
            "     Created gallery.pxon"
        );
    }

    #[test]
    fn test_format_line_coloured() {
        let printer = Printer { color: true };
        let line = printer.format_line(CYAN, "Read", "gallery.pxon");
        assert!(line.starts_with(BOLD));
        assert!(line.ends_with("gallery.pxon"));
    }
}
