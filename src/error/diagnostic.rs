//! Diagnostic formatting for error reporting
//!
//! This module renders an error together with the offending source line and
//! a caret under the error column:
//!
//! ```text
//! LexicalError: [line 2, column 9] Unknown symbol '@'
//!     2 | let y = @
//!       |         ^
//! ```

use std::process;

use super::ThaleError;
use colored::Colorize;

/// Exit status used when a diagnostic terminates the process
pub const FAILURE_STATUS: i32 = 1;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'src> {
    error: ThaleError,
    source: Option<&'src str>,
}

impl<'src> Diagnostic<'src> {
    /// Create a new diagnostic from an error
    pub fn new(error: ThaleError) -> Self {
        Self {
            error,
            source: None,
        }
    }

    /// Create a diagnostic with source code context
    pub fn with_source(error: ThaleError, source: &'src str) -> Self {
        Self {
            error,
            source: Some(source),
        }
    }

    /// Format the diagnostic with color and context
    ///
    /// Whether escape codes are actually emitted is decided by
    /// `colored::control`.
    pub fn format(&self) -> String {
        self.render(true)
    }

    /// Format the diagnostic without any styling
    pub fn plain(&self) -> String {
        self.render(false)
    }

    /// Write the diagnostic to stderr and keep going
    pub fn emit(&self) {
        eprint!("{}", self.format());
    }

    fn render(&self, styled: bool) -> String {
        let location = self.error.location();
        let kind = self.error.kind().as_str();
        let kind = if styled {
            kind.red().bold().to_string()
        } else {
            kind.to_string()
        };

        let Some(source) = self.source else {
            return format!(
                "{}: [line {}, column {}] {}\n",
                kind,
                location.line,
                location.column,
                self.error.message()
            );
        };

        let context = LineContext::locate(source, location.offset);
        let gutter = if styled {
            "|".blue().bold().to_string()
        } else {
            "|".to_string()
        };
        let caret = if styled {
            "^".red().bold().to_string()
        } else {
            "^".to_string()
        };

        let mut output = format!(
            "{}: [line {}, column {}] {}\n",
            kind,
            location.line,
            context.column,
            self.error.message()
        );
        output.push_str(&format!("    {} {} {}\n", location.line, gutter, context.text));
        output.push_str(&format!(
            "      {} {}{}\n",
            gutter,
            " ".repeat(context.column - 1),
            caret
        ));
        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}

/// The source line holding an error offset
struct LineContext {
    text: String,
    column: usize,
}

impl LineContext {
    fn locate(source: &str, offset: usize) -> Self {
        let bytes = source.as_bytes();
        let offset = offset.min(bytes.len());

        let line_start = bytes[..offset]
            .iter()
            .rposition(|&b| b == b'\n')
            .map_or(0, |newline| newline + 1);
        let line_end = bytes[offset..]
            .iter()
            .position(|&b| b == b'\n' || b == 0)
            .map_or(bytes.len(), |end| offset + end);

        Self {
            text: String::from_utf8_lossy(&bytes[line_start..line_end]).into_owned(),
            column: offset - line_start + 1,
        }
    }
}

/// Print `error` with its source context and terminate the process
pub fn report(error: &ThaleError, source: &str) -> ! {
    log::debug!("fatal diagnostic: {}", error);
    Diagnostic::with_source(error.clone(), source).emit();
    process::exit(FAILURE_STATUS)
}
