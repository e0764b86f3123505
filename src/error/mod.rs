//! Error handling and diagnostics for the Thale language
//!
//! This module provides the error taxonomy shared by every compiler phase
//! and the diagnostic formatting used to report it.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::{report, Diagnostic};

/// Result type alias for Thale operations
pub type ThaleResult<T> = Result<T, ThaleError>;

/// Source location information for error reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-based)
    pub line: usize,
    /// Column number (1-based, in bytes)
    pub column: usize,
    /// Byte offset into the source text
    pub offset: usize,
    /// Optional filename
    pub filename: Option<String>,
}

impl SourceLocation {
    /// Create a new source location
    pub fn new(line: usize, column: usize, offset: usize, filename: Option<String>) -> Self {
        Self {
            line,
            column,
            offset,
            filename,
        }
    }

    /// Create a source location without a filename
    pub fn at(line: usize, column: usize, offset: usize) -> Self {
        Self::new(line, column, offset, None)
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref filename) = self.filename {
            write!(f, "{}:{}:{}", filename, self.line, self.column)
        } else {
            write!(f, "{}:{}", self.line, self.column)
        }
    }
}

/// Phase that raised an error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Lexical,
    Syntax,
    Semantic,
}

impl ErrorKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lexical => "LexicalError",
            Self::Syntax => "SyntaxError",
            Self::Semantic => "SemanticError",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Malformed input detected by the scanner
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexicalErrorKind {
    UnknownSymbol(char),
    UnterminatedString,
    UnterminatedChar,
    InvalidStringEscape(char),
    InvalidCharEscape(char),
}

impl fmt::Display for LexicalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSymbol(c) => write!(f, "Unknown symbol '{}'", c.escape_debug()),
            Self::UnterminatedString => f.write_str("Unterminated string literal"),
            Self::UnterminatedChar => f.write_str("Unterminated char literal"),
            Self::InvalidStringEscape(c) => {
                write!(f, "Invalid escape sequence '\\{}' in string", c.escape_debug())
            }
            Self::InvalidCharEscape(c) => {
                write!(f, "Invalid escape sequence '\\{}' in char literal", c.escape_debug())
            }
        }
    }
}

/// Main error type for the Thale language
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ThaleError {
    /// Lexical analysis error
    #[error("LexicalError: {kind} at {location}")]
    Lexical {
        kind: LexicalErrorKind,
        location: SourceLocation,
    },
    /// Parsing error
    #[error("SyntaxError: {message} at {location}")]
    Syntax {
        message: String,
        location: SourceLocation,
    },
    /// Semantic analysis error
    #[error("SemanticError: {message} at {location}")]
    Semantic {
        message: String,
        location: SourceLocation,
    },
}

impl ThaleError {
    /// Create a new lexical error
    pub fn lexical(kind: LexicalErrorKind, location: SourceLocation) -> Self {
        Self::Lexical { kind, location }
    }

    /// Create a new syntax error
    pub fn syntax(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::Syntax {
            message: message.into(),
            location,
        }
    }

    /// Create a new semantic error
    pub fn semantic(message: impl Into<String>, location: SourceLocation) -> Self {
        Self::Semantic {
            message: message.into(),
            location,
        }
    }

    /// Get the phase that raised this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Lexical { .. } => ErrorKind::Lexical,
            Self::Syntax { .. } => ErrorKind::Syntax,
            Self::Semantic { .. } => ErrorKind::Semantic,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::Lexical { kind, .. } => kind.to_string(),
            Self::Syntax { message, .. } | Self::Semantic { message, .. } => message.clone(),
        }
    }

    /// Get the source location
    pub fn location(&self) -> &SourceLocation {
        match self {
            Self::Lexical { location, .. }
            | Self::Syntax { location, .. }
            | Self::Semantic { location, .. } => location,
        }
    }

    /// Whether scanning may continue after this error was reported
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Lexical {
                kind: LexicalErrorKind::InvalidStringEscape(_),
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::at(10, 5, 120);
        assert_eq!(loc.to_string(), "10:5");

        let loc_with_file = SourceLocation::new(10, 5, 120, Some("test.thl".to_string()));
        assert_eq!(loc_with_file.to_string(), "test.thl:10:5");
    }

    #[test]
    fn test_error_creation() {
        let loc = SourceLocation::at(1, 1, 0);
        let err = ThaleError::lexical(LexicalErrorKind::UnknownSymbol('@'), loc.clone());

        assert_eq!(err.kind(), ErrorKind::Lexical);
        assert_eq!(err.message(), "Unknown symbol '@'");
        assert_eq!(err.location(), &loc);
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = ThaleError::syntax("expected ';'", SourceLocation::at(5, 10, 42));
        assert_eq!(err.to_string(), "SyntaxError: expected ';' at 5:10");

        let err = ThaleError::lexical(
            LexicalErrorKind::UnterminatedString,
            SourceLocation::at(2, 3, 7),
        );
        assert_eq!(
            err.to_string(),
            "LexicalError: Unterminated string literal at 2:3"
        );
    }

    #[test]
    fn test_escape_messages() {
        let kind = LexicalErrorKind::InvalidStringEscape('x');
        assert_eq!(kind.to_string(), "Invalid escape sequence '\\x' in string");

        let kind = LexicalErrorKind::InvalidCharEscape('q');
        assert_eq!(kind.to_string(), "Invalid escape sequence '\\q' in char literal");
    }

    #[test]
    fn test_only_string_escapes_recover() {
        let loc = SourceLocation::at(1, 2, 1);
        assert!(ThaleError::lexical(LexicalErrorKind::InvalidStringEscape('x'), loc.clone())
            .is_recoverable());
        assert!(!ThaleError::lexical(LexicalErrorKind::InvalidCharEscape('x'), loc.clone())
            .is_recoverable());
        assert!(!ThaleError::semantic("unbound name", loc).is_recoverable());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::Lexical.to_string(), "LexicalError");
        assert_eq!(ErrorKind::Syntax.to_string(), "SyntaxError");
        assert_eq!(ErrorKind::Semantic.to_string(), "SemanticError");
    }
}
