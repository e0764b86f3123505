//! Token definitions for the Thale language
//!
//! This module defines all token kinds produced by lexical analysis and the
//! borrowed [`Token`] value the scanner hands out.

use std::fmt;

use super::keyword;

/// A byte range into the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Byte offset of the first byte
    pub offset: usize,
    /// Length in bytes
    pub len: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// Byte offset one past the last byte
    pub fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A token in the Thale language
///
/// The lexeme borrows the source buffer, so a token can never outlive the
/// text it was scanned from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub span: Span,
    /// Line of the first byte (1-based)
    pub line: usize,
    /// Column of the first byte (1-based, in bytes)
    pub column: usize,
}

impl<'src> Token<'src> {
    /// Create a new token
    pub fn new(kind: TokenKind, lexeme: &'src str, span: Span, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme,
            span,
            line,
            column,
        }
    }

    pub fn len(&self) -> usize {
        self.span.len
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}

/// Token kinds in the Thale language
///
/// Discriminants are the stable numeric codes printed by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // Delimiters
    LParen = 1,     // (
    RParen,         // )
    LBrace,         // {
    RBrace,         // }
    LBracket,       // [
    RBracket,       // ]
    Dot,            // .
    Colon,          // :
    Semicolon,      // ;
    Comma,          // ,

    // Operators
    Percent,        // %
    Caret,          // ^
    Plus,           // +
    Minus,          // -
    Star,           // *
    Slash,          // /
    NotEqual,       // <>
    Assign,         // =
    Ampersand,      // &
    LogicalAnd,     // &&
    Pipe,           // |
    LogicalOr,      // ||
    Greater,        // >
    Less,           // <
    ConsOp,         // ::
    Arrow,          // ->

    // Identifiers and literals
    Identifier,
    IntLiteral,
    FloatLiteral,
    StringLiteral,
    CharLiteral,

    // Reserved words
    Char,
    String,
    False,
    Float,
    Int,
    Let,
    List,
    Match,
    True,
    Type,
    Unit,
    With,
    Effect,

    // Special
    Unknown,
    Eof,
}

impl TokenKind {
    /// Numeric code of this kind
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn is_keyword(self) -> bool {
        keyword::spelling_of(self).is_some()
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::IntLiteral | Self::FloatLiteral | Self::StringLiteral | Self::CharLiteral
        )
    }

    /// Canonical spelling for fixed tokens, a descriptive name otherwise
    pub fn as_str(self) -> &'static str {
        if let Some(spelling) = keyword::spelling_of(self) {
            return spelling;
        }
        match self {
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::Dot => ".",
            Self::Colon => ":",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::Percent => "%",
            Self::Caret => "^",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::NotEqual => "<>",
            Self::Assign => "=",
            Self::Ampersand => "&",
            Self::LogicalAnd => "&&",
            Self::Pipe => "|",
            Self::LogicalOr => "||",
            Self::Greater => ">",
            Self::Less => "<",
            Self::ConsOp => "::",
            Self::Arrow => "->",
            Self::Identifier => "identifier",
            Self::IntLiteral => "integer literal",
            Self::FloatLiteral => "float literal",
            Self::StringLiteral => "string literal",
            Self::CharLiteral => "char literal",
            Self::Unknown => "unknown",
            Self::Eof => "EOF",
            Self::Char
            | Self::String
            | Self::False
            | Self::Float
            | Self::Int
            | Self::Let
            | Self::List
            | Self::Match
            | Self::True
            | Self::Type
            | Self::Unit
            | Self::With
            | Self::Effect => "keyword",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_keyword() {
            write!(f, "keyword '{}'", self.as_str())
        } else {
            f.write_str(self.as_str())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(TokenKind::LParen.code(), 1);
        assert_eq!(TokenKind::Arrow.code(), 26);
        assert_eq!(TokenKind::Identifier.code(), 27);
        assert_eq!(TokenKind::CharLiteral.code(), 31);
        assert_eq!(TokenKind::Effect.code(), 44);
        assert_eq!(TokenKind::Eof.code(), 46);
    }

    #[test]
    fn test_keyword_classification() {
        assert!(TokenKind::Let.is_keyword());
        assert!(TokenKind::Effect.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());
        assert!(!TokenKind::Arrow.is_keyword());
        assert!(TokenKind::FloatLiteral.is_literal());
        assert!(!TokenKind::Float.is_literal());
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::NotEqual.to_string(), "<>");
        assert_eq!(TokenKind::Match.to_string(), "keyword 'match'");
        assert_eq!(TokenKind::Eof.to_string(), "EOF");
    }

    #[test]
    fn test_keyword_spellings() {
        for entry in keyword::KEYWORDS {
            assert_eq!(entry.kind.as_str(), entry.spelling);
            assert!(entry.kind.is_keyword());
        }
    }

    #[test]
    fn test_span_end() {
        let span = Span::new(4, 3);
        assert_eq!(span.end(), 7);
        assert!(!span.is_empty());
        assert!(Span::new(9, 0).is_empty());
    }
}
