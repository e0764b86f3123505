//! Reserved words of the Thale language

use super::token::TokenKind;

/// One reserved spelling and the kind it scans to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordEntry {
    pub spelling: &'static str,
    pub kind: TokenKind,
}

const fn entry(spelling: &'static str, kind: TokenKind) -> KeywordEntry {
    KeywordEntry { spelling, kind }
}

/// Case-sensitive keyword table
pub const KEYWORDS: &[KeywordEntry] = &[
    entry("Char", TokenKind::Char),
    entry("False", TokenKind::False),
    entry("Float", TokenKind::Float),
    entry("Int", TokenKind::Int),
    entry("let", TokenKind::Let),
    entry("List", TokenKind::List),
    entry("match", TokenKind::Match),
    entry("True", TokenKind::True),
    entry("type", TokenKind::Type),
    entry("Unit", TokenKind::Unit),
    entry("with", TokenKind::With),
    entry("String", TokenKind::String),
    entry("effect", TokenKind::Effect),
];

/// Classify an identifier-shaped spelling
///
/// Only an exact match selects a reserved kind; anything else is an
/// [`TokenKind::Identifier`].
pub fn classify(spelling: &str) -> TokenKind {
    KEYWORDS
        .iter()
        .find(|entry| entry.spelling.as_bytes() == spelling.as_bytes())
        .map_or(TokenKind::Identifier, |entry| entry.kind)
}

/// Reverse lookup: the reserved spelling of `kind`, if it has one
pub fn spelling_of(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|entry| entry.kind == kind)
        .map(|entry| entry.spelling)
}
