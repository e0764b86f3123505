//! Lexical analysis module
//!
//! This module handles tokenization of Thale source code.

pub mod keyword;
pub mod scanner;
pub mod token;

pub use keyword::{classify, KeywordEntry, KEYWORDS};
pub use scanner::{ScanState, Scanner};
pub use token::{Span, Token, TokenKind};
