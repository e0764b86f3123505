//! # Thale Programming Language
//!
//! Front end of the Thale compiler. Today this is the lexical scanner and
//! the diagnostic reporter it shares with later phases.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `error`: Error taxonomy and diagnostics
//! - `config`: Command-line configuration

pub mod config;
pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{Diagnostic, ErrorKind, LexicalErrorKind, SourceLocation, ThaleError, ThaleResult};
pub use lexer::{ScanState, Scanner, Span, Token, TokenKind};

/// Version of the Thale compiler
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Tokenize a Thale program
///
/// Returns every token up to and including `Eof`, or the first fatal
/// lexical error. Recovered diagnostics are dropped; use a [`Scanner`]
/// directly to observe them.
pub fn tokenize(source: &str) -> ThaleResult<Vec<Token<'_>>> {
    Scanner::new(source).tokenize()
}
