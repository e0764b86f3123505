//! Scanner implementation for the Thale language
//!
//! This module implements lexical analysis, pulling one token at a time from
//! a cursor over the source text. Bytes are classified by ASCII character
//! class; the end of the text, or an embedded NUL, ends the input.

use crate::error::{LexicalErrorKind, SourceLocation, ThaleError, ThaleResult};
use super::keyword;
use super::token::{Span, Token, TokenKind};

const SENTINEL: u8 = 0;

/// Cursor position of a scan session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanState {
    /// Byte offset the session started at
    pub base: usize,
    /// Current byte offset
    pub cursor: usize,
    /// Current line (1-based)
    pub line: usize,
    /// Current column (1-based, in bytes)
    pub column: usize,
}

impl ScanState {
    /// State positioned at the start of a buffer
    pub fn start() -> Self {
        Self::at(0)
    }

    /// State positioned at `offset`, counted as line 1, column 1
    pub fn at(offset: usize) -> Self {
        Self {
            base: offset,
            cursor: offset,
            line: 1,
            column: 1,
        }
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::start()
    }
}

/// Scanner for Thale source code
pub struct Scanner<'src> {
    source: &'src str,
    state: ScanState,
    filename: Option<String>,
    recovered: Vec<ThaleError>,
    finished: bool,
}

impl<'src> Scanner<'src> {
    /// Create a new scanner
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            state: ScanState::start(),
            filename: None,
            recovered: Vec::new(),
            finished: false,
        }
    }

    /// Create a scanner whose error locations carry `filename`
    pub fn with_filename(source: &'src str, filename: Option<&str>) -> Self {
        let mut scanner = Self::new(source);
        scanner.filename = filename.map(|s| s.to_string());
        scanner
    }

    /// Continue scanning `source` from a previously exported state
    ///
    /// Returns `None` unless the cursor lies within `source` on a character
    /// boundary at or after `base`, with line and column at least 1.
    pub fn resume(source: &'src str, state: ScanState) -> Option<Self> {
        let valid = state.base <= state.cursor
            && source.is_char_boundary(state.cursor)
            && state.line >= 1
            && state.column >= 1;
        if !valid {
            return None;
        }
        let mut scanner = Self::new(source);
        scanner.state = state;
        Some(scanner)
    }

    /// The source text being scanned
    pub fn source(&self) -> &'src str {
        self.source
    }

    /// Snapshot of the current cursor position
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Diagnostics that were reported without stopping the scan
    pub fn recovered(&self) -> &[ThaleError] {
        &self.recovered
    }

    /// Drain the recovered diagnostics reported so far
    pub fn take_recovered(&mut self) -> Vec<ThaleError> {
        std::mem::take(&mut self.recovered)
    }

    /// Scan every remaining token, including the final `Eof`
    pub fn tokenize(&mut self) -> ThaleResult<Vec<Token<'src>>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            tokens.push(token);
            if token.is_eof() {
                return Ok(tokens);
            }
        }
    }

    /// Scan a single token
    ///
    /// Once the input is exhausted every call returns an `Eof` token at the
    /// same position.
    pub fn next_token(&mut self) -> ThaleResult<Token<'src>> {
        self.skip_trivia();

        let start = self.state;
        if self.is_at_end() {
            return Ok(self.make_token(TokenKind::Eof, start));
        }

        let c = self.advance();
        let result = match c {
            c if c.is_ascii_alphabetic() || c == b'_' => Ok(self.scan_identifier(start)),
            c if c.is_ascii_digit() => Ok(self.scan_number(start)),
            b'"' => self.scan_string(start),
            b'\'' => self.scan_char(start),
            _ => self.scan_symbol(c, start),
        };

        match &result {
            Ok(token) => log::trace!(
                "{}:{} {:?} {:?}",
                token.line,
                token.column,
                token.kind,
                token.lexeme
            ),
            Err(err) => log::debug!("lexical error: {}", err),
        }
        result
    }

    /// Skip whitespace and `--` comments
    fn skip_trivia(&mut self) {
        loop {
            match self.peek() {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C => {
                    self.advance();
                }
                b'-' if self.peek_next() == b'-' => {
                    while !self.is_at_end() && self.peek() != b'\n' {
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self, start: ScanState) -> Token<'src> {
        while self.peek().is_ascii_alphanumeric() || self.peek() == b'_' {
            self.advance();
        }

        let kind = keyword::classify(self.lexeme_from(start));
        self.make_token(kind, start)
    }

    /// Scan a number literal (integer or float)
    ///
    /// A trailing `.` with no digits after it still makes a float.
    fn scan_number(&mut self, start: ScanState) -> Token<'src> {
        self.skip_digits();

        if self.peek() != b'.' {
            return self.make_token(TokenKind::IntLiteral, start);
        }

        self.advance();
        self.skip_digits();
        self.make_token(TokenKind::FloatLiteral, start)
    }

    fn skip_digits(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
    }

    /// Scan a string literal; the opening quote is already consumed
    fn scan_string(&mut self, start: ScanState) -> ThaleResult<Token<'src>> {
        loop {
            match self.peek() {
                SENTINEL | b'\n' => {
                    return Err(self.error(LexicalErrorKind::UnterminatedString, start));
                }
                b'"' => {
                    self.advance();
                    return Ok(self.make_token(TokenKind::StringLiteral, start));
                }
                b'\\' => {
                    let escape = self.state;
                    self.advance();
                    match self.peek() {
                        b'n' | b't' | b'r' | b'\\' | b'"' => {
                            self.advance();
                        }
                        // left for the loop to report as unterminated
                        SENTINEL | b'\n' => {}
                        _ => {
                            let c = self.advance_char();
                            let err = self.error(LexicalErrorKind::InvalidStringEscape(c), escape);
                            log::debug!("recovered: {}", err);
                            self.recovered.push(err);
                        }
                    }
                }
                _ => {
                    self.advance_char();
                }
            }
        }
    }

    /// Scan a char literal; the opening quote is already consumed
    fn scan_char(&mut self, start: ScanState) -> ThaleResult<Token<'src>> {
        if self.peek() == b'\\' {
            let escape = self.state;
            self.advance();
            match self.peek() {
                b'n' | b't' | b'r' | b'\\' | b'\'' | SENTINEL => {}
                _ => {
                    let c = self.current_char();
                    return Err(self.error(LexicalErrorKind::InvalidCharEscape(c), escape));
                }
            }
        }

        if !self.is_at_end() {
            self.advance_char();
        }

        if self.match_byte(b'\'') {
            Ok(self.make_token(TokenKind::CharLiteral, start))
        } else {
            Err(self.error(LexicalErrorKind::UnterminatedChar, start))
        }
    }

    /// Scan a symbol, preferring the longest match
    fn scan_symbol(&mut self, c: u8, start: ScanState) -> ThaleResult<Token<'src>> {
        let kind = match c {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b'[' => TokenKind::LBracket,
            b']' => TokenKind::RBracket,
            b'.' => TokenKind::Dot,
            b';' => TokenKind::Semicolon,
            b',' => TokenKind::Comma,
            b'%' => TokenKind::Percent,
            b'^' => TokenKind::Caret,
            b'+' => TokenKind::Plus,
            b'*' => TokenKind::Star,
            b'/' => TokenKind::Slash,
            b'=' => TokenKind::Assign,
            b'>' => TokenKind::Greater,
            b'<' => self.either(b'>', TokenKind::NotEqual, TokenKind::Less),
            b':' => self.either(b':', TokenKind::ConsOp, TokenKind::Colon),
            b'-' => self.either(b'>', TokenKind::Arrow, TokenKind::Minus),
            b'&' => self.either(b'&', TokenKind::LogicalAnd, TokenKind::Ampersand),
            b'|' => self.either(b'|', TokenKind::LogicalOr, TokenKind::Pipe),
            _ => {
                let symbol = self.char_at(start.cursor);
                // finish a multi-byte character so the cursor stays on a boundary
                for _ in 1..symbol.len_utf8() {
                    self.advance();
                }
                return Err(self.error(LexicalErrorKind::UnknownSymbol(symbol), start));
            }
        };
        Ok(self.make_token(kind, start))
    }

    /// `long` if the next byte is `next` (consuming it), `short` otherwise
    fn either(&mut self, next: u8, long: TokenKind, short: TokenKind) -> TokenKind {
        if self.match_byte(next) {
            long
        } else {
            short
        }
    }

    fn make_token(&self, kind: TokenKind, start: ScanState) -> Token<'src> {
        let span = self.span_from(start);
        Token::new(
            kind,
            &self.source[span.offset..span.end()],
            span,
            start.line,
            start.column,
        )
    }

    fn span_from(&self, start: ScanState) -> Span {
        Span::new(start.cursor, self.state.cursor - start.cursor)
    }

    fn lexeme_from(&self, start: ScanState) -> &'src str {
        let span = self.span_from(start);
        &self.source[span.offset..span.end()]
    }

    /// Consume one byte, keeping line and column in step
    ///
    /// Never moves past the end of the source.
    fn advance(&mut self) -> u8 {
        if self.state.cursor >= self.source.len() {
            return SENTINEL;
        }
        let c = self.peek();
        self.state.cursor += 1;
        if c == b'\n' {
            self.state.line += 1;
            self.state.column = 1;
        } else {
            self.state.column += 1;
        }
        c
    }

    /// Consume one whole UTF-8 character
    fn advance_char(&mut self) -> char {
        let c = self.current_char();
        for _ in 0..c.len_utf8() {
            self.advance();
        }
        c
    }

    /// Consume the next byte if it is `expected`
    fn match_byte(&mut self, expected: u8) -> bool {
        if self.is_at_end() || self.peek() != expected {
            false
        } else {
            self.advance();
            true
        }
    }

    /// Peek at the current byte without consuming it
    fn peek(&self) -> u8 {
        self.byte_at(self.state.cursor)
    }

    /// Peek at the byte after the current one
    fn peek_next(&self) -> u8 {
        if self.is_at_end() {
            SENTINEL
        } else {
            self.byte_at(self.state.cursor + 1)
        }
    }

    fn byte_at(&self, offset: usize) -> u8 {
        self.source.as_bytes().get(offset).copied().unwrap_or(SENTINEL)
    }

    fn current_char(&self) -> char {
        self.char_at(self.state.cursor)
    }

    fn char_at(&self, offset: usize) -> char {
        self.source
            .get(offset..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.peek() == SENTINEL
    }

    /// Create an error located at `at`
    fn error(&self, kind: LexicalErrorKind, at: ScanState) -> ThaleError {
        ThaleError::lexical(
            kind,
            SourceLocation::new(at.line, at.column, at.cursor, self.filename.clone()),
        )
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = ThaleResult<Token<'src>>;

    /// Yields every token before `Eof`, then stops; stops after an error too
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => {
                self.finished = true;
                None
            }
            Ok(token) => Some(Ok(token)),
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

impl std::iter::FusedIterator for Scanner<'_> {}
