//! The Lox scanner/lexer.
//!
//! Converts source text into a stream of tokens in a single forward pass
//! with at most two characters of lookahead. Malformed lexemes are reported
//! as diagnostics and skipped; the scan itself never fails.

use crate::char_codes::{is_alpha, is_alphanumeric, is_digit};
use crate::token::{Token, TokenKind};
use rulox_diagnostics::{messages, Diagnostic, DiagnosticCollection};

/// The outcome of scanning a source text to completion.
///
/// `tokens` always ends with an `EndOfFile` token. `diagnostics` holds one
/// entry per malformed lexeme encountered; it is owned by the caller, so
/// independent scans never observe each other's errors.
#[derive(Debug)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: DiagnosticCollection,
}

/// The scanner converts Lox source text into tokens.
pub struct Scanner {
    /// The source text being scanned.
    text: Vec<char>,
    /// Offset of the first character of the current lexeme.
    start: usize,
    /// Offset of the next unread character.
    current: usize,
    /// Current line number (1-based).
    line: u32,
    /// Line the current lexeme started on.
    token_line: u32,
    /// Tokens produced so far.
    tokens: Vec<Token>,
    /// Accumulated diagnostics.
    diagnostics: DiagnosticCollection,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(source: &str) -> Self {
        Self {
            text: source.chars().collect(),
            start: 0,
            current: 0,
            line: 1,
            token_line: 1,
            tokens: Vec::new(),
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Drive the scanner to the end of the source and return the tokens
    /// together with any diagnostics.
    ///
    /// Consumes the scanner; a scanner is used for exactly one pass.
    pub fn scan_tokens(mut self) -> ScanResult {
        while !self.is_eof() {
            self.start = self.current;
            self.token_line = self.line;
            self.scan_token();
        }

        self.tokens
            .push(Token::new(TokenKind::EndOfFile, "", self.line));

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    /// Scan a single lexeme starting at `start`.
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => {
                let kind = if self.match_char('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind);
            }
            '=' => {
                let kind = if self.match_char('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind);
            }
            '<' => {
                let kind = if self.match_char('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind);
            }
            '>' => {
                let kind = if self.match_char('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind);
            }

            '/' => {
                if self.match_char('/') {
                    self.skip_line_comment();
                } else if self.match_char('*') {
                    self.skip_block_comment();
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            '"' => self.scan_string(),

            c if is_digit(c) => self.scan_number(),
            c if is_alpha(c) => self.scan_identifier(),

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            _ => {
                self.diagnostics.add(Diagnostic::new(
                    &messages::UNEXPECTED_CHARACTER,
                    &[&c.to_string()],
                    self.token_line,
                ));
            }
        }
    }

    // ========================================================================
    // Lexeme-specific scanning
    // ========================================================================

    /// Consume characters through the end of a `//` comment.
    /// The terminating newline is left for the main loop.
    fn skip_line_comment(&mut self) {
        while !self.is_eof() && self.current_char() != Some('\n') {
            self.current += 1;
        }
    }

    /// Consume a `/* ... */` comment, tracking embedded newlines.
    fn skip_block_comment(&mut self) {
        loop {
            if self.is_eof() {
                self.diagnostics.add(Diagnostic::new(
                    &messages::UNTERMINATED_MULTI_LINE_COMMENT,
                    &[],
                    self.line,
                ));
                return;
            }

            if self.current_char() == Some('*') && self.char_at(1) == Some('/') {
                self.current += 2;
                return;
            }

            if self.current_char() == Some('\n') {
                self.line += 1;
            }
            self.current += 1;
        }
    }

    /// Scan a string literal; the opening quote has been consumed.
    /// The token text spans both quotes.
    fn scan_string(&mut self) {
        while !self.is_eof() && self.current_char() != Some('"') {
            if self.current_char() == Some('\n') {
                self.line += 1;
            }
            self.current += 1;
        }

        if self.is_eof() {
            self.diagnostics.add(Diagnostic::new(
                &messages::UNTERMINATED_STRING,
                &[],
                self.line,
            ));
            return;
        }

        // Consume the closing quote
        self.current += 1;
        self.add_token(TokenKind::StringLiteral);
    }

    /// Scan a number literal: `digit+ ('.' digit+)?`.
    /// A trailing dot with no digit after it is left for the next lexeme.
    fn scan_number(&mut self) {
        while self.current_char().map_or(false, is_digit) {
            self.current += 1;
        }

        if self.current_char() == Some('.') && self.char_at(1).map_or(false, is_digit) {
            // Consume the dot
            self.current += 1;

            while self.current_char().map_or(false, is_digit) {
                self.current += 1;
            }
        }

        self.add_token(TokenKind::NumberLiteral);
    }

    /// Scan an identifier or keyword; the first character has been consumed.
    fn scan_identifier(&mut self) {
        while self.current_char().map_or(false, is_alphanumeric) {
            self.current += 1;
        }

        let text = self.lexeme_text();
        let kind = TokenKind::from_keyword(&text).unwrap_or(TokenKind::Identifier);
        self.tokens.push(Token::new(kind, text, self.token_line));
    }

    // ========================================================================
    // Cursor primitives
    // ========================================================================

    /// Whether we've reached the end of the text.
    #[inline]
    fn is_eof(&self) -> bool {
        self.current >= self.text.len()
    }

    /// Look at the character at the current position without advancing.
    #[inline]
    fn current_char(&self) -> Option<char> {
        self.text.get(self.current).copied()
    }

    /// Look at the character at position current + offset.
    #[inline]
    fn char_at(&self, offset: usize) -> Option<char> {
        self.text.get(self.current + offset).copied()
    }

    /// Consume and return the character at the current position.
    fn advance(&mut self) -> char {
        let ch = self.text[self.current];
        self.current += 1;
        ch
    }

    /// Consume the current character only if it matches `expected`.
    fn match_char(&mut self, expected: char) -> bool {
        if self.current_char() == Some(expected) {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// The text of the current lexeme, `start..current`.
    fn lexeme_text(&self) -> String {
        self.text[self.start..self.current].iter().collect()
    }

    /// Append a token of the given kind spanning the current lexeme.
    fn add_token(&mut self, kind: TokenKind) {
        let text = self.lexeme_text();
        self.tokens.push(Token::new(kind, text, self.token_line));
    }
}
