//! Token kinds and token values produced by the scanner.

use std::fmt;
use thiserror::Error;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Single-character tokens
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Comma,
    Dot,
    Minus,
    Plus,
    Semicolon,
    Slash,
    Star,

    // One-or-two character tokens
    Bang,
    BangEqual,
    Equal,
    EqualEqual,
    Greater,
    GreaterEqual,
    Less,
    LessEqual,

    // Literals
    Identifier,
    StringLiteral,
    NumberLiteral,

    // Keywords
    And,
    Class,
    Else,
    False,
    Fun,
    For,
    If,
    Nil,
    Or,
    Print,
    Return,
    Super,
    This,
    True,
    Var,
    While,

    EndOfFile,
}

impl TokenKind {
    /// Look up a keyword TokenKind from its spelling.
    ///
    /// This table decides lexical matching and is intentionally independent
    /// of the display names below.
    pub fn from_keyword(text: &str) -> Option<TokenKind> {
        match text {
            "and" => Some(TokenKind::And),
            "class" => Some(TokenKind::Class),
            "else" => Some(TokenKind::Else),
            "false" => Some(TokenKind::False),
            "fun" => Some(TokenKind::Fun),
            "for" => Some(TokenKind::For),
            "if" => Some(TokenKind::If),
            "nil" => Some(TokenKind::Nil),
            "or" => Some(TokenKind::Or),
            "print" => Some(TokenKind::Print),
            "return" => Some(TokenKind::Return),
            "super" => Some(TokenKind::Super),
            "this" => Some(TokenKind::This),
            "true" => Some(TokenKind::True),
            "var" => Some(TokenKind::Var),
            "while" => Some(TokenKind::While),
            _ => None,
        }
    }

    /// Get the source spelling for a keyword kind, or None.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("and"),
            TokenKind::Class => Some("class"),
            TokenKind::Else => Some("else"),
            TokenKind::False => Some("false"),
            TokenKind::Fun => Some("fun"),
            TokenKind::For => Some("for"),
            TokenKind::If => Some("if"),
            TokenKind::Nil => Some("nil"),
            TokenKind::Or => Some("or"),
            TokenKind::Print => Some("print"),
            TokenKind::Return => Some("return"),
            TokenKind::Super => Some("super"),
            TokenKind::This => Some("this"),
            TokenKind::True => Some("true"),
            TokenKind::Var => Some("var"),
            TokenKind::While => Some("while"),
            _ => None,
        }
    }

    /// Whether this kind carries a literal value.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Identifier | TokenKind::StringLiteral | TokenKind::NumberLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::LeftParen => "LeftParen",
            TokenKind::RightParen => "RightParen",
            TokenKind::LeftBrace => "LeftBrace",
            TokenKind::RightBrace => "RightBrace",
            TokenKind::Comma => "Comma",
            TokenKind::Dot => "Dot",
            TokenKind::Minus => "Minus",
            TokenKind::Plus => "Plus",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Slash => "Slash",
            TokenKind::Star => "Star",
            TokenKind::Bang => "Bang",
            TokenKind::BangEqual => "BangEqual",
            TokenKind::Equal => "Equal",
            TokenKind::EqualEqual => "EqualEqual",
            TokenKind::Greater => "Greater",
            TokenKind::GreaterEqual => "GreaterEqual",
            TokenKind::Less => "Less",
            TokenKind::LessEqual => "LessEqual",
            TokenKind::Identifier => "Identifier",
            TokenKind::StringLiteral => "StringLiteral",
            TokenKind::NumberLiteral => "NumberLiteral",
            TokenKind::And => "And",
            TokenKind::Class => "Class",
            TokenKind::Else => "Else",
            TokenKind::False => "False",
            TokenKind::Fun => "Fun",
            TokenKind::For => "For",
            TokenKind::If => "If",
            TokenKind::Nil => "Nil",
            TokenKind::Or => "Or",
            TokenKind::Print => "Print",
            TokenKind::Return => "Return",
            TokenKind::Super => "Super",
            TokenKind::This => "This",
            TokenKind::True => "True",
            TokenKind::Var => "Var",
            TokenKind::While => "While",
            TokenKind::EndOfFile => "EndOfFile",
        };
        write!(f, "{}", name)
    }
}

/// An error produced by the literal accessors on [`Token`].
///
/// These are local, synchronous failures returned to the caller; they are
/// never reported through the diagnostic collection.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    #[error("token of kind '{0}' is not a literal")]
    NotALiteral(TokenKind),
    #[error("token of kind '{0}' has no string literal")]
    NotAString(TokenKind),
    #[error("token of kind '{0}' has no numeric literal")]
    NotANumber(TokenKind),
    #[error("token is malformed, no enclosing '\"'")]
    MalformedString,
    #[error("malformed numeric literal: {0}")]
    MalformedNumber(#[from] std::num::ParseFloatError),
}

/// A scanned token.
///
/// `text` is the exact source spelling: identifiers as written, string
/// literals including both enclosing quotes, numbers as written. `line` is
/// the line the token's first character appears on (1-based).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The source text of the token.
    pub text: String,
    /// The line the token starts on.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// Return this token's literal value as raw text.
    ///
    /// Fails unless the token is an `Identifier`, `StringLiteral`, or
    /// `NumberLiteral`.
    pub fn literal(&self) -> Result<&str, TokenError> {
        if self.kind.is_literal() {
            Ok(&self.text)
        } else {
            Err(TokenError::NotALiteral(self.kind))
        }
    }

    /// Return this token's string value without the enclosing quotes.
    ///
    /// Fails unless the token is a `StringLiteral`. The scanner only emits
    /// well-formed string tokens, but a directly constructed token may lack
    /// the enclosing quotes; that is reported as a malformed-literal error.
    pub fn string_literal(&self) -> Result<&str, TokenError> {
        if self.kind != TokenKind::StringLiteral {
            return Err(TokenError::NotAString(self.kind));
        }

        if self.text.len() < 2 || !self.text.starts_with('"') || !self.text.ends_with('"') {
            return Err(TokenError::MalformedString);
        }

        Ok(&self.text[1..self.text.len() - 1])
    }

    /// Return this token's numeric value as an `f64`.
    ///
    /// Fails unless the token is a `NumberLiteral`; a parse failure on the
    /// text is propagated.
    pub fn number_literal(&self) -> Result<f64, TokenError> {
        if self.kind != TokenKind::NumberLiteral {
            return Err(TokenError::NotANumber(self.kind));
        }

        Ok(self.text.parse::<f64>()?)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.literal() {
            Ok(literal) => {
                // String literal text shows its enclosing quotes escaped.
                if self.kind == TokenKind::StringLiteral && self.text.len() >= 2 {
                    let inner = &self.text[1..self.text.len() - 1];
                    write!(
                        f,
                        "Token(kind={}, text=\"\\\"{}\\\"\", literal={})",
                        self.kind, inner, literal
                    )
                } else {
                    write!(
                        f,
                        "Token(kind={}, text=\"{}\", literal={})",
                        self.kind, self.text, literal
                    )
                }
            }
            Err(_) => write!(f, "Token(kind={}, text=\"{}\")", self.kind, self.text),
        }
    }
}
