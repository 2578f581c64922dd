//! rulox_diagnostics: Diagnostic messages and error reporting infrastructure.
//!
//! This module defines the diagnostic messages reported while processing Lox
//! source code. Diagnostics carry structured information about the kind of
//! problem, the source line it occurred on, and an optional location hint.

use std::fmt;

/// The kind of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    /// A generic Lox error with no more specific kind.
    LoxError,
    /// A lexical/syntactic error in the source text.
    SyntaxError,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::LoxError => write!(f, "LoxError"),
            DiagnosticKind::SyntaxError => write!(f, "SyntaxError"),
        }
    }
}

/// A diagnostic message template with a fixed kind.
/// The message text may contain `{0}`, `{1}`, etc. placeholders.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The kind of this diagnostic.
    pub kind: DiagnosticKind,
    /// The message template string.
    pub message: &'static str,
}

/// A realized diagnostic with line information and resolved message text.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// The kind of this diagnostic.
    pub kind: DiagnosticKind,
    /// The source line this diagnostic refers to (1-based).
    pub line: u32,
    /// An optional location hint (e.g. the construct being processed).
    pub location: Option<String>,
    /// The resolved message text.
    pub message_text: String,
}

impl Diagnostic {
    /// Create a new diagnostic for the given line without a location hint.
    pub fn new(message: &DiagnosticMessage, args: &[&str], line: u32) -> Self {
        Self {
            kind: message.kind,
            line,
            location: None,
            message_text: format_message(message.message, args),
        }
    }

    /// Attach a location hint to this diagnostic.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(
                f,
                "{} ({}): line {}: {}",
                self.kind, location, self.line, self.message_text
            ),
            None => write!(f, "{}: line {}: {}", self.kind, self.line, self.message_text),
        }
    }
}

/// Format a diagnostic message template by replacing `{0}`, `{1}`, etc. with arguments.
pub fn format_message(template: &str, args: &[&str]) -> String {
    let mut result = template.to_string();
    for (i, arg) in args.iter().enumerate() {
        result = result.replace(&format!("{{{}}}", i), arg);
    }
    result
}

/// A collection of diagnostics accumulated during a scan.
///
/// Every scan owns a fresh collection, so callers observe exactly the
/// diagnostics of the source they handed in; there is no shared error flag
/// to reset between independent runs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Whether any diagnostic has been reported.
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    pub fn clear(&mut self) {
        self.diagnostics.clear();
    }
}

// ============================================================================
// Diagnostic Messages
// ============================================================================

pub mod messages {
    use super::*;

    macro_rules! diag {
        ($kind:ident, $msg:expr) => {
            DiagnosticMessage {
                kind: DiagnosticKind::$kind,
                message: $msg,
            }
        };
    }

    // Scanner errors
    pub const UNEXPECTED_CHARACTER: DiagnosticMessage =
        diag!(SyntaxError, "Unexpected character '{0}'.");
    pub const UNTERMINATED_STRING: DiagnosticMessage = diag!(SyntaxError, "Unterminated string.");
    pub const UNTERMINATED_MULTI_LINE_COMMENT: DiagnosticMessage =
        diag!(SyntaxError, "Unterminated multi-line comment.");
}
