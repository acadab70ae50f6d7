//! Error handling and diagnostics for the brace parser
//!
//! Every parse failure is a single [`ParseError`] value carrying its kind, a
//! human-readable message and the index of the token where parsing stopped.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::Diagnostic;

/// Result type alias for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// The kinds of syntax error the parser can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The stream ran out where a token was required
    UnexpectedEndOfInput,
    /// A specific literal token was required and a different one was found
    UnexpectedToken,
    /// A statement was not followed by `;`
    MissingSeparator,
    /// A block is missing its `{` or `}`
    UnterminatedBlock,
    /// A declaration expected a name
    InvalidIdentifier,
    /// An assignment did not start with a name
    InvalidAssignTarget,
    /// A comparison is missing its relational operator
    ExpectedRelationalOperator,
    /// Source nesting exceeded the configured depth limit
    NestingTooDeep,
}

impl ParseErrorKind {
    /// Get the kind as a display string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UnexpectedEndOfInput => "Unexpected End Of Input",
            Self::UnexpectedToken => "Unexpected Token",
            Self::MissingSeparator => "Missing Separator",
            Self::UnterminatedBlock => "Unterminated Block",
            Self::InvalidIdentifier => "Invalid Identifier",
            Self::InvalidAssignTarget => "Invalid Assign Target",
            Self::ExpectedRelationalOperator => "Expected Relational Operator",
            Self::NestingTooDeep => "Nesting Too Deep",
        }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A syntax error raised while parsing a token stream
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} at token {position}")]
pub struct ParseError {
    kind: ParseErrorKind,
    message: String,
    position: usize,
    found: Option<String>,
}

impl ParseError {
    /// Create a new error at a token index
    pub fn new(
        kind: ParseErrorKind,
        message: impl Into<String>,
        position: usize,
        found: Option<String>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            position,
            found,
        }
    }

    /// Create an "expected X, found Y" error; `found` is `None` at end of input
    pub fn expected(
        kind: ParseErrorKind,
        expected: &str,
        found: Option<&str>,
        position: usize,
    ) -> Self {
        let message = match found {
            Some(token) => format!("expected {}, found '{}'", expected, token),
            None => format!("expected {}, found end of input", expected),
        };
        Self::new(kind, message, position, found.map(str::to_string))
    }

    /// Create an end-of-input error; `expected` names the missing construct
    pub fn end_of_input(expected: &str, position: usize) -> Self {
        Self::expected(ParseErrorKind::UnexpectedEndOfInput, expected, None, position)
    }

    /// Create an error pointing at an offending token
    pub fn at_token(kind: ParseErrorKind, expected: &str, found: &str, position: usize) -> Self {
        Self::expected(kind, expected, Some(found), position)
    }

    /// Get the error kind
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Index of the token where the error was detected
    pub fn position(&self) -> usize {
        self.position
    }

    /// The offending token, or `None` at end of input
    pub fn found(&self) -> Option<&str> {
        self.found.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ParseError::at_token(ParseErrorKind::MissingSeparator, "';'", "x", 4);

        assert_eq!(err.kind(), ParseErrorKind::MissingSeparator);
        assert_eq!(err.message(), "expected ';', found 'x'");
        assert_eq!(err.position(), 4);
        assert_eq!(err.found(), Some("x"));
    }

    #[test]
    fn test_end_of_input() {
        let err = ParseError::end_of_input("expression", 7);

        assert_eq!(err.kind(), ParseErrorKind::UnexpectedEndOfInput);
        assert_eq!(err.found(), None);
        assert!(err.message().contains("end of input"));
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::at_token(ParseErrorKind::UnexpectedToken, "'('", "x", 1);

        assert_eq!(
            err.to_string(),
            "Unexpected Token: expected '(', found 'x' at token 1"
        );
    }
}
