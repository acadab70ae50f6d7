//! Token definitions
//!
//! Tokens arrive already split out of source text. A token is just its text;
//! the category is inferred from its shape when someone asks for it.

use super::classify;
use std::fmt;

/// A single lexical unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    lexeme: String,
}

impl Token {
    /// Create a new token
    pub fn new(lexeme: impl Into<String>) -> Self {
        Self {
            lexeme: lexeme.into(),
        }
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        &self.lexeme
    }

    /// Infer the lexical category of this token.
    ///
    /// `decl_keyword` is the configured declaration keyword, which is the only
    /// keyword that is not fixed by the grammar.
    pub fn category(&self, decl_keyword: &str) -> TokenCategory {
        let text = self.as_str();

        if classify::is_keyword(text, decl_keyword) {
            TokenCategory::Keyword
        } else if classify::is_int_lit(text) {
            TokenCategory::IntLiteral
        } else if classify::is_float_lit(text) {
            TokenCategory::FloatLiteral
        } else if classify::is_id(text) {
            TokenCategory::Identifier
        } else if classify::is_operator(text) {
            TokenCategory::Operator
        } else if classify::is_op(text, classify::PUNCTUATION) {
            TokenCategory::Punctuation
        } else {
            TokenCategory::Unknown
        }
    }
}

impl From<&str> for Token {
    fn from(lexeme: &str) -> Self {
        Self::new(lexeme)
    }
}

impl From<String> for Token {
    fn from(lexeme: String) -> Self {
        Self::new(lexeme)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lexeme)
    }
}

/// Lexical category of a token, inferred on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenCategory {
    Keyword,
    Identifier,
    IntLiteral,
    FloatLiteral,
    Operator,
    Punctuation,
    Unknown,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Keyword => "keyword",
            Self::Identifier => "identifier",
            Self::IntLiteral => "integer literal",
            Self::FloatLiteral => "float literal",
            Self::Operator => "operator",
            Self::Punctuation => "punctuation",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Fixed keywords of the grammar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    Else,
    While,
}

impl Keyword {
    /// Get keyword from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "if" => Some(Self::If),
            "else" => Some(Self::Else),
            "while" => Some(Self::While),
            _ => None,
        }
    }

    /// Get string representation of keyword
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
