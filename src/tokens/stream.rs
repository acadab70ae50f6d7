//! Token stream with a single read cursor
//!
//! The stream owns a fully materialized token vector and an index into it.
//! Tokens before the cursor have been consumed; nothing is ever removed.

use super::token::Token;
use crate::error::{ParseError, ParseResult};
use log::trace;

/// Saved cursor position, see [`TokenStream::checkpoint`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Front-consumable sequence of tokens
#[derive(Debug, Clone)]
pub struct TokenStream {
    tokens: Vec<Token>,
    cursor: usize,
}

impl TokenStream {
    /// Create a stream over already split tokens
    pub fn new<I, T>(tokens: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Token>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// Create a stream from text whose tokens are separated by whitespace
    pub fn from_whitespace(text: &str) -> Self {
        Self::new(text.split_whitespace())
    }

    /// All tokens, consumed or not
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Index of the front token
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of tokens not yet consumed
    pub fn remaining(&self) -> usize {
        self.tokens.len() - self.cursor
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Look at the front token without consuming it
    pub fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.cursor)
    }

    /// Look at the front token, failing at end of input.
    ///
    /// `expected` names what the caller was looking for and ends up in the
    /// error message.
    pub fn front(&self, expected: &str) -> ParseResult<&Token> {
        self.peek()
            .ok_or_else(|| ParseError::end_of_input(expected, self.cursor))
    }

    /// True iff the front token is exactly `lexeme`
    pub fn check(&self, lexeme: &str) -> bool {
        self.peek().map_or(false, |token| token.as_str() == lexeme)
    }

    /// Consume and return the front token, failing at end of input
    pub fn advance(&mut self, expected: &str) -> ParseResult<Token> {
        let token = self.front(expected)?.clone();
        trace!("consumed token {} '{}'", self.cursor, token);
        self.cursor += 1;
        Ok(token)
    }

    /// Consume the front token if it is exactly `lexeme`
    pub fn match_token(&mut self, lexeme: &str) -> bool {
        if self.check(lexeme) {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    /// Remember the current cursor position
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.cursor)
    }

    /// Move the cursor back to a remembered position
    pub fn rewind(&mut self, checkpoint: Checkpoint) {
        trace!("rewinding from token {} to {}", self.cursor, checkpoint.0);
        self.cursor = checkpoint.0;
    }
}
