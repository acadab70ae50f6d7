//! Diagnostic formatting for better error messages
//!
//! Renders a [`ParseError`] against the token sequence it came from, showing a
//! window of neighbouring tokens with a caret under the offending one.

use super::ParseError;
use crate::tokens::Token;
use colored::Colorize;

/// Number of tokens shown on each side of the error position
const CONTEXT_TOKENS: usize = 6;

/// Diagnostic information for displaying errors with context
pub struct Diagnostic<'a> {
    error: &'a ParseError,
    tokens: Option<&'a [Token]>,
    filename: Option<&'a str>,
}

impl<'a> Diagnostic<'a> {
    /// Create a new diagnostic from an error
    pub fn new(error: &'a ParseError) -> Self {
        Self {
            error,
            tokens: None,
            filename: None,
        }
    }

    /// Attach the token sequence the error was raised against
    pub fn with_tokens(mut self, tokens: &'a [Token]) -> Self {
        self.tokens = Some(tokens);
        self
    }

    /// Attach the name of the file the tokens were read from
    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    /// Format the diagnostic with color and context
    pub fn format(&self) -> String {
        let mut output = String::new();

        let kind = self.error.kind().as_str().red().bold();
        output.push_str(&format!("{}: {}\n", kind, self.error.message()));

        let location = match self.filename {
            Some(name) => format!("{}:token {}", name, self.error.position()),
            None => format!("token {}", self.error.position()),
        };
        output.push_str(&format!("  {} {}\n", "-->".blue().bold(), location));

        if let Some(tokens) = self.tokens {
            output.push_str(&self.format_token_context(tokens));
        }

        output
    }

    /// Format the tokens around the error position with a caret marker
    fn format_token_context(&self, tokens: &[Token]) -> String {
        let position = self.error.position().min(tokens.len());
        let start = position.saturating_sub(CONTEXT_TOKENS);
        let end = (position + CONTEXT_TOKENS + 1).min(tokens.len());

        let mut line = String::new();
        let mut caret_column = None;

        if start > 0 {
            line.push_str("... ");
        }
        for (index, token) in tokens[start..end].iter().enumerate() {
            if start + index == position {
                caret_column = Some(line.chars().count());
            }
            line.push_str(token.as_str());
            line.push(' ');
        }
        if end < tokens.len() {
            line.push_str("...");
        }

        // End of input: point just past the last token
        let caret_column = caret_column.unwrap_or_else(|| line.trim_end().chars().count() + 1);
        let width = self
            .error
            .found()
            .map(|found| found.chars().count().max(1))
            .unwrap_or(1);

        let mut output = String::new();
        output.push_str(&format!("  {} {}\n", "|".blue().bold(), line.trim_end()));
        output.push_str(&format!(
            "  {} {}{}\n",
            "|".blue().bold(),
            " ".repeat(caret_column),
            "^".repeat(width).red().bold()
        ));
        output
    }
}

impl std::fmt::Display for Diagnostic<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.format())
    }
}
