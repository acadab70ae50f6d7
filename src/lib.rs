//! # brace-lang
//!
//! A hand-written recursive-descent front end for a small block language with:
//! - Blocks, `if`/`else` and `while`
//! - Variable declarations and assignment
//! - Arithmetic and boolean expressions with the usual precedence
//!
//! ## Architecture
//!
//! - `tokens`: Token classification and the token stream
//! - `parser`: Recursive-descent parser, AST and AST printer
//! - `config`: Parser settings
//! - `error`: Error handling and diagnostics
//!
//! Input is already tokenized; turning source text into tokens happens
//! upstream.

pub mod config;
pub mod error;
pub mod parser;
pub mod tokens;

// Re-export commonly used types
pub use config::{ConfigError, ParserConfig};
pub use error::{Diagnostic, ParseError, ParseErrorKind, ParseResult};
pub use parser::{BinaryOperator, Block, Node, Parser, Printer};
pub use tokens::{Token, TokenCategory, TokenStream};

/// Version of the brace front end
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Parse a complete program with the default configuration
///
/// A program is a single block that consumes every token.
///
/// # Arguments
///
/// * `tokens` - The token sequence produced by an upstream tokenizer
///
/// # Returns
///
/// The program block, or the first syntax error encountered.
pub fn parse_program<I, T>(tokens: I) -> ParseResult<Node>
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    parse_program_with(tokens, &ParserConfig::default())
}

/// Parse a complete program with an explicit configuration
pub fn parse_program_with<I, T>(tokens: I, config: &ParserConfig) -> ParseResult<Node>
where
    I: IntoIterator<Item = T>,
    T: Into<Token>,
{
    Parser::with_config(TokenStream::new(tokens), config.clone()).parse_program()
}
