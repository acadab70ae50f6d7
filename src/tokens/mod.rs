//! Token handling module
//!
//! Tokens come from an upstream tokenizer; this module only classifies them
//! and provides the stream the parser consumes.

pub mod classify;
pub mod stream;
pub mod token;

pub use stream::{Checkpoint, TokenStream};
pub use token::{Keyword, Token, TokenCategory};
