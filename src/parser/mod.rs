//! Parser module
//!
//! This module handles parsing tokens into an Abstract Syntax Tree (AST) and
//! printing trees back out as tokens.

pub mod ast;
pub mod parser;
pub mod printer;

pub use ast::{BinaryOperator, Block, Node};
pub use parser::Parser;
pub use printer::Printer;
