//! AST printer
//!
//! Renders a tree back into text the parser accepts. Every token in the output
//! is separated by whitespace, so splitting the text on whitespace yields the
//! token sequence for the tree.

use super::ast::{BinaryOperator, Block, Node};
use crate::config::DEFAULT_DECL_KEYWORD;

const INDENT: &str = "    ";

/// Pretty-printer for AST nodes
pub struct Printer {
    decl_keyword: String,
    output: String,
    indent: usize,
}

impl Printer {
    pub fn new() -> Self {
        Self::with_decl_keyword(DEFAULT_DECL_KEYWORD)
    }

    pub fn with_decl_keyword(decl_keyword: impl Into<String>) -> Self {
        Self {
            decl_keyword: decl_keyword.into(),
            output: String::new(),
            indent: 0,
        }
    }

    /// Render a node as indented text
    pub fn render(&mut self, node: &Node) -> String {
        self.output.clear();
        self.indent = 0;
        self.write_node(node);
        std::mem::take(&mut self.output)
    }

    /// Render a node as the token sequence the parser would consume
    pub fn tokens(&mut self, node: &Node) -> Vec<String> {
        self.render(node)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    fn write_node(&mut self, node: &Node) {
        match node {
            Node::Block(block) => self.write_block(block),
            Node::If {
                condition,
                then_block,
                else_block,
            } => {
                self.output.push_str("if ( ");
                self.write_node(condition);
                self.output.push_str(" ) ");
                self.write_block(then_block);
                if let Some(else_block) = else_block {
                    self.output.push_str(" else ");
                    self.write_block(else_block);
                }
            }
            Node::While { condition, body } => {
                self.output.push_str("while ( ");
                self.write_node(condition);
                self.output.push_str(" ) ");
                self.write_block(body);
            }
            Node::Declare { names } => {
                self.output.push_str(&self.decl_keyword);
                self.output.push(' ');
                self.output.push_str(&names.join(" , "));
            }
            Node::Assign { target, value } => {
                self.output.push_str(target);
                self.output.push_str(" = ");
                self.write_node(value);
            }
            Node::BinaryOp {
                operator,
                left,
                right,
            } => {
                self.write_operand(left, *operator, false);
                self.output.push(' ');
                self.output.push_str(operator.as_str());
                self.output.push(' ');
                self.write_operand(right, *operator, true);
            }
            Node::IntLiteral(value) => self.output.push_str(&value.to_string()),
            Node::FloatLiteral(value) => self.output.push_str(&format_float(*value)),
            Node::VarRef(name) => self.output.push_str(name),
        }
    }

    fn write_block(&mut self, block: &Block) {
        if block.is_empty() {
            self.output.push_str("{ }");
            return;
        }

        self.output.push_str("{\n");
        self.indent += 1;
        for statement in &block.statements {
            self.write_indent();
            self.write_node(statement);
            self.output.push_str(" ;\n");
        }
        self.indent -= 1;
        self.write_indent();
        self.output.push('}');
    }

    /// Operands of equal precedence only need parentheses on the right, since
    /// every operator is left-associative
    fn write_operand(&mut self, operand: &Node, parent: BinaryOperator, is_right: bool) {
        let needs_parens = match operand {
            Node::BinaryOp { operator, .. } => {
                operator.precedence() < parent.precedence()
                    || (is_right && operator.precedence() == parent.precedence())
            }
            _ => false,
        };

        if needs_parens {
            self.output.push_str("( ");
            self.write_node(operand);
            self.output.push_str(" )");
        } else {
            self.write_node(operand);
        }
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent {
            self.output.push_str(INDENT);
        }
    }
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

/// Float text that always reads back as a float literal
fn format_float(value: f64) -> String {
    let text = value.to_string();
    if text.contains('.') {
        text
    } else {
        format!("{}.0", text)
    }
}
