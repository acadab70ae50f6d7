//! Parser implementation
//!
//! One method per grammar rule. Every method reads from the front of the
//! parser's [`TokenStream`] and either returns the node it built or the first
//! syntax error it hit.

use super::ast::*;
use crate::config::ParserConfig;
use crate::error::{ParseError, ParseErrorKind, ParseResult};
use crate::tokens::classify::{
    is_float_lit, is_int_lit, is_name, is_op, ADDITIVE_OPS, ASSIGN_OP, MULTIPLICATIVE_OPS,
    RELATIONAL_OPS,
};
use crate::tokens::{Keyword, Token, TokenStream};
use log::{debug, info};

/// Recursive-descent parser over a token stream
pub struct Parser {
    stream: TokenStream,
    config: ParserConfig,
    depth: usize,
}

impl Parser {
    /// Create a new parser with the default configuration
    pub fn new(stream: TokenStream) -> Self {
        Self::with_config(stream, ParserConfig::default())
    }

    /// Create a new parser with an explicit configuration
    pub fn with_config(stream: TokenStream, config: ParserConfig) -> Self {
        info!("Parser created with {} tokens", stream.remaining());

        Self {
            stream,
            config,
            depth: 0,
        }
    }

    /// True once every token has been consumed
    pub fn is_finished(&self) -> bool {
        self.stream.is_at_end()
    }

    // ===== Statements =====

    /// program := block <end of input>
    pub fn parse_program(&mut self) -> ParseResult<Node> {
        info!("Beginning parse of {} tokens", self.stream.remaining());

        let block = self.parse_block()?;
        self.expect_end("end of input after program block")?;

        Ok(Node::Block(block))
    }

    /// A single statement with an optional trailing `;` and nothing after it.
    ///
    /// Used for line-at-a-time input where there is no enclosing block.
    pub fn parse_standalone_statement(&mut self) -> ParseResult<Node> {
        let statement = self.parse_statement()?;
        self.stream.match_token(";");
        self.expect_end("end of input after statement")?;

        Ok(statement)
    }

    /// Dispatch on the front token without consuming it
    pub fn parse_statement(&mut self) -> ParseResult<Node> {
        self.nested(|p| {
            let front = p.stream.front("statement")?.as_str();
            debug!("statement at token {} starts with '{}'", p.stream.position(), front);

            let is_block = front == "{";
            let is_declaration = front == p.config.decl_keyword;
            let keyword = Keyword::from_str(front);

            match keyword {
                Some(Keyword::If) => p.parse_if(),
                Some(Keyword::While) => p.parse_while(),
                _ if is_block => Ok(Node::Block(p.parse_block()?)),
                _ if is_declaration => p.parse_declare(),
                _ => p.parse_assign(),
            }
        })
    }

    /// stmt_list := {stmt ";"}, stopping before the closing `}`
    pub fn parse_statement_list(&mut self) -> ParseResult<Vec<Node>> {
        let mut statements = Vec::new();

        loop {
            match self.stream.peek() {
                Some(token) if token.as_str() == "}" => break,
                Some(_) => {}
                None => return Err(self.unterminated("'}' to close block")),
            }

            statements.push(self.parse_statement()?);

            match self.stream.peek() {
                Some(token) if token.as_str() == ";" => {
                    self.stream.advance("';'")?;
                }
                Some(_) => {
                    return Err(self.unexpected(
                        ParseErrorKind::MissingSeparator,
                        "';' after statement",
                    ))
                }
                None => return Err(self.unterminated("';' after statement")),
            }
        }

        Ok(statements)
    }

    /// block := "{" stmt_list "}"
    pub fn parse_block(&mut self) -> ParseResult<Block> {
        self.nested(|p| {
            if !p.stream.match_token("{") {
                return Err(p.unterminated("'{' to open block"));
            }

            let statements = p.parse_statement_list()?;

            if !p.stream.match_token("}") {
                return Err(p.unterminated("'}' to close block"));
            }

            Ok(Block::new(statements))
        })
    }

    /// "if" "(" bool_expr ")" block ["else" block]
    pub fn parse_if(&mut self) -> ParseResult<Node> {
        self.expect(Keyword::If.as_str(), "'if'")?;
        let condition = self.parse_condition(Keyword::If)?;
        let then_block = self.parse_block()?;

        // Checked right after the then-block, so `else` goes to the nearest `if`
        let else_block = if self.stream.match_token(Keyword::Else.as_str()) {
            Some(self.parse_block()?)
        } else {
            None
        };

        Ok(Node::If {
            condition: Box::new(condition),
            then_block,
            else_block,
        })
    }

    /// "while" "(" bool_expr ")" block
    pub fn parse_while(&mut self) -> ParseResult<Node> {
        self.expect(Keyword::While.as_str(), "'while'")?;
        let condition = self.parse_condition(Keyword::While)?;
        let body = self.parse_block()?;

        Ok(Node::While {
            condition: Box::new(condition),
            body,
        })
    }

    /// decl_kw id {"," id}
    pub fn parse_declare(&mut self) -> ParseResult<Node> {
        let keyword = self.config.decl_keyword.clone();
        self.expect(&keyword, &format!("'{}'", keyword))?;

        let mut names = Vec::new();
        loop {
            names.push(self.parse_name(ParseErrorKind::InvalidIdentifier, "identifier")?);

            if !self.stream.match_token(",") {
                break;
            }
        }

        Ok(Node::Declare { names })
    }

    /// id "=" expr
    pub fn parse_assign(&mut self) -> ParseResult<Node> {
        let target = self.parse_name(ParseErrorKind::InvalidAssignTarget, "assignment target")?;
        self.expect(ASSIGN_OP, "'=' after assignment target")?;
        let value = self.parse_expr()?;

        Ok(Node::Assign {
            target,
            value: Box::new(value),
        })
    }

    fn parse_condition(&mut self, keyword: Keyword) -> ParseResult<Node> {
        self.expect("(", &format!("'(' after '{}'", keyword))?;
        let condition = self.parse_bool_expr()?;
        self.expect(")", &format!("')' after {} condition", keyword))?;

        Ok(condition)
    }

    // ===== Expressions =====

    /// expr := term {("+"|"-") term}
    pub fn parse_expr(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_term()?;

        while let Some(operator) = self.match_operator(ADDITIVE_OPS) {
            let right = self.parse_term()?;
            expr = Node::binary(operator, expr, right);
        }

        Ok(expr)
    }

    /// term := factor {("*"|"/") factor}
    pub fn parse_term(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_factor()?;

        while let Some(operator) = self.match_operator(MULTIPLICATIVE_OPS) {
            let right = self.parse_factor()?;
            expr = Node::binary(operator, expr, right);
        }

        Ok(expr)
    }

    /// factor := "(" expr ")" | int_lit | float_lit | id
    pub fn parse_factor(&mut self) -> ParseResult<Node> {
        if self.stream.check("(") {
            return self.nested(|p| {
                p.stream.advance("'('")?;
                let expr = p.parse_expr()?;
                p.expect(")", "')' after expression")?;
                Ok(expr)
            });
        }

        let position = self.stream.position();
        let text = self.stream.front("expression")?.as_str();

        let node = if is_int_lit(text) {
            let value = text.parse::<i64>().map_err(|_| {
                ParseError::new(
                    ParseErrorKind::UnexpectedToken,
                    format!("integer literal '{}' is out of range", text),
                    position,
                    Some(text.to_string()),
                )
            })?;
            Node::IntLiteral(value)
        } else if is_float_lit(text) {
            match text.parse::<f64>() {
                Ok(value) if value.is_finite() => Node::FloatLiteral(value),
                _ => {
                    return Err(ParseError::new(
                        ParseErrorKind::UnexpectedToken,
                        format!("float literal '{}' is out of range", text),
                        position,
                        Some(text.to_string()),
                    ))
                }
            }
        } else if is_name(text, &self.config.decl_keyword) {
            Node::VarRef(text.to_string())
        } else {
            return Err(ParseError::at_token(
                ParseErrorKind::UnexpectedToken,
                "number, variable or '('",
                text,
                position,
            ));
        };

        self.stream.advance("expression")?;
        Ok(node)
    }

    // ===== Boolean Expressions =====

    /// bool_expr := bool_and {"||" bool_and}
    pub fn parse_bool_expr(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_bool_and()?;

        while self.stream.match_token(BinaryOperator::Or.as_str()) {
            let right = self.parse_bool_and()?;
            expr = Node::binary(BinaryOperator::Or, expr, right);
        }

        Ok(expr)
    }

    fn parse_bool_and(&mut self) -> ParseResult<Node> {
        let mut expr = self.parse_bool_atom()?;

        while self.stream.match_token(BinaryOperator::And.as_str()) {
            let right = self.parse_bool_atom()?;
            expr = Node::binary(BinaryOperator::And, expr, right);
        }

        Ok(expr)
    }

    /// A comparison, or a parenthesized boolean expression.
    ///
    /// A leading `(` may open either a boolean group or an arithmetic operand
    /// such as `(a + 1) * 2 < b`. The group is tried first; on failure the
    /// cursor is rewound and the tokens are parsed as a comparison.
    fn parse_bool_atom(&mut self) -> ParseResult<Node> {
        if !self.stream.check("(") {
            return self.parse_comparison();
        }

        let start = self.stream.checkpoint();
        let group_error = match self.parse_bool_group() {
            Ok(group) => return Ok(group),
            Err(err) if err.kind() == ParseErrorKind::NestingTooDeep => return Err(err),
            Err(err) => err,
        };

        self.stream.rewind(start);
        debug!(
            "token {} is not a boolean group, retrying as comparison",
            self.stream.position()
        );

        // Report whichever attempt got further into the stream
        self.parse_comparison().map_err(|err| {
            if err.position() >= group_error.position() {
                err
            } else {
                group_error
            }
        })
    }

    fn parse_bool_group(&mut self) -> ParseResult<Node> {
        self.nested(|p| {
            p.expect("(", "'('")?;
            let expr = p.parse_bool_expr()?;
            p.expect(")", "')' after boolean expression")?;
            Ok(expr)
        })
    }

    /// expr relop expr
    fn parse_comparison(&mut self) -> ParseResult<Node> {
        let left = self.parse_expr()?;

        let operator = match self.match_operator(RELATIONAL_OPS) {
            Some(operator) => operator,
            None => {
                return Err(self.unexpected(
                    ParseErrorKind::ExpectedRelationalOperator,
                    "relational operator",
                ))
            }
        };

        let right = self.parse_expr()?;
        Ok(Node::binary(operator, left, right))
    }

    // ===== Helper Methods =====

    /// Run a rule one nesting level deeper, failing past the depth limit
    fn nested<T>(&mut self, rule: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        if self.depth >= self.config.max_depth {
            return Err(ParseError::new(
                ParseErrorKind::NestingTooDeep,
                format!("nesting exceeds the limit of {} levels", self.config.max_depth),
                self.stream.position(),
                self.stream.peek().map(|token| token.as_str().to_string()),
            ));
        }

        self.depth += 1;
        let result = rule(self);
        self.depth -= 1;
        result
    }

    /// Consume the front token if it is in `ops` and maps to an operator
    fn match_operator(&mut self, ops: &[&str]) -> Option<BinaryOperator> {
        let operator = match self.stream.peek() {
            Some(token) if is_op(token.as_str(), ops) => BinaryOperator::from_str(token.as_str())?,
            _ => return None,
        };

        self.stream.match_token(operator.as_str());
        Some(operator)
    }

    /// Consume a variable name, failing with `kind` on any other token
    fn parse_name(&mut self, kind: ParseErrorKind, expected: &str) -> ParseResult<String> {
        let position = self.stream.position();
        let text = self.stream.front(expected)?.as_str();

        if !is_name(text, &self.config.decl_keyword) {
            return Err(ParseError::at_token(kind, expected, text, position));
        }

        Ok(self.stream.advance(expected)?.as_str().to_string())
    }

    /// Consume exactly `lexeme` or fail with `UnexpectedToken`
    fn expect(&mut self, lexeme: &str, expected: &str) -> ParseResult<()> {
        if self.stream.match_token(lexeme) {
            Ok(())
        } else {
            Err(self.unexpected(ParseErrorKind::UnexpectedToken, expected))
        }
    }

    fn expect_end(&self, expected: &str) -> ParseResult<()> {
        match self.stream.peek() {
            Some(token) => Err(ParseError::at_token(
                ParseErrorKind::UnexpectedToken,
                expected,
                token.as_str(),
                self.stream.position(),
            )),
            None => Ok(()),
        }
    }

    /// Error of `kind` at the front token, or `UnexpectedEndOfInput` if there is none
    fn unexpected(&self, kind: ParseErrorKind, expected: &str) -> ParseError {
        let position = self.stream.position();
        match self.stream.peek() {
            Some(token) => ParseError::at_token(kind, expected, token.as_str(), position),
            None => ParseError::end_of_input(expected, position),
        }
    }

    /// `UnterminatedBlock` at the front token or at end of input
    fn unterminated(&self, expected: &str) -> ParseError {
        ParseError::expected(
            ParseErrorKind::UnterminatedBlock,
            expected,
            self.stream.peek().map(Token::as_str),
            self.stream.position(),
        )
    }
}
