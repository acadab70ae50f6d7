//! Abstract Syntax Tree definitions
//!
//! Statements and expressions share one node type. Parsing builds nodes bottom
//! up and hands ownership to the parent, so the result is always a tree.

use std::fmt;

/// A brace-delimited sequence of statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Node>,
}

impl Block {
    pub fn new(statements: Vec<Node>) -> Self {
        Self { statements }
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

/// AST node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Nested block: { stmt; stmt; }
    Block(Block),

    /// Conditional: if (cond) { ... } else { ... }
    If {
        condition: Box<Node>,
        then_block: Block,
        else_block: Option<Block>,
    },

    /// Loop: while (cond) { ... }
    While {
        condition: Box<Node>,
        body: Block,
    },

    /// Declaration: DataType a, b, c
    Declare {
        names: Vec<String>,
    },

    /// Assignment: x = expr
    Assign {
        target: String,
        value: Box<Node>,
    },

    /// Arithmetic, relational or boolean operation
    BinaryOp {
        operator: BinaryOperator,
        left: Box<Node>,
        right: Box<Node>,
    },

    IntLiteral(i64),
    FloatLiteral(f64),
    VarRef(String),
}

impl Node {
    /// Build a binary operation node
    pub fn binary(operator: BinaryOperator, left: Node, right: Node) -> Self {
        Self::BinaryOp {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// True iff the node is a relational comparison or a boolean connective
    pub fn is_boolean(&self) -> bool {
        matches!(self, Self::BinaryOp { operator, .. } if operator.is_boolean())
    }
}

/// Binary operators, grouped by precedence level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

impl BinaryOperator {
    /// Get operator from its token text
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            "==" => Some(Self::Equal),
            "!=" => Some(Self::NotEqual),
            "<" => Some(Self::Less),
            "<=" => Some(Self::LessEqual),
            ">" => Some(Self::Greater),
            ">=" => Some(Self::GreaterEqual),
            "&&" => Some(Self::And),
            "||" => Some(Self::Or),
            _ => None,
        }
    }

    /// Get the token text of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::LessEqual => "<=",
            Self::Greater => ">",
            Self::GreaterEqual => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    /// Binding strength; higher binds tighter
    pub fn precedence(&self) -> u8 {
        match self {
            Self::Or => 1,
            Self::And => 2,
            Self::Equal
            | Self::NotEqual
            | Self::Less
            | Self::LessEqual
            | Self::Greater
            | Self::GreaterEqual => 3,
            Self::Add | Self::Subtract => 4,
            Self::Multiply | Self::Divide => 5,
        }
    }

    pub fn is_relational(&self) -> bool {
        self.precedence() == 3
    }

    pub fn is_connective(&self) -> bool {
        self.precedence() <= 2
    }

    /// True iff the operator produces a boolean value
    pub fn is_boolean(&self) -> bool {
        self.is_relational() || self.is_connective()
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
