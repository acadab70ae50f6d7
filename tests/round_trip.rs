//! Round-trip tests: random trees are printed to tokens and parsed back.
//!
//! Generation is seeded so every run checks the same trees.

use brace_lang::{
    parse_program, parse_program_with, BinaryOperator, Block, Node, ParseErrorKind, ParserConfig,
    Printer,
};
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const NAMES: &[&str] = &["a", "b", "count", "_tmp", "x1", "total"];
const ARITHMETIC: &[BinaryOperator] = &[
    BinaryOperator::Add,
    BinaryOperator::Subtract,
    BinaryOperator::Multiply,
    BinaryOperator::Divide,
];
const RELATIONAL: &[BinaryOperator] = &[
    BinaryOperator::Equal,
    BinaryOperator::NotEqual,
    BinaryOperator::Less,
    BinaryOperator::LessEqual,
    BinaryOperator::Greater,
    BinaryOperator::GreaterEqual,
];

struct Generator {
    rng: StdRng,
}

impl Generator {
    fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn name(&mut self) -> String {
        NAMES[self.rng.gen_range(0..NAMES.len())].to_string()
    }

    fn program(&mut self) -> Node {
        Node::Block(self.block(0))
    }

    fn block(&mut self, depth: usize) -> Block {
        let len = self.rng.gen_range(0..4);
        Block::new((0..len).map(|_| self.statement(depth + 1)).collect())
    }

    fn statement(&mut self, depth: usize) -> Node {
        let choice = if depth >= 3 {
            self.rng.gen_range(0..2)
        } else {
            self.rng.gen_range(0..5)
        };

        match choice {
            0 => Node::Declare {
                names: (0..self.rng.gen_range(1..4)).map(|_| self.name()).collect(),
            },
            1 => Node::Assign {
                target: self.name(),
                value: Box::new(self.expr(0)),
            },
            2 => Node::Block(self.block(depth)),
            3 => Node::If {
                condition: Box::new(self.condition(0)),
                then_block: self.block(depth),
                else_block: if self.rng.gen_bool(0.5) {
                    Some(self.block(depth))
                } else {
                    None
                },
            },
            _ => Node::While {
                condition: Box::new(self.condition(0)),
                body: self.block(depth),
            },
        }
    }

    fn expr(&mut self, depth: usize) -> Node {
        if depth >= 4 || self.rng.gen_bool(0.4) {
            return match self.rng.gen_range(0..3) {
                0 => Node::IntLiteral(self.rng.gen_range(0..1000)),
                1 => Node::FloatLiteral(f64::from(self.rng.gen_range(0..100_000u32)) / 100.0),
                _ => Node::VarRef(self.name()),
            };
        }

        let operator = ARITHMETIC[self.rng.gen_range(0..ARITHMETIC.len())];
        Node::binary(operator, self.expr(depth + 1), self.expr(depth + 1))
    }

    fn condition(&mut self, depth: usize) -> Node {
        if depth >= 2 || self.rng.gen_bool(0.5) {
            let operator = RELATIONAL[self.rng.gen_range(0..RELATIONAL.len())];
            return Node::binary(operator, self.expr(1), self.expr(1));
        }

        let operator = if self.rng.gen_bool(0.5) {
            BinaryOperator::And
        } else {
            BinaryOperator::Or
        };
        Node::binary(operator, self.condition(depth + 1), self.condition(depth + 1))
    }
}

#[test]
fn test_generated_programs_round_trip() {
    let mut generator = Generator::new(0x5eed);
    let mut printer = Printer::new();

    for _ in 0..500 {
        let program = generator.program();
        let tokens = printer.tokens(&program);

        let reparsed = parse_program(tokens.clone())
            .unwrap_or_else(|e| panic!("failed to reparse {:?}: {}", tokens.join(" "), e));
        assert_eq!(reparsed, program);
    }
}

#[test]
fn test_round_trip_with_custom_keyword() {
    let config = ParserConfig::default().with_decl_keyword("let");
    let mut generator = Generator::new(42);
    let mut printer = Printer::with_decl_keyword("let");

    for _ in 0..100 {
        let program = generator.program();
        let reparsed = parse_program_with(printer.tokens(&program), &config).unwrap();
        assert_eq!(reparsed, program);
    }
}

#[test]
fn test_print_is_stable() {
    let mut generator = Generator::new(7);
    let mut printer = Printer::new();

    for _ in 0..100 {
        let program = generator.program();
        let first = printer.render(&program);
        let reparsed = parse_program(first.split_whitespace()).unwrap();
        assert_eq!(printer.render(&reparsed), first);
    }
}

#[test]
fn test_out_of_range_literals_are_rejected() {
    let huge_float = format!("{}.5", "9".repeat(400));
    let huge_int = "9".repeat(30);

    for literal in [huge_float, huge_int] {
        let tokens = vec!["{", "x", "=", literal.as_str(), ";", "}"];
        let err = parse_program(tokens).unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::UnexpectedToken);
        assert_eq!(err.position(), 3);
    }
}
