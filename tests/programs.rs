//! Integration tests that parse complete token programs through the public API.

use brace_lang::{
    parse_program, parse_program_with, BinaryOperator, Block, Diagnostic, Node, ParseErrorKind,
    ParserConfig, Printer, TokenStream,
};
use pretty_assertions::assert_eq;

fn tokens(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_string).collect()
}

fn parse(text: &str) -> Node {
    parse_program(tokens(text)).expect("program should parse")
}

fn error_kind(text: &str) -> ParseErrorKind {
    parse_program(tokens(text))
        .expect_err("program should fail")
        .kind()
}

const COUNTDOWN: &str = "
{
    DataType n , total , ratio ;
    n = 10 ;
    total = 0 ;
    while ( n > 0 && total < 100 ) {
        total = total + n * 2 ;
        n = n - 1 ;
    } ;
    if ( total >= 50 || n == 0 ) {
        ratio = total / 3.5 ;
    } else {
        ratio = 0.0 ;
    } ;
}
";

#[test]
fn test_parse_countdown_program() {
    let program = parse(COUNTDOWN);

    let Node::Block(block) = &program else {
        panic!("program should be a block, got {:?}", program);
    };
    assert_eq!(block.statements.len(), 5);
    assert!(matches!(block.statements[0], Node::Declare { ref names } if names.len() == 3));
    assert!(matches!(block.statements[3], Node::While { .. }));

    match &block.statements[4] {
        Node::If {
            condition,
            else_block,
            ..
        } => {
            assert!(condition.is_boolean());
            assert!(else_block.is_some());
        }
        other => panic!("expected if statement, got {:?}", other),
    }
}

#[test]
fn test_conditions_are_boolean() {
    let program = parse(COUNTDOWN);
    let Node::Block(block) = program else {
        panic!("program should be a block");
    };

    for statement in &block.statements {
        match statement {
            Node::If { condition, .. } | Node::While { condition, .. } => {
                assert!(condition.is_boolean(), "non-boolean condition {:?}", condition)
            }
            _ => {}
        }
    }
}

#[test]
fn test_printed_program_reparses() {
    let program = parse(COUNTDOWN);
    let printed = Printer::new().tokens(&program);

    assert_eq!(parse_program(printed).unwrap(), program);
}

#[test]
fn test_while_body_structure() {
    let program = parse("{ while ( i < 3 ) { i = i + 1 ; } ; }");
    let expected = Node::Block(Block::new(vec![Node::While {
        condition: Box::new(Node::binary(
            BinaryOperator::Less,
            Node::VarRef("i".to_string()),
            Node::IntLiteral(3),
        )),
        body: Block::new(vec![Node::Assign {
            target: "i".to_string(),
            value: Box::new(Node::binary(
                BinaryOperator::Add,
                Node::VarRef("i".to_string()),
                Node::IntLiteral(1),
            )),
        }]),
    }]));

    assert_eq!(program, expected);
}

#[test]
fn test_error_kinds() {
    assert_eq!(error_kind("{ x = 1 x = 2 ; }"), ParseErrorKind::MissingSeparator);
    assert_eq!(error_kind("{ x = 1 ;"), ParseErrorKind::UnterminatedBlock);
    assert_eq!(error_kind("{ DataType a , ; }"), ParseErrorKind::InvalidIdentifier);
    assert_eq!(error_kind("{ 3 = x ; }"), ParseErrorKind::InvalidAssignTarget);
    assert_eq!(error_kind("{ if ( x ) { } ; }"), ParseErrorKind::ExpectedRelationalOperator);
    assert_eq!(error_kind("{ if x < 1 { } ; }"), ParseErrorKind::UnexpectedToken);
    assert_eq!(error_kind("{ x = ( 1 + 2 ; }"), ParseErrorKind::UnexpectedToken);
    assert_eq!(error_kind("{ x = 1 + ; }"), ParseErrorKind::UnexpectedToken);
    assert_eq!(error_kind("{ x ="), ParseErrorKind::UnexpectedEndOfInput);
    assert_eq!(error_kind(""), ParseErrorKind::UnterminatedBlock);
}

#[test]
fn test_else_without_if_is_rejected() {
    assert_eq!(error_kind("{ else { } ; }"), ParseErrorKind::InvalidAssignTarget);
}

#[test]
fn test_statements_after_else_need_separator() {
    let program = parse("{ if ( a < b ) { } else { } ; x = 1 ; }");
    let Node::Block(block) = program else {
        panic!("program should be a block");
    };
    assert_eq!(block.statements.len(), 2);

    assert_eq!(
        error_kind("{ if ( a < b ) { } else { } x = 1 ; }"),
        ParseErrorKind::MissingSeparator
    );
}

#[test]
fn test_configured_declaration_keyword() {
    let config = ParserConfig::default().with_decl_keyword("int");
    let program = parse_program_with(tokens("{ int a , b ; a = 1 ; }"), &config).unwrap();

    let Node::Block(block) = program else {
        panic!("program should be a block");
    };
    assert_eq!(
        block.statements[0],
        Node::Declare {
            names: vec!["a".to_string(), "b".to_string()]
        }
    );

    // The default keyword is an ordinary name once another one is configured
    assert!(parse_program_with(tokens("{ DataType = 1 ; }"), &config).is_ok());
}

#[test]
fn test_diagnostic_points_at_offending_token() {
    colored::control::set_override(false);

    let stream = TokenStream::from_whitespace("{ x = 1 y = 2 ; }");
    let err = brace_lang::Parser::new(stream.clone())
        .parse_program()
        .unwrap_err();
    let rendered = Diagnostic::new(&err)
        .with_tokens(stream.tokens())
        .with_filename("demo.tok")
        .to_string();

    assert!(rendered.starts_with("Missing Separator: expected ';' after statement, found 'y'"));
    assert!(rendered.contains("--> demo.tok:token 4"));
    assert!(rendered.contains("^"));
}
