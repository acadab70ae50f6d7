//! Shape-based token classification
//!
//! Pure predicates used by the parser for lookahead decisions. None of them
//! consume input.

use super::token::Keyword;

pub const ADDITIVE_OPS: &[&str] = &["+", "-"];
pub const MULTIPLICATIVE_OPS: &[&str] = &["*", "/"];
pub const RELATIONAL_OPS: &[&str] = &["==", "!=", "<", "<=", ">", ">="];
pub const CONNECTIVE_OPS: &[&str] = &["&&", "||"];
pub const ASSIGN_OP: &str = "=";
pub const PUNCTUATION: &[&str] = &["(", ")", "{", "}", ";", ","];

/// True iff the token is a non-empty run of ASCII decimal digits
pub fn is_int_lit(token: &str) -> bool {
    is_digit_run(token)
}

/// True iff the token is `digits.digits` with both sides non-empty
///
/// `"3."`, `".5"`, `"."` and `"1.2.3"` are not float literals.
pub fn is_float_lit(token: &str) -> bool {
    match token.split_once('.') {
        Some((whole, fraction)) => is_digit_run(whole) && is_digit_run(fraction),
        None => false,
    }
}

/// True iff the token has identifier shape: an ASCII letter or `_`, then
/// letters, digits or `_`
pub fn is_id(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}

/// True iff the token is a member of `ops`
pub fn is_op(token: &str, ops: &[&str]) -> bool {
    ops.iter().any(|op| *op == token)
}

/// True iff the token is a grammar keyword or the declaration keyword
pub fn is_keyword(token: &str, decl_keyword: &str) -> bool {
    Keyword::from_str(token).is_some() || token == decl_keyword
}

/// True iff the token can name a variable: identifier shape and not a keyword
pub fn is_name(token: &str, decl_keyword: &str) -> bool {
    is_id(token) && !is_keyword(token, decl_keyword)
}

/// True iff the token is any operator the grammar knows
pub fn is_operator(token: &str) -> bool {
    token == ASSIGN_OP
        || is_op(token, ADDITIVE_OPS)
        || is_op(token, MULTIPLICATIVE_OPS)
        || is_op(token, RELATIONAL_OPS)
        || is_op(token, CONNECTIVE_OPS)
}

fn is_digit_run(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}
