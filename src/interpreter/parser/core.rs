use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        parser::{binary::parse_logical_or, utils::peek_kind},
        token::{Token, TokenKind},
    },
};

/// Result type used by the parser.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full expression, including a trailing assignment.
///
/// Assignment binds loosest and is only valid when the left side is a bare
/// variable. It does not chain: `a = b = 1` is rejected by the statement's
/// terminator check.
///
/// The rule is: `expression := logical_or ("=" logical_or)?`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the expression.
///
/// # Returns
/// An `Expr::Assign` or the plain `logical_or` expression.
///
/// # Errors
/// Returns `ParseError::InvalidAssignmentTarget` if `=` follows anything but a
/// variable name.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let left = parse_logical_or(tokens)?;
    if peek_kind(tokens) != Some(TokenKind::Equal) {
        return Ok(left);
    }
    let Some(equals) = tokens.next() else {
        return Ok(left);
    };

    match left {
        Expr::Variable { name, line } => {
            let value = parse_logical_or(tokens)?;
            Ok(Expr::Assign { name,
                              value: Box::new(value),
                              line })
        },
        _ => Err(ParseError::InvalidAssignmentTarget { line: equals.line }),
    }
}
