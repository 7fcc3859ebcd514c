use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    error::ParseError,
    interpreter::{
        parser::{binary::parse_logical_or, core::ParseResult, utils::expect},
        token::{Token, TokenData, TokenKind},
    },
};

/// Parses prefix operators.
///
/// Unary operators are right-recursive, so `not not x` and `- -x` nest.
///
/// The rule is: `unary := ("not" | "-") unary | primary`
pub fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let op = match tokens.peek().map(|t| t.kind) {
        Some(TokenKind::Not) => UnaryOperator::Not,
        Some(TokenKind::Minus) => UnaryOperator::Negate,
        _ => return parse_primary(tokens),
    };
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let expr = parse_unary(tokens)?;
    Ok(Expr::UnaryOp { op,
                       expr: Box::new(expr),
                       line: token.line })
}

/// Parses literals, variable references and parenthesized groups.
///
/// A token that cannot start an operand is left in the stream.
///
/// # Errors
/// Returns `ParseError::ExpectedExpression` for any other token, and
/// `ParseError::Unbalanced` when a group is not closed.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(&token) = tokens.peek() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let line = token.line;

    let value = match (token.kind, &token.data) {
        (TokenKind::Integer, Some(TokenData::Integer(n))) => LiteralValue::Int(*n),
        (TokenKind::Decimal, Some(TokenData::Decimal(d))) => LiteralValue::Decimal(*d),
        (TokenKind::Str, Some(TokenData::Text(s))) => LiteralValue::Str(s.clone()),
        (TokenKind::True, _) => LiteralValue::Bool(true),
        (TokenKind::False, _) => LiteralValue::Bool(false),
        (TokenKind::Identifier, Some(TokenData::Text(name))) => {
            tokens.next();
            return Ok(Expr::Variable { name: name.clone(),
                                       line });
        },
        (TokenKind::LeftParen, _) => {
            tokens.next();
            let inner = parse_logical_or(tokens)?;
            if expect(tokens, TokenKind::RightParen).is_err() {
                return Err(ParseError::Unbalanced { expected: ')',
                                                    line });
            }
            return Ok(Expr::Group { inner: Box::new(inner) });
        },
        (found, _) => return Err(ParseError::ExpectedExpression { found, line }),
    };

    tokens.next();
    Ok(Expr::Literal { value, line })
}
