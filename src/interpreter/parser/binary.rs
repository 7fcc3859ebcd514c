use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        parser::{core::ParseResult, unary::parse_unary},
        token::Token,
    },
};

/// Parses one left-associative precedence level.
///
/// Repeatedly applies `operand` and joins the results with any operator
/// accepted by `accepts`.
///
/// # Parameters
/// - `tokens`: Token stream.
/// - `operand`: Parser for the next tighter level.
/// - `accepts`: Which operators belong to this level.
///
/// # Returns
/// A left-leaning `Expr::BinaryOp` tree, or the single operand.
fn parse_level<'a, I>(tokens: &mut Peekable<I>,
                      operand: fn(&mut Peekable<I>) -> ParseResult<Expr>,
                      accepts: fn(BinaryOperator) -> bool)
                      -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = operand(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = BinaryOperator::from_token(token.kind)
          && accepts(op)
    {
        let line = token.line;
        tokens.next();
        let right = operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Parses `or` chains.
///
/// The rule is: `logical_or := logical_and ("or" logical_and)*`
pub fn parse_logical_or<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, parse_logical_and, |op| op == BinaryOperator::Or)
}

/// Parses `and` chains.
///
/// The rule is: `logical_and := equality ("and" equality)*`
pub fn parse_logical_and<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, parse_equality, |op| op == BinaryOperator::And)
}

/// Parses equality comparisons.
///
/// The rule is: `equality := relational (("==" | "!=") relational)*`
pub fn parse_equality<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, parse_relational, |op| {
        matches!(op, BinaryOperator::Equal | BinaryOperator::NotEqual)
    })
}

/// Parses ordering comparisons.
///
/// The rule is: `relational := additive (("<" | "<=" | ">" | ">=") additive)*`
pub fn parse_relational<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, parse_additive, |op| {
        matches!(op,
                 BinaryOperator::Less
                 | BinaryOperator::LessEqual
                 | BinaryOperator::Greater
                 | BinaryOperator::GreaterEqual)
    })
}

/// Parses addition and subtraction expressions.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Example
/// ```
/// use bsl::{
///     ast::{BinaryOperator, Expr},
///     diagnostics::Diagnostics,
///     interpreter::{lexer::scan, parser::binary::parse_additive},
/// };
///
/// let tokens = scan("1 - 2 - 3", &mut Diagnostics::new());
/// let expr = parse_additive(&mut tokens.iter().peekable()).unwrap();
///
/// // Left-associative: (1 - 2) - 3
/// let Expr::BinaryOp { left, op, .. } = expr else { panic!() };
/// assert_eq!(op, BinaryOperator::Sub);
/// assert!(matches!(*left, Expr::BinaryOp { op: BinaryOperator::Sub, .. }));
/// ```
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, parse_multiplicative, |op| {
        matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    })
}

/// Parses multiplication-level expressions.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "%") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_level(tokens, parse_unary, |op| {
        matches!(op, BinaryOperator::Mul | BinaryOperator::Div | BinaryOperator::Mod)
    })
}
