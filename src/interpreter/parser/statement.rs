use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, Stmt},
    diagnostics::Diagnostics,
    error::ParseError,
    interpreter::{
        parser::{
            binary::parse_logical_or,
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{end_statement, expect, parse_identifier, peek_kind},
        },
        token::{Token, TokenKind},
    },
};

/// Parses a single statement, including its terminator.
///
/// Dispatches on the first token:
/// - `var` declarations,
/// - `print` / `println`,
/// - `if` chains and `for` loops,
/// - `{` blocks,
/// - anything else as an expression statement.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the statement.
/// - `diagnostics`: Receives errors from statements nested in blocks.
///
/// # Errors
/// Returns the first `ParseError` of this statement. Errors inside nested
/// blocks are recorded directly and do not fail the outer statement.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              diagnostics: &mut Diagnostics)
                              -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let statement = match peek_kind(tokens) {
        Some(TokenKind::Var) => parse_var(tokens)?,
        Some(TokenKind::Print | TokenKind::Println) => parse_print(tokens)?,
        Some(TokenKind::If) => parse_if(tokens, diagnostics)?,
        Some(TokenKind::For) => parse_for(tokens, diagnostics)?,
        Some(TokenKind::LeftBrace) => parse_block(tokens, diagnostics)?,
        Some(TokenKind::Else) => {
            let line = tokens.next().map_or(0, |token| token.line);
            return Err(ParseError::DanglingElse { line });
        },
        _ => Stmt::Expression { expr: parse_expression(tokens)? },
    };
    end_statement(tokens)?;
    Ok(statement)
}

/// Parses `var NAME = initializer` without its terminator.
fn parse_var<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Var)?;
    let (name, line) = parse_identifier(tokens)?;
    expect(tokens, TokenKind::Equal)?;
    let initializer = parse_logical_or(tokens)?;
    Ok(Stmt::Var { name,
                   initializer,
                   line })
}

/// Parses `print` or `println` with an optional expression.
///
/// With nothing before the end of the statement the value printed is the
/// empty string.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let Some(keyword) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { line: 0 });
    };
    let newline = keyword.kind == TokenKind::Println;

    let expr = match peek_kind(tokens) {
        Some(TokenKind::Eol | TokenKind::Eof | TokenKind::RightBrace) | None => {
            Expr::Literal { value: LiteralValue::Str(String::new()),
                            line:  keyword.line, }
        },
        _ => parse_expression(tokens)?,
    };
    Ok(Stmt::Print { expr, newline })
}

/// Parses an `if` statement and any `else` / `else if` chain.
///
/// The rule is:
/// `if := "if" logical_or block ("else" (if | block))?`
///
/// `else` must follow the closing brace on the same line.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, diagnostics: &mut Diagnostics) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::If)?;
    let condition = parse_logical_or(tokens)?;
    let then_branch = parse_block(tokens, diagnostics)?;

    let else_branch = if peek_kind(tokens) == Some(TokenKind::Else) {
        tokens.next();
        match peek_kind(tokens) {
            Some(TokenKind::If) => Some(parse_if(tokens, diagnostics)?),
            _ => Some(parse_block(tokens, diagnostics)?),
        }
    } else {
        None
    };

    Ok(Stmt::If { condition,
                  then_branch: Box::new(then_branch),
                  else_branch: else_branch.map(Box::new) })
}

/// Parses a `for` loop and lowers it into `Block[For]`.
///
/// The surrounding block gives the induction variable its own scope, so it
/// is undefined after the loop.
///
/// The rule is:
/// `for := "for" "(" ("var" NAME "=" logical_or)? ";" logical_or ";"
///         (NAME "=" logical_or)? ")" block`
fn parse_for<'a, I>(tokens: &mut Peekable<I>, diagnostics: &mut Diagnostics) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::For)?;
    expect(tokens, TokenKind::LeftParen)?;

    let init = if peek_kind(tokens) == Some(TokenKind::Var) {
        Some(Box::new(parse_var(tokens)?))
    } else {
        None
    };
    expect(tokens, TokenKind::Semicolon)?;

    let condition = parse_logical_or(tokens)?;
    expect(tokens, TokenKind::Semicolon)?;

    let iterate = if peek_kind(tokens) == Some(TokenKind::Identifier) {
        let (name, line) = parse_identifier(tokens)?;
        expect(tokens, TokenKind::Equal)?;
        let value = parse_logical_or(tokens)?;
        Some(Box::new(Stmt::Expression { expr: Expr::Assign { name,
                                                              value: Box::new(value),
                                                              line } }))
    } else {
        None
    };
    expect(tokens, TokenKind::RightParen)?;

    let body = parse_block(tokens, diagnostics)?;
    Ok(Stmt::Block { statements: vec![Stmt::For { init,
                                                  condition,
                                                  iterate,
                                                  body: Box::new(body) }] })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::BinaryOperator,
        interpreter::{lexer::scan, parser::parse_program},
    };

    fn parse(source: &str) -> (Vec<Stmt>, Diagnostics) {
        let mut diagnostics = Diagnostics::new();
        let tokens = scan(source, &mut diagnostics);
        let program = parse_program(&tokens, &mut diagnostics);
        (program, diagnostics)
    }

    #[test]
    fn for_is_wrapped_in_a_block() {
        let (program, diagnostics) = parse("for (var i = 0; i < 3; i = i + 1) { println(i) }\n");
        assert!(diagnostics.is_empty());
        let [Stmt::Block { statements }] = program.as_slice() else {
            panic!("expected one block, got {program:?}");
        };
        let [Stmt::For { init, iterate, .. }] = statements.as_slice() else {
            panic!("expected a for loop, got {statements:?}");
        };
        assert!(matches!(init.as_deref(), Some(Stmt::Var { .. })));
        assert!(matches!(iterate.as_deref(),
                         Some(Stmt::Expression { expr: Expr::Assign { .. } })));
    }

    #[test]
    fn else_if_chains_nest() {
        let (program, diagnostics) =
            parse("if true { } else if false { } else { println(1) }\n");
        assert!(diagnostics.is_empty());
        let [Stmt::If { else_branch: Some(else_branch),
                        .. }] = program.as_slice()
        else {
            panic!("expected if, got {program:?}");
        };
        assert!(matches!(**else_branch,
                         Stmt::If { else_branch: Some(_),
                                    .. }));
    }

    #[test]
    fn empty_print_prints_empty_string() {
        let (program, _) = parse("println\n");
        assert_eq!(program,
                   [Stmt::Print { expr:    Expr::Literal { value: LiteralValue::Str(String::new()),
                                                           line:  1, },
                                  newline: true, }]);
    }

    #[test]
    fn precedence_binds_comparison_below_arithmetic() {
        let (program, _) = parse("1 + 2 * 3 < 10 and true\n");
        let [Stmt::Expression { expr: Expr::BinaryOp { op, left, .. } }] = program.as_slice() else {
            panic!("expected binary expression, got {program:?}");
        };
        assert_eq!(*op, BinaryOperator::And);
        assert!(matches!(**left,
                         Expr::BinaryOp { op: BinaryOperator::Less,
                                          .. }));
    }

    #[test]
    fn broken_line_in_block_keeps_rest_of_block() {
        let (program, diagnostics) = parse("{\nvar = 1\nprintln(2)\n}\nprintln(3)\n");
        assert_eq!(diagnostics.error_count(), 1);
        assert_eq!(program.len(), 2);
        let Stmt::Block { statements } = &program[0] else {
            panic!("expected block, got {:?}", program[0]);
        };
        assert_eq!(statements.len(), 1);
    }

    #[test]
    fn assignment_requires_a_name() {
        let (_, diagnostics) = parse("1 = 2\n");
        assert_eq!(diagnostics.errors()
                              .map(|d| d.message.as_str())
                              .collect::<Vec<_>>(),
                   ["Invalid assignment target"]);
    }
}
