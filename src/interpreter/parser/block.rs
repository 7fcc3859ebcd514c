use std::iter::Peekable;

use crate::{
    ast::Stmt,
    diagnostics::Diagnostics,
    error::ParseError,
    interpreter::{
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, synchronize},
        },
        token::{Token, TokenKind},
    },
};

/// Parses statements until `}` (when `nested`) or end of input.
///
/// Empty lines are skipped. A statement that fails to parse is reported,
/// dropped, and parsing continues after it, so one broken line does not
/// discard the rest of its block.
///
/// The closing `}` of a nested list is left in the stream.
pub fn parse_statements<'a, I>(tokens: &mut Peekable<I>,
                               diagnostics: &mut Diagnostics,
                               nested: bool)
                               -> Vec<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let mut statements = Vec::new();
    while let Some(&token) = tokens.peek() {
        match token.kind {
            TokenKind::Eol => {
                tokens.next();
            },
            TokenKind::Eof => break,
            TokenKind::RightBrace if nested => break,
            TokenKind::RightBrace => {
                diagnostics.record(&ParseError::Unbalanced { expected: '{',
                                                             line:     token.line, });
                tokens.next();
            },
            _ => match parse_statement(tokens, diagnostics) {
                Ok(statement) => statements.push(statement),
                Err(error) => {
                    diagnostics.record(&error);
                    synchronize(tokens, nested);
                },
            },
        }
    }
    statements
}

/// Parses a braced block.
///
/// The rule is: `block := "{" { EOL | statement } "}"`
///
/// # Returns
/// A `Stmt::Block` holding the statements between the braces.
///
/// # Errors
/// Returns a `ParseError` if the block does not start with `{` or input ends
/// before its `}`.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, diagnostics: &mut Diagnostics) -> ParseResult<Stmt>
    where I: Iterator<Item = &'a Token>
{
    let open = expect(tokens, TokenKind::LeftBrace)?;
    let statements = parse_statements(tokens, diagnostics, true);

    match tokens.peek() {
        Some(token) if token.kind == TokenKind::RightBrace => {
            tokens.next();
            Ok(Stmt::Block { statements })
        },
        Some(token) => Err(ParseError::Unbalanced { expected: '}',
                                                    line:     token.line, }),
        None => Err(ParseError::Unbalanced { expected: '}',
                                             line:     open.line, }),
    }
}
