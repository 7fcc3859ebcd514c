use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        parser::core::ParseResult,
        token::{Token, TokenKind},
    },
};

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>) -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|token| token.kind)
}

/// Consumes the next token if it is of kind `kind`.
///
/// # Errors
/// Returns `ParseError::Expected` naming `kind` and leaves the token in the
/// stream otherwise.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == kind => tokens.next()
                                                   .ok_or(ParseError::UnexpectedEndOfInput { line: 0 }),
        Some(token) => Err(ParseError::Expected { expected: describe(kind),
                                                  found:    token.kind,
                                                  line:     token.line, }),
        None => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    }
}

/// Consumes an identifier and returns its name and line.
pub(in crate::interpreter::parser) fn parse_identifier<'a, I>(tokens: &mut Peekable<I>)
                                                              -> ParseResult<(String, usize)>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Identifier)?;
    let name = token.text().unwrap_or_default().to_string();
    Ok((name, token.line))
}

/// Checks that a statement ends here.
///
/// A newline is consumed; end of input and `}` are left for the enclosing
/// statement list.
pub(in crate::interpreter::parser) fn end_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.peek() {
        Some(token) if token.kind == TokenKind::Eol => {
            tokens.next();
            Ok(())
        },
        Some(token) if matches!(token.kind, TokenKind::Eof | TokenKind::RightBrace) => Ok(()),
        Some(token) => Err(ParseError::Expected { expected: "end of line",
                                                  found:    token.kind,
                                                  line:     token.line, }),
        None => Ok(()),
    }
}

/// Skips the rest of a broken statement.
///
/// Stops after the next newline, or before `{`, end of input, or (inside a
/// block) before `}`.
pub(in crate::interpreter::parser) fn synchronize<'a, I>(tokens: &mut Peekable<I>, nested: bool)
    where I: Iterator<Item = &'a Token>
{
    while let Some(token) = tokens.peek() {
        match token.kind {
            TokenKind::Eol => {
                tokens.next();
                return;
            },
            TokenKind::LeftBrace | TokenKind::Eof => return,
            TokenKind::RightBrace if nested => return,
            _ => {
                tokens.next();
            },
        }
    }
}

/// Human-readable form of a required token, for `ParseError::Expected`.
const fn describe(kind: TokenKind) -> &'static str {
    match kind {
        TokenKind::LeftParen => "\"(\"",
        TokenKind::RightParen => "\")\"",
        TokenKind::LeftBrace => "\"{\"",
        TokenKind::RightBrace => "\"}\"",
        TokenKind::Semicolon => "\";\"",
        TokenKind::Equal => "\"=\"",
        TokenKind::Identifier => "variable name",
        _ => "another token",
    }
}
