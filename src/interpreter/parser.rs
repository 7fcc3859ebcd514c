/// Entry point and assignment-level expressions.
///
/// Defines the shared result type and the top of the expression grammar.
pub mod core;

/// Unary operator parsing.
///
/// Handles prefix `not` and `-`, and the primary expressions beneath them.
pub mod unary;

/// Binary operator parsing.
///
/// One function per precedence level, from `or` down to `*`, `/` and `%`.
pub mod binary;

/// Statement lists and braced blocks, with per-statement error recovery.
pub mod block;

/// Token-level helpers shared by the other parser modules.
pub mod utils;

/// Statement parsing.
///
/// Declarations, print statements, `if` chains and `for` loops.
pub mod statement;

use crate::{ast::Stmt, diagnostics::Diagnostics, interpreter::token::Token};

/// Builds the statement trees of a program.
///
/// The tokens are expected to have passed validation; any error found anyway
/// is recorded into `diagnostics`, the offending statement is dropped and
/// parsing resumes on the next line.
///
/// # Parameters
/// - `tokens`: Output of the scanner, ending with `Eof`.
/// - `diagnostics`: Receives syntax errors.
///
/// # Returns
/// The top-level statements in source order.
///
/// # Example
/// ```
/// use bsl::{
///     ast::Stmt,
///     diagnostics::Diagnostics,
///     interpreter::{lexer::scan, parser::parse_program},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var x = 1\nprintln(x)\n", &mut diagnostics);
/// let program = parse_program(&tokens, &mut diagnostics);
///
/// assert_eq!(program.len(), 2);
/// assert!(matches!(program[1], Stmt::Print { newline: true, .. }));
/// ```
pub fn parse_program(tokens: &[Token], diagnostics: &mut Diagnostics) -> Vec<Stmt> {
    let mut iter = tokens.iter().peekable();
    let program = block::parse_statements(&mut iter, diagnostics, false);
    tracing::debug!(statements = program.len(), "parsed program");
    program
}
