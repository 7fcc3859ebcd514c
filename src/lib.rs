//! # bsl
//!
//! bsl is a small scripting language written in Rust. Source text goes
//! through four stages:
//!
//! 1. [`scan`] turns text into tokens,
//! 2. a finite-state validator checks grammar and name visibility,
//! 3. a recursive-descent parser builds statement trees,
//! 4. one tree-walking evaluator either type-checks the trees or runs them.
//!
//! A program that passes the first three stages and the check pass can be
//! saved with [`persist`] and executed later.
//!
//! ```
//! let output = bsl::interpret("for (var i = 0; i < 3; i = i + 1) { println(i) }\n").unwrap();
//! assert_eq!(output, "0\n1\n2\n");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

use std::io::Write;

use crate::{
    ast::Stmt,
    diagnostics::Diagnostics,
    error::{PipelineError, RuntimeError},
    interpreter::{
        evaluator::{
            core::Evaluator,
            flow::{Check, Execute},
        },
        parser::parse_program,
        token::Token,
        validator::validate,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Stmt` enums that represent a program
/// as a tree. The tree is built by the parser, walked by the evaluator and
/// serialized by [`persist`].
pub mod ast;
/// Accumulates errors, warnings and notes across the pipeline.
///
/// Every stage reports into one [`Diagnostics`](diagnostics::Diagnostics)
/// value passed to it explicitly; the driver inspects it between stages.
pub mod diagnostics;
/// Provides unified error types for every stage.
///
/// Lexical, syntax, runtime and persistence errors each have their own enum.
/// All of them carry the source line where one applies.
pub mod error;
/// The language pipeline: tokens, scanner, validator, parser, evaluator and
/// runtime values.
pub mod interpreter;
/// Saving and loading compiled programs.
///
/// A compiled program is the checked statement list stored as JSON next to
/// its source, with the `.bsl` extension.
pub mod persist;

/// Splits source text into tokens.
///
/// See [`interpreter::lexer::scan`].
pub fn scan(source: &str, diagnostics: &mut Diagnostics) -> Vec<Token> {
    interpreter::lexer::scan(source, diagnostics)
}

/// Validates, parses and type-checks a token sequence.
///
/// Each stage only runs when nothing before it left an error in
/// `diagnostics`, including errors the scanner reported for these tokens.
///
/// # Returns
/// The parsed program (empty if validation failed) and whether every stage
/// succeeded.
///
/// # Example
/// ```
/// use bsl::{diagnostics::Diagnostics, scan, validate_and_compile};
///
/// let mut diagnostics = Diagnostics::new();
/// let tokens = scan("var a = 1\na = \"oops\"\n", &mut diagnostics);
/// let (_, ok) = validate_and_compile(&tokens, &mut diagnostics);
///
/// assert!(!ok);
/// assert_eq!(diagnostics.errors().next().unwrap().line, Some(2));
/// ```
pub fn validate_and_compile(tokens: &[Token], diagnostics: &mut Diagnostics) -> (Vec<Stmt>, bool) {
    let valid = validate(tokens, diagnostics);
    if !valid || diagnostics.has_error() {
        tracing::debug!("stopping before parse");
        return (Vec::new(), false);
    }

    let program = parse_program(tokens, diagnostics);
    if diagnostics.has_error() {
        tracing::debug!("stopping before check");
        return (program, false);
    }

    let checked = Evaluator::<Check>::check(&program, diagnostics);
    (program, checked)
}

/// Executes a compiled program, writing its output to `out`.
///
/// # Errors
/// Stops at the first runtime error and returns it.
///
/// # Example
/// ```
/// use bsl::{compile, diagnostics::Diagnostics, execute};
///
/// let program = compile("println(\"sum: \" + (1 + 2.5))\n", &mut Diagnostics::new()).unwrap();
/// let mut out = Vec::new();
/// execute(&program, &mut out).unwrap();
///
/// assert_eq!(out, b"sum: 3.5\n");
/// ```
pub fn execute(program: &[Stmt], out: impl Write) -> Result<(), RuntimeError> {
    Evaluator::<Execute<_>>::run(program, out).map(|_| ())
}

/// Scans and compiles `source`.
///
/// # Returns
/// The checked program, or `None` if any stage reported an error; the
/// errors are in `diagnostics`.
pub fn compile(source: &str, diagnostics: &mut Diagnostics) -> Option<Vec<Stmt>> {
    let tokens = scan(source, diagnostics);
    let (program, ok) = validate_and_compile(&tokens, diagnostics);
    ok.then_some(program)
}

/// Compiles and runs `source`, returning everything it printed.
///
/// # Errors
/// - `PipelineError::Rejected` with all diagnostics if compilation fails.
/// - `PipelineError::Runtime` if execution fails.
///
/// # Example
/// ```
/// use bsl::{error::PipelineError, interpret};
///
/// assert_eq!(interpret("var x = 1\nprint(x + 2)\n").unwrap(), "3");
///
/// let Err(PipelineError::Rejected { diagnostics }) = interpret("var s = \"a\"\nvar s = 2\n") else {
///     panic!("redeclaration must be rejected");
/// };
/// assert!(diagnostics.errors().any(|d| d.message.contains("reserved")));
/// ```
pub fn interpret(source: &str) -> Result<String, PipelineError> {
    let mut diagnostics = Diagnostics::new();
    let Some(program) = compile(source, &mut diagnostics) else {
        return Err(PipelineError::Rejected { diagnostics });
    };

    let out = Evaluator::<Execute<Vec<u8>>>::run(&program, Vec::new())?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}
