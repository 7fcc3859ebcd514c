use std::io::{self, Write};

use bsl::{
    ast::Stmt,
    diagnostics::Diagnostics,
    error::RuntimeError,
    execute,
    interpreter::{
        evaluator::{
            core::Evaluator,
            flow::{Check, Execute},
        },
        lexer::scan,
        parser::parse_program,
    },
};

/// Parses without validating, so the evaluator sees programs the earlier
/// stages would have stopped.
fn parse(source: &str) -> Vec<Stmt> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    let program = parse_program(&tokens, &mut diagnostics);
    assert!(!diagnostics.has_error(), "{diagnostics}");
    program
}

fn run(source: &str) -> Result<String, RuntimeError> {
    let out = Evaluator::<Execute<Vec<u8>>>::run(&parse(source), Vec::new())?;
    Ok(String::from_utf8_lossy(&out).into_owned())
}

fn check(source: &str) -> Diagnostics {
    let mut diagnostics = Diagnostics::new();
    Evaluator::<Check>::check(&parse(source), &mut diagnostics);
    diagnostics
}

#[test]
fn check_visits_both_arms() {
    let diagnostics = check("var a = 1\n\
                             if (true) { a = \"then\" } else { a = false }\n\
                             if (false) { a = \"then\" } else { a = 2.5 }\n");

    let lines: Vec<_> = diagnostics.errors().map(|d| d.line).collect();
    assert_eq!(lines, [Some(2), Some(3)]);
}

#[test]
fn check_enters_loops_exactly_once() {
    let mut evaluator = Evaluator::new(Check);
    for statement in parse("var n = 0\nfor (var i = 0; i < 10; i = i + 1) { n = n + 1 }\n\
                            for (; false; ) { n = n + 1 }\n")
    {
        evaluator.eval_statement(&statement).unwrap();
    }

    assert_eq!(evaluator.environment.get("n", 0).unwrap().to_string(), "2");
}

#[test]
fn execute_follows_the_condition() {
    assert_eq!(run("if (1 < 2) { print(\"a\") } else { print(\"b\") }\n").unwrap(), "a");
    assert_eq!(run("var n = 0\nfor (; n < 5; n = n + 1) { }\nprintln(n)\n").unwrap(),
               "5\n");
}

#[test]
fn check_absorbs_faults_that_execute_reports() {
    let source = "var z = 0\nvar q = 1 / z\nvar m = 5 % z\n";

    assert!(!check(source).has_error());
    assert!(matches!(run(source), Err(RuntimeError::DivisionByZero { line: 2 })));
}

#[test]
fn check_still_reports_type_errors() {
    let diagnostics = check("var z = 0\nprintln((1 / z) + true)\n");
    assert_eq!(diagnostics.error_count(), 1);
}

#[test]
fn check_records_every_failing_statement() {
    let diagnostics = check("println(1 + true)\nprintln(\"x\" - 1)\nprintln(not 1)\nprintln(2)\n");
    assert_eq!(diagnostics.error_count(), 3);
}

#[test]
fn failed_block_restores_scope_depth() {
    let mut evaluator = Evaluator::new(Check);
    let program = parse("{\n{\nvar b = 1\nb = \"x\"\n}\n}\n");

    assert!(evaluator.eval_statement(&program[0]).is_err());
    assert_eq!(evaluator.environment.depth(), 1);
}

#[test]
fn integer_overflow_is_reported() {
    assert!(matches!(run("var big = 9223372036854775807\nbig = big * 2\n"),
                     Err(RuntimeError::Overflow { line: 2 })));
    assert!(matches!(run("var small = -9223372036854775807 - 1\nsmall = -small\n"),
                     Err(RuntimeError::Overflow { line: 2 })));
}

#[test]
fn mixed_arithmetic_widens_to_decimal() {
    assert_eq!(run("var d = 1\nd = d + 0.5\nprintln(d)\nprintln(3 * 0.5)\n").unwrap(),
               "1.5\n1.5\n");
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn write_failures_are_runtime_errors() {
    let error = execute(&parse("println(1)\n"), BrokenPipe).unwrap_err();

    assert!(matches!(error, RuntimeError::Output(_)));
    assert!(!error.is_value_fault());
}
