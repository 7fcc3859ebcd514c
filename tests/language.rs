use std::fs;

use bsl::{
    diagnostics::Diagnostics,
    error::{PipelineError, RuntimeError},
    interpret,
};
use walkdir::WalkDir;

#[test]
fn demo_programs_produce_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "bs"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                                                             panic!("Failed to read {expected_path:?}: {e}")
                                                         });

        count += 1;
        match interpret(&source) {
            Ok(output) => assert_eq!(output, expected, "demo {path:?} printed the wrong output"),
            Err(e) => panic!("demo {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No demo programs found in demos/");
}

fn assert_output(src: &str, expected: &str) {
    match interpret(src) {
        Ok(output) => assert_eq!(output, expected, "unexpected output for script:\n{src}"),
        Err(e) => panic!("Script failed: {e}\n{src}"),
    }
}

fn assert_rejected(src: &str) -> Diagnostics {
    match interpret(src) {
        Err(PipelineError::Rejected { diagnostics }) => diagnostics,
        other => panic!("Script was expected to be rejected, got {other:?}"),
    }
}

fn assert_runtime_failure(src: &str) -> RuntimeError {
    match interpret(src) {
        Err(PipelineError::Runtime(error)) => error,
        other => panic!("Script was expected to fail at run time, got {other:?}"),
    }
}

#[test]
fn variable_arithmetic() {
    assert_output("var x = 1\nprint(x + 2)\n", "3");
}

#[test]
fn redeclaration_is_rejected() {
    let diagnostics = assert_rejected("var s = \"a\"\nvar s = 2\n");
    assert_eq!(diagnostics.error_count(), 1);
    let error = diagnostics.errors().next().unwrap();
    assert!(error.message.contains("reserved"));
    assert_eq!(error.line, Some(2));
}

#[test]
fn counting_loop() {
    assert_output("for (var i = 0; i < 3; i = i + 1) { println(i) }\n", "0\n1\n2\n");
}

#[test]
fn else_branch_runs_when_condition_fails() {
    assert_output("if (1 > 2) { println(\"x\") } else { println(\"y\") }", "y\n");
}

#[test]
fn kind_mismatch_is_caught_before_running() {
    let diagnostics = assert_rejected("var a = 1\na = \"oops\"\n");
    let message = &diagnostics.errors().next().unwrap().message;
    assert!(message.contains("Could not cast string value to int"), "{message}");
}

#[test]
fn arithmetic_and_promotion() {
    assert_output("println(7 / 2)\n", "3\n");
    assert_output("println(7 / 2.0)\n", "3.5\n");
    assert_output("println(-7 % 3)\n", "-1\n");
    assert_output("println(2 * 3 + 4)\nprintln(2 * (3 + 4))\n", "10\n14\n");
    assert_output("println(1.5 + 1)\nprintln(4.0)\n", "2.5\n4.0\n");
    assert_output("println(- -3)\n", "3\n");
}

#[test]
fn decimals_print_positionally() {
    assert_output("println(10000000000000000.0)\nprintln(0.0000001)\n",
                  "10000000000000000.0\n0.0000001\n");
    assert_output("println(0.5 * 4)\nprintln(-2.5 * 2)\n", "2.0\n-5.0\n");
}

#[test]
fn comparisons_within_a_kind_family() {
    assert_output("println(1 < 1.5)\nprintln(\"abc\" < \"abd\")\nprintln(false < true)\n",
                  "true\ntrue\ntrue\n");
    assert_output("println(2 == 2.0)\nprintln(\"a\" != \"a\")\n", "true\nfalse\n");
    assert_rejected("println(1 == true)\n");
    assert_rejected("println(\"1\" < 2)\n");
}

#[test]
fn string_concatenation_stringifies_right_operand() {
    assert_output("println(\"n=\" + 1 + \", d=\" + 2.0 + \", b=\" + false)\n",
                  "n=1, d=2.0, b=false\n");
    assert_rejected("println(1 + \"a\")\n");
}

#[test]
fn logical_operators_evaluate_both_sides() {
    assert_rejected("var b = true\nprintln(b or 1)\n");

    let error = assert_runtime_failure("var x = 0\nif (true or (1 / x > 0)) { println(\"reached\") }\n");
    assert!(matches!(error, RuntimeError::DivisionByZero { line: 2 }));
}

#[test]
fn kind_pinning_ignores_control_flow() {
    assert_rejected("var a = 1\nif (false) { a = \"x\" }\n");
    assert_rejected("var a = 1\nfor (var i = 0; i < 0; i = i + 1) { a = true }\n");
    assert_output("var a = 1\na = 2.5\nprintln(a)\n", "2.5\n");
}

#[test]
fn block_names_do_not_leak() {
    assert_rejected("{ var a = 1 }\nprintln(a)\n");
    assert_rejected("for (var i = 0; i < 2; i = i + 1) { }\nprintln(i)\n");
    assert_output("var a = 1\n{ var a = \"s\"\nprintln(a) }\nprintln(a)\n", "s\n1\n");
}

#[test]
fn conditions_must_be_boolean() {
    let diagnostics = assert_rejected("if (1) { }\n");
    assert!(diagnostics.errors()
                       .any(|d| d.message == "Could not cast condition to boolean"));
}

#[test]
fn value_faults_surface_only_at_run_time() {
    let error = assert_runtime_failure("var z = 0\nprintln(10 / z)\n");
    assert!(matches!(error, RuntimeError::DivisionByZero { line: 2 }));

    let error = assert_runtime_failure("println(9223372036854775807 + 1)\n");
    assert!(matches!(error, RuntimeError::Overflow { .. }));
}

#[test]
fn output_before_a_runtime_error_is_not_returned() {
    let error = assert_runtime_failure("println(1)\nvar z = 0\nprintln(1 % z)\n");
    assert!(error.is_value_fault());
}

#[test]
fn empty_print_prints_nothing() {
    assert_output("print\nprintln\nprintln(\"x\")\n", "\nx\n");
}

#[test]
fn assignment_yields_its_value() {
    assert_output("var a = 1\nprint a = 5\nprintln(a)\n", "55\n");
}

#[test]
fn lexical_errors_reject_the_program() {
    assert_rejected("var a = 1 @ 2\n");
    assert_rejected("println(\"abc\n");
    assert_rejected("var a = 1\nif !(a == 1) { }\n");
}

#[test]
fn every_broken_statement_is_reported() {
    let diagnostics = assert_rejected("var x = 1 +\nprintln(y)\nvar z = 2\n");
    let lines: Vec<_> = diagnostics.errors().map(|d| d.line).collect();
    assert_eq!(lines, [Some(1), Some(2)]);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_output("// header\n\n\nvar a = 2 // two\n\nprintln(a * a)\n", "4\n");
}
