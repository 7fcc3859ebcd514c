use bsl::{
    diagnostics::Diagnostics,
    interpreter::{
        lexer::scan,
        parser::parse_program,
        token::{Token, TokenKind},
        validator::{Validator, validate},
    },
};

const WELL_FORMED: &[&str] = &["var x = 1\nprintln(x)\n",
                               "print\nprintln\n",
                               "{ }\n{\n}\n",
                               "var s = \"a\" + 1 // trailing comment\n",
                               "var a = 1\na = -a * (2 + 3) % 4\n",
                               "var b = not true and false or 1 <= 2\n",
                               "var x = 0\nif (x > 1) { } else if (x < 0) { } else { x = 1 }\n",
                               "for (; false; ) { }\n",
                               "for (var i = 0; i < 2; i = i + 1) {\n  if (i == 0) {\n    println(i)\n  } else {\n    print(i)\n  }\n}\n",
                               "var t = 1\n{\n  var t = 2\n  {\n    t = 3\n  }\n}\n",
                               "\n\n// only comments\n\n"];

const MALFORMED: &[&str] = &["var = 1\n",
                             "var x 1\n",
                             "var x = 1 2\n",
                             "println(1 +)\n",
                             "println((1)\n",
                             "println(1))\n",
                             "1 = 2\n",
                             "}\n",
                             "else { }\n",
                             "if (true) {\nprintln(1)\n",
                             "if (true) { } else\n",
                             "if (true) { }\nelse { }\n",
                             "for (var i = 0; i < 3) { }\n",
                             "for var i = 0; i < 3; i = i + 1 { }\n"];

fn tokens(source: &str) -> Vec<Token> {
    let mut diagnostics = Diagnostics::new();
    let tokens = scan(source, &mut diagnostics);
    assert!(!diagnostics.has_error(), "scan failed for {source:?}:\n{diagnostics}");
    tokens
}

fn validator_accepts(tokens: &[Token]) -> bool {
    validate(tokens, &mut Diagnostics::new())
}

fn parser_accepts(tokens: &[Token]) -> bool {
    let mut diagnostics = Diagnostics::new();
    parse_program(tokens, &mut diagnostics);
    !diagnostics.has_error()
}

#[test]
fn scanner_ends_with_single_eof() {
    for source in WELL_FORMED.iter().chain(MALFORMED) {
        let tokens = tokens(source);
        let eofs = tokens.iter()
                         .filter(|t| t.kind == TokenKind::Eof)
                         .count();
        assert_eq!(eofs, 1, "{source:?}");
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof), "{source:?}");
    }
}

#[test]
fn scanner_never_emits_leading_or_repeated_eol() {
    for source in WELL_FORMED.iter().chain(MALFORMED) {
        let tokens = tokens(source);
        assert_ne!(tokens.first().map(|t| t.kind), Some(TokenKind::Eol), "{source:?}");
        for pair in tokens.windows(2) {
            assert!(!(pair[0].kind == TokenKind::Eol && pair[1].kind == TokenKind::Eol),
                    "double end of line in {source:?}");
        }
    }
}

#[test]
fn scanner_lines_never_decrease() {
    for source in WELL_FORMED.iter().chain(MALFORMED) {
        let tokens = tokens(source);
        assert!(tokens.windows(2).all(|pair| pair[0].line <= pair[1].line),
                "{source:?}");
    }
}

#[test]
fn empty_source_is_just_eof() {
    let tokens = tokens("");
    assert_eq!(tokens, [Token::new(TokenKind::Eof, 1)]);
}

#[test]
fn validator_and_parser_accept_the_same_programs() {
    for source in WELL_FORMED {
        let tokens = tokens(source);
        assert!(validator_accepts(&tokens), "validator rejected {source:?}");
        assert!(parser_accepts(&tokens), "parser rejected {source:?}");
    }
}

#[test]
fn validator_and_parser_reject_the_same_programs() {
    for source in MALFORMED {
        let tokens = tokens(source);
        assert!(!validator_accepts(&tokens), "validator accepted {source:?}");
        assert!(!parser_accepts(&tokens), "parser accepted {source:?}");
    }
}

#[test]
fn name_visibility_is_left_to_the_validator() {
    let tokens = tokens("println(y)\n");
    assert!(!validator_accepts(&tokens));
    assert!(parser_accepts(&tokens));
}

#[test]
fn validator_results_do_not_leak_between_runs() {
    let mut validator = Validator::new();
    let mut diagnostics = Diagnostics::new();

    assert!(!validator.validate(&tokens("{\n"), &mut diagnostics));
    assert!(validator.validate(&tokens("var a = 1\n"), &mut diagnostics));
    assert!(validator.validate(&tokens("var a = 2\n"), &mut diagnostics));
}

#[test]
fn parser_recovers_and_reports_each_statement() {
    let mut diagnostics = Diagnostics::new();
    let program = parse_program(&tokens("var = 1\nprintln(2)\nvar x 3\nprintln(4)\n"),
                                &mut diagnostics);

    assert_eq!(diagnostics.error_count(), 2);
    assert_eq!(program.len(), 2);
}
