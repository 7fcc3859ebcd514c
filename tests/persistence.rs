use std::{env, fs, path::PathBuf, process};

use bsl::{
    compile,
    diagnostics::Diagnostics,
    error::PersistError,
    execute,
    persist::{FORMAT_VERSION, compiled_path, from_str, load, save, to_string},
};

const PROGRAM: &str = "var total = 0\n\
                       for (var i = 1; i <= 4; i = i + 1) {\n\
                         if (i % 2 == 0) { total = total + i } else { total = total - 0.5 }\n\
                       }\n\
                       println(\"total: \" + total)\n\
                       print(\"done\")\n";

fn scratch_file(name: &str) -> PathBuf {
    env::temp_dir().join(format!("bsl-{}-{name}", process::id()))
}

fn output_of(program: &[bsl::ast::Stmt]) -> String {
    let mut out = Vec::new();
    execute(program, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn reloaded_program_behaves_identically() {
    let program = compile(PROGRAM, &mut Diagnostics::new()).unwrap();
    let reloaded = from_str(&to_string(&program).unwrap()).unwrap();

    assert_eq!(reloaded, program);
    assert_eq!(output_of(&reloaded), output_of(&program));
    assert_eq!(output_of(&reloaded), "total: 5.0\ndone");
}

#[test]
fn decimal_literals_survive_reloading_exactly() {
    let source = "println(930.9375231122883)\n\
                  println(0.30000000000000004)\n\
                  println(123456.78901234567)\n";
    let program = compile(source, &mut Diagnostics::new()).unwrap();
    let reloaded = from_str(&to_string(&program).unwrap()).unwrap();

    assert_eq!(reloaded, program);
    assert_eq!(output_of(&reloaded), output_of(&program));
    assert!(output_of(&reloaded).starts_with("930.9375231122883\n"));
}

#[test]
fn unrepresentable_decimal_never_reaches_the_compiled_form() {
    let mut diagnostics = Diagnostics::new();
    let source = format!("println({}.0)\n", "9".repeat(400));

    assert!(compile(&source, &mut diagnostics).is_none());
    assert!(diagnostics.errors()
                       .any(|d| d.message.contains("Decimal literal") && d.message.contains("too large")));
}

#[test]
fn save_and_load_through_the_filesystem() {
    let source = scratch_file("roundtrip.bs");
    let target = compiled_path(&source).unwrap();
    assert_eq!(target.extension().and_then(|e| e.to_str()), Some("bsl"));

    let program = compile(PROGRAM, &mut Diagnostics::new()).unwrap();
    save(&target, &program).unwrap();
    let loaded = load(&target);
    fs::remove_file(&target).ok();

    assert_eq!(loaded.unwrap(), program);
}

#[test]
fn compiled_files_have_no_compiled_path() {
    let compiled = scratch_file("already.bsl");
    assert_eq!(compiled_path(&compiled), None);
    assert_eq!(compiled_path(&compiled.with_extension("bs")), Some(compiled));
}

#[test]
fn other_versions_are_refused() {
    let text = format!("{{\"version\": {}, \"statements\": \"whatever\"}}", FORMAT_VERSION + 1);

    match from_str(&text) {
        Err(PersistError::UnsupportedVersion { found, expected }) => {
            assert_eq!(found, FORMAT_VERSION + 1);
            assert_eq!(expected, FORMAT_VERSION);
        },
        other => panic!("expected a version error, got {other:?}"),
    }
}

#[test]
fn malformed_contents_are_format_errors() {
    assert!(matches!(from_str("not json"), Err(PersistError::Format(_))));
    assert!(matches!(from_str("{\"version\": 1, \"statements\": [{\"Nope\": {}}]}"),
                     Err(PersistError::Format(_))));
}

#[test]
fn missing_file_reports_its_path() {
    let path = scratch_file("missing.bsl");
    let error = load(&path).unwrap_err();

    assert!(matches!(&error, PersistError::Io { path: p, .. } if *p == path));
    assert!(error.to_string().contains("missing.bsl"));
}
