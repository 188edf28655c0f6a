use std::process::Command;

use pretty_assertions::assert_eq;

use crate::common::{run_script, stderr, stdout};

#[test]
fn prints_only_explicit_output() {
    let output = run_script("(+ 1 2)\n(println (+ 1 2))\n(print \"a b\")\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "3\na b");
}

#[test]
fn multiline_forms_and_comments() {
    let source = "\
# square a number
(def sq
  (lambda (x)
    # body
    (* x x)))

(println (sq 12))
";
    let output = run_script(source, &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "144\n");
}

#[test]
fn prelude_is_loaded_by_default() {
    let output = run_script("(println (map (lambda (x) (+ x 1)) (quote (1 2 3))))\n", &[]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(stdout(&output), "( 2 3 4 )\n");
}

#[test]
fn no_prelude_flag_skips_definitions() {
    let output = run_script("(println #true)\n", &["--no-prelude"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("UndefinedSymbol"));
}

#[test]
fn first_error_stops_the_run() {
    let output = run_script("(println 1)\n(car 5)\n(println 2)\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "1\n");
    assert!(stderr(&output).contains("TypeError"));
}

#[test]
fn exit_sets_status() {
    let output = run_script("(println 1)\n(exit 3)\n(println 2)\n", &[]);
    assert_eq!(output.status.code(), Some(3));
    assert_eq!(stdout(&output), "1\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn unterminated_form_is_reported() {
    let output = run_script("(println 1)\n(+ 1 2\n", &[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Unmatched '('"));
}

#[test]
fn missing_file_is_an_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_todalu"))
        .arg("/nonexistent/script.tdl")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_todalu"))
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).starts_with("Todalu "));
}
