use pretty_assertions::assert_eq;

use super::{eval_all, eval_err, eval_repr, eval_source, test_interpreter};
use crate::EvalErrorKind;

#[test]
fn test_lambda_value_repr() {
    let mut interp = test_interpreter();
    let repr = eval_repr(&mut interp, "(lambda (x) x)");
    assert!(repr.starts_with("<lambda="), "got {repr}");
    assert!(repr.ends_with('>'), "got {repr}");
}

#[test]
fn test_lambda_values_evaluate_to_themselves() {
    let mut interp = test_interpreter();
    let value = eval_source(&mut interp, "(lambda (x) x)").unwrap();
    assert_eq!(interp.eval(&value).unwrap(), value);
}

#[test]
fn test_immediate_application() {
    let mut interp = test_interpreter();
    assert_eq!(eval_repr(&mut interp, "((lambda (x y) (+ x y)) 3 4)"), "7");
    assert_eq!(eval_repr(&mut interp, "((lambda () 5))"), "5");
}

#[test]
fn test_single_symbol_parameter() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def double (lambda n (* n 2)))"]);
    assert_eq!(eval_repr(&mut interp, "(double 21)"), "42");
    assert_eq!(
        eval_err(&mut interp, "(double 1 2)"),
        EvalErrorKind::ArityMismatch {
            expected: 1,
            got: 2
        }
    );
}

#[test]
fn test_arity_mismatch() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def f (lambda (a b) a))"]);
    assert_eq!(
        eval_err(&mut interp, "(f 1)"),
        EvalErrorKind::ArityMismatch {
            expected: 2,
            got: 1
        }
    );
}

#[test]
fn test_arity_checked_before_arguments_evaluated() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def f (lambda (a) a))"]);
    let err = eval_source(&mut interp, "(f (println 1) (println 2))").unwrap_err();
    assert!(matches!(err.kind, EvalErrorKind::ArityMismatch { .. }));
    assert_eq!(interp.get_print_output(), "");
}

#[test]
fn test_arguments_evaluate_left_to_right() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def f (lambda (a b c) c))"]);
    eval_source(&mut interp, "(f (print 1) (print 2) (print 3))").unwrap();
    assert_eq!(interp.get_print_output(), "123");
}

#[test]
fn test_non_function_application() {
    let mut interp = test_interpreter();
    assert_eq!(eval_err(&mut interp, "(1 2 3)"), EvalErrorKind::NotAFunction);
    assert_eq!(eval_err(&mut interp, "(\"f\")"), EvalErrorKind::NotAFunction);
    assert_eq!(
        eval_err(&mut interp, "(nope 1)"),
        EvalErrorKind::UndefinedSymbol {
            name: "nope".to_string()
        }
    );
}

#[test]
fn test_parameters_unbound_after_call() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def f (lambda (p q) (+ p q)))", "(f 1 2)"]);
    assert!(!interp.env().is_bound("p"));
    assert!(!interp.env().is_bound("q"));
}

#[test]
fn test_parameters_unbound_after_failing_body() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def x 10)", "(def g (lambda (x) (car x)))"]);

    assert_eq!(eval_err(&mut interp, "(g 5)"), EvalErrorKind::TypeError);
    assert_eq!(interp.env().depth("x"), 1);
    assert_eq!(eval_repr(&mut interp, "x"), "10");

    assert_eq!(
        eval_err(&mut interp, "((lambda (x) fail) 1)"),
        EvalErrorKind::ExplicitFailure
    );
    assert_eq!(interp.env().depth("x"), 1);
}

#[test]
fn test_parameter_shadows_global_during_call_only() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def x 1)", "(def show (lambda (x) x))"]);
    assert_eq!(eval_repr(&mut interp, "(show 2)"), "2");
    assert_eq!(eval_repr(&mut interp, "x"), "1");
}

#[test]
fn test_dynamic_scope_sees_caller_bindings() {
    let mut interp = test_interpreter();
    eval_all(
        &mut interp,
        &[
            "(def get-y (lambda () y))",
            "(def with-y (lambda (y) (get-y)))",
        ],
    );
    assert_eq!(eval_repr(&mut interp, "(with-y 7)"), "7");
    assert_eq!(
        eval_err(&mut interp, "(get-y)"),
        EvalErrorKind::UndefinedSymbol {
            name: "y".to_string()
        }
    );
}

#[test]
fn test_free_variable_sees_later_def() {
    let mut interp = test_interpreter();
    eval_all(
        &mut interp,
        &["(def x 1)", "(def read-x (lambda () x))", "(def x 2)"],
    );
    assert_eq!(eval_repr(&mut interp, "(read-x)"), "2");
}

#[test]
fn test_def_of_parameter_inside_body_persists() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def x 10)"]);
    assert_eq!(eval_repr(&mut interp, "((lambda (x) (def x 5)) 1)"), "5");
    assert_eq!(eval_repr(&mut interp, "x"), "5");
    assert_eq!(interp.env().depth("x"), 2);
}

#[test]
fn test_def_of_parameter_in_nested_calls() {
    let mut interp = test_interpreter();
    eval_all(
        &mut interp,
        &[
            "(def set-x (lambda (x) (def x (+ x 100))))",
            "(def outer (lambda (x) (progn (set-x 7) x)))",
        ],
    );
    assert_eq!(eval_repr(&mut interp, "(outer 1)"), "107");
    assert_eq!(eval_repr(&mut interp, "x"), "107");
}

#[test]
fn test_recursion() {
    let mut interp = test_interpreter();
    eval_all(
        &mut interp,
        &["(def fact (lambda (n) (if (eq? n 0) 1 (* n (fact (- n 1))))))"],
    );
    assert_eq!(eval_repr(&mut interp, "(fact 10)"), "3628800");
    assert!(!interp.env().is_bound("n"));
}

#[test]
fn test_deep_recursion_does_not_overflow() {
    let mut interp = test_interpreter();
    eval_all(
        &mut interp,
        &["(def count (lambda (n) (if (eq? n 0) 0 (+ 1 (count (- n 1))))))"],
    );
    assert_eq!(eval_repr(&mut interp, "(count 5000)"), "5000");
}

#[test]
fn test_higher_order_argument() {
    let mut interp = test_interpreter();
    eval_all(
        &mut interp,
        &["(def twice (lambda (f v) (f (f v))))", "(def inc (lambda (i) (+ i 1)))"],
    );
    assert_eq!(eval_repr(&mut interp, "(twice inc 5)"), "7");
}

#[test]
fn test_special_form_names_cannot_be_rebound() {
    let mut interp = test_interpreter();
    eval_all(&mut interp, &["(def car (lambda (l) 99))"]);
    assert_eq!(eval_repr(&mut interp, "(car (quote (1 2)))"), "1");
    assert!(eval_repr(&mut interp, "car").starts_with("<lambda="));
}
