use pretty_assertions::assert_eq;

use super::*;
use crate::errors::EvalErrorKind;
use crate::tests::{eval_err, eval_source, test_interpreter};

#[test]
fn test_atoms_evaluate_to_themselves() {
    let mut interp = Interpreter::new();
    for node in [
        Node::Bool(true),
        Node::int(-4),
        Node::decimal(2.5),
        Node::string("text"),
    ] {
        assert_eq!(interp.eval(&node).unwrap(), node);
    }
}

#[test]
fn test_symbol_lookup() {
    let mut interp = Interpreter::new();
    interp.env_mut().define("answer", Node::int(42));
    assert_eq!(interp.eval(&Node::symbol("answer")).unwrap(), Node::int(42));
}

#[test]
fn test_undefined_symbol() {
    let mut interp = Interpreter::new();
    let err = interp.eval(&Node::symbol("missing")).unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedSymbol {
            name: "missing".to_string()
        }
    );
    assert_eq!(err.to_string(), "UndefinedSymbol: undefined symbol `missing`");
}

#[test]
fn test_fail_symbol_always_fails() {
    let mut interp = Interpreter::new();
    interp.env_mut().define(FAIL_SYMBOL, Node::int(1));
    let err = interp.eval(&Node::symbol(FAIL_SYMBOL)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::ExplicitFailure);
}

#[test]
fn test_empty_application() {
    let mut interp = Interpreter::new();
    let err = interp.eval(&Node::nil()).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::EmptyApplication);
}

#[test]
fn test_eval_does_not_consume_input() {
    let mut interp = Interpreter::new();
    let form = Node::list([Node::symbol("+"), Node::int(1), Node::int(2)]);
    assert_eq!(interp.eval(&form).unwrap(), Node::int(3));
    assert_eq!(interp.eval(&form).unwrap(), Node::int(3));
}

#[test]
fn test_lookup_returns_independent_copy() {
    let mut interp = test_interpreter();
    eval_source(&mut interp, "(def xs (quote (1 2)))").unwrap();
    let mut copy = interp.eval(&Node::symbol("xs")).unwrap();
    if let Node::List(items) = &mut copy {
        items.clear();
    }
    assert_eq!(
        interp.eval(&Node::symbol("xs")).unwrap(),
        Node::list([Node::int(1), Node::int(2)])
    );
}

#[test]
fn test_special_form_table_round_trips_names() {
    for form in SpecialForm::ALL {
        assert_eq!(SpecialForm::from_name(form.name()), Some(form));
    }
    assert_eq!(SpecialForm::from_name("lambda?"), None);
}

#[test]
fn test_operand_count_messages() {
    let mut interp = test_interpreter();
    let err = eval_source(&mut interp, "(quote)").unwrap_err();
    assert_eq!(err.message, "`quote` expects 1 operand, got 0");
    let err = eval_source(&mut interp, "(read 1)").unwrap_err();
    assert_eq!(err.message, "`read` expects no operands, got 1");
    let err = eval_source(&mut interp, "(* 1)").unwrap_err();
    assert_eq!(err.message, "`*` expects at least 2 operands, got 1");
    assert_eq!(eval_err(&mut interp, "(if 1 2 3 4)"), EvalErrorKind::SyntaxError);
}

#[test]
fn test_builder_uses_given_environment() {
    let mut env = Environment::new();
    env.define("seed", Node::int(9));
    let mut interp = Interpreter::builder().env(env).build();
    assert_eq!(interp.eval(&Node::symbol("seed")).unwrap(), Node::int(9));
}
