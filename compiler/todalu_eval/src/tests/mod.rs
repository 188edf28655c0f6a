//! Evaluator tests driven from source text.

mod lambda_tests;

use todalu_parse::read_one;

use crate::errors::syntax_error;
use crate::{
    buffer_handler, scripted_handler, EvalErrorKind, EvalResult, Interpreter, SharedInputHandler,
};

/// Interpreter with captured output and no input.
pub(crate) fn test_interpreter() -> Interpreter {
    scripted_interpreter(scripted_handler(Vec::<String>::new()))
}

/// Interpreter with captured output reading from `input`.
pub(crate) fn scripted_interpreter(input: SharedInputHandler) -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .input_handler(input)
        .build()
}

/// Read exactly one form from `source` and evaluate it.
pub(crate) fn eval_source(interp: &mut Interpreter, source: &str) -> EvalResult {
    let form = read_one(source)?.ok_or_else(|| syntax_error("no form in test source"))?;
    interp.eval(&form)
}

pub(crate) fn eval_repr(interp: &mut Interpreter, source: &str) -> String {
    eval_source(interp, source).unwrap().repr()
}

pub(crate) fn eval_err(interp: &mut Interpreter, source: &str) -> EvalErrorKind {
    eval_source(interp, source).unwrap_err().kind
}

/// Evaluate every source in order, discarding results.
pub(crate) fn eval_all(interp: &mut Interpreter, sources: &[&str]) {
    for source in sources {
        eval_source(interp, source).unwrap();
    }
}
