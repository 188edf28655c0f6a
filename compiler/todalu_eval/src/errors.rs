//! Evaluation errors and their constructors.
//!
//! Every failure the evaluator can raise is an [`EvalError`]: a typed
//! [`EvalErrorKind`] plus a human-readable message. Constructors live here so
//! message wording stays in one place.

use std::fmt;

use todalu_ir::{Node, NodeKind};
use todalu_parse::ParseError;

/// Result of evaluation.
pub type EvalResult = Result<Node, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    /// Bad special-form arity, non-symbol where one is required, malformed
    /// lambda parameters, or a reader failure.
    SyntaxError,
    UndefinedSymbol {
        name: String,
    },
    TypeError,
    EmptyList,
    /// Evaluation of `()`.
    EmptyApplication,
    ArityMismatch {
        expected: usize,
        got: usize,
    },
    NotAFunction,
    /// Evaluation of the reserved `fail` symbol.
    ExplicitFailure,
    /// `(exit code)`. Not a failure: the driver terminates with `code`.
    ExitRequested {
        code: i32,
    },
    DivisionByZero,
    IntegerOverflow,
    /// Reading from the input handler failed.
    Io,
}

impl EvalErrorKind {
    /// Category name shown to users.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SyntaxError => "SyntaxError",
            Self::UndefinedSymbol { .. } => "UndefinedSymbol",
            Self::TypeError => "TypeError",
            Self::EmptyList => "EmptyList",
            Self::EmptyApplication => "EmptyApplication",
            Self::ArityMismatch { .. } => "ArityMismatch",
            Self::NotAFunction => "NotAFunction",
            Self::ExplicitFailure => "ExplicitFailure",
            Self::ExitRequested { .. } => "ExitRequested",
            Self::DivisionByZero => "DivisionByZero",
            Self::IntegerOverflow => "IntegerOverflow",
            Self::Io => "IoError",
        }
    }
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An evaluation failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct EvalError {
    pub kind: EvalErrorKind,
    pub message: String,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, message: impl Into<String>) -> Self {
        EvalError {
            kind,
            message: message.into(),
        }
    }

    /// Exit code if this is a deliberate `(exit n)`.
    pub fn exit_code(&self) -> Option<i32> {
        match self.kind {
            EvalErrorKind::ExitRequested { code } => Some(code),
            _ => None,
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        syntax_error(err.to_string())
    }
}

// Syntax

#[cold]
pub fn syntax_error(message: impl Into<String>) -> EvalError {
    EvalError::new(EvalErrorKind::SyntaxError, message)
}

/// A special form was given the wrong number of operands.
#[cold]
pub fn wrong_operand_count(form: &str, expected: &str, got: usize) -> EvalError {
    syntax_error(format!("`{form}` expects {expected}, got {got}"))
}

// Lookup

#[cold]
pub fn undefined_symbol(name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::UndefinedSymbol {
            name: name.to_owned(),
        },
        format!("undefined symbol `{name}`"),
    )
}

#[cold]
pub fn explicit_failure(name: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::ExplicitFailure,
        format!("`{name}` always fails"),
    )
}

// Operand types

#[cold]
pub fn type_error(form: &str, expected: &str, got: NodeKind) -> EvalError {
    EvalError::new(
        EvalErrorKind::TypeError,
        format!("`{form}` expects {expected}, got {got}"),
    )
}

#[cold]
pub fn empty_list(form: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::EmptyList,
        format!("`{form}` applied to an empty list"),
    )
}

// Application

#[cold]
pub fn empty_application() -> EvalError {
    EvalError::new(
        EvalErrorKind::EmptyApplication,
        "cannot evaluate an empty list",
    )
}

#[cold]
pub fn not_a_function(got: NodeKind) -> EvalError {
    EvalError::new(
        EvalErrorKind::NotAFunction,
        format!("cannot call a value of type {got}"),
    )
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize) -> EvalError {
    let arg_word = if expected == 1 {
        "argument"
    } else {
        "arguments"
    };
    EvalError::new(
        EvalErrorKind::ArityMismatch { expected, got },
        format!("lambda expects {expected} {arg_word}, got {got}"),
    )
}

// Arithmetic

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::new(EvalErrorKind::DivisionByZero, "integer division by zero")
}

#[cold]
pub fn integer_overflow(form: &str) -> EvalError {
    EvalError::new(
        EvalErrorKind::IntegerOverflow,
        format!("integer overflow in `{form}`"),
    )
}

// Process

pub fn exit_requested(code: i32) -> EvalError {
    EvalError::new(
        EvalErrorKind::ExitRequested { code },
        format!("exit requested with code {code}"),
    )
}

#[cold]
pub fn io_error(form: &str, err: &std::io::Error) -> EvalError {
    EvalError::new(EvalErrorKind::Io, format!("`{form}` failed to read input: {err}"))
}
