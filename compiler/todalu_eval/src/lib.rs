//! Todalu Eval - the evaluator and its environment model.
//!
//! # Architecture
//!
//! - [`Environment`]: one process-wide table from names to shadow stacks.
//! - [`Interpreter`]: recursive evaluator over [`Node`]s with special-form
//!   dispatch and lambda application.
//! - [`Session`]: the line handler used by the CLI, plus the bootstrap
//!   prelude.
//! - Print and input handlers: where `print`/`println` write and where
//!   `read`/`readstr` read, swappable for tests.
//!
//! # Tracing
//!
//! Lambda application is instrumented at `trace` level; `def` and `exit`
//! log at `debug`. Enable with `RUST_LOG=todalu_eval=trace`.

mod environment;
pub mod errors;
mod input_handler;
pub mod interpreter;
mod print_handler;
mod session;

pub use todalu_ir::{Lambda, Node, NodeKind, Params};

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use input_handler::{scripted_handler, stdin_handler, InputHandler, SharedInputHandler};
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedBindings, SpecialForm, FAIL_SYMBOL};
pub use print_handler::{buffer_handler, stdout_handler, PrintHandler, SharedPrintHandler};
pub use session::{Session, PRELUDE};

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
