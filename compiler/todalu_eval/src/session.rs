//! The line handler and the bootstrap prelude.
//!
//! A [`Session`] owns an [`Interpreter`] and implements the contract the
//! driver relies on: one assembled, parenthesis-balanced text in, either an
//! empty string (blank or comment input) or the result's repr plus a newline
//! out, or an [`EvalError`].

use todalu_parse::{is_comment, read_one, LineAccumulator};

use crate::{EvalError, Interpreter};

/// Built-in definitions loaded before any user input.
pub const PRELUDE: &str = include_str!("prelude.tdl");

/// Line handler over one interpreter.
pub struct Session {
    interpreter: Interpreter,
}

impl Session {
    /// Session without the prelude.
    pub fn new(interpreter: Interpreter) -> Self {
        Session { interpreter }
    }

    /// Session with the prelude already loaded.
    pub fn with_prelude(interpreter: Interpreter) -> Result<Self, EvalError> {
        let mut session = Session::new(interpreter);
        session.load_prelude()?;
        Ok(session)
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn interpreter_mut(&mut self) -> &mut Interpreter {
        &mut self.interpreter
    }

    /// Feed [`PRELUDE`] through the same path as user source.
    pub fn load_prelude(&mut self) -> Result<(), EvalError> {
        tracing::debug!("loading prelude");
        self.run_source(PRELUDE)
    }

    /// Evaluate one assembled form.
    ///
    /// Returns `""` for blank or comment-only input, otherwise the result's
    /// repr followed by a newline.
    pub fn handle_line(&mut self, text: &str) -> Result<String, EvalError> {
        if is_comment(text) {
            return Ok(String::new());
        }
        let Some(form) = read_one(text)? else {
            return Ok(String::new());
        };
        let value = self.interpreter.eval(&form)?;
        Ok(format!("{value}\n"))
    }

    /// Evaluate every form in `source`, stopping at the first error.
    ///
    /// Results are discarded; only `print`/`println` produce output. An
    /// unterminated trailing form is still handed to the line handler so its
    /// error is reported.
    pub fn run_source(&mut self, source: &str) -> Result<(), EvalError> {
        let mut accumulator = LineAccumulator::new();
        for line in source.lines() {
            if let Some(text) = accumulator.push_line(line) {
                self.handle_line(&text)?;
            }
        }
        if let Some(text) = accumulator.finish() {
            self.handle_line(&text)?;
        }
        Ok(())
    }
}
