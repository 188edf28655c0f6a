//! Driver commands.

mod repl;
mod run;

pub use repl::{run_repl, Feed, Repl, CONTINUATION_PROMPT, ERROR_PROMPT, PROMPT};
pub use run::run_file;

use todalu_eval::{EvalError, Interpreter, Session};

/// Options shared by batch and interactive mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DriverOptions {
    /// Load the bootstrap prelude before any user input.
    pub prelude: bool,
}

impl Default for DriverOptions {
    fn default() -> Self {
        DriverOptions { prelude: true }
    }
}

/// Build a session over `interpreter`, loading the prelude if requested.
pub fn new_session(interpreter: Interpreter, options: DriverOptions) -> Result<Session, EvalError> {
    if options.prelude {
        Session::with_prelude(interpreter)
    } else {
        Ok(Session::new(interpreter))
    }
}

/// Read a source file, turning I/O failures into a user-facing message.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
