//! The batch command: evaluate a Todalu source file.

use todalu_eval::{EvalError, Interpreter};

use super::{new_session, read_file, DriverOptions};

/// Run the file at `path` and return the process exit status.
///
/// Results are not echoed. The first error is reported on stderr and stops
/// the run with status 1; `(exit n)` stops it with status `n`.
pub fn run_file(path: &str, options: DriverOptions) -> i32 {
    let source = match read_file(path) {
        Ok(source) => source,
        Err(msg) => {
            eprintln!("{msg}");
            return 1;
        }
    };

    let mut session = match new_session(Interpreter::new(), options) {
        Ok(session) => session,
        Err(err) => return report(&err, "prelude"),
    };

    tracing::debug!(path, "running file");
    match session.run_source(&source) {
        Ok(()) => 0,
        Err(err) => report(&err, path),
    }
}

/// Print `err` unless it is a deliberate exit, returning the exit status.
fn report(err: &EvalError, origin: &str) -> i32 {
    if let Some(code) = err.exit_code() {
        return code;
    }
    eprintln!("error in '{origin}': {err}");
    1
}
