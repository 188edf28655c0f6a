//! The interactive command: a line-editing REPL over one session.

use std::io::Write;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use todalu_eval::{EvalError, Interpreter, Session};
use todalu_parse::LineAccumulator;

use super::{new_session, DriverOptions};

/// Prompt shown when the previous input succeeded (green).
pub const PROMPT: &str = "\u{1b}[32mtodalu>\u{1b}[0m ";
/// Prompt shown after a failed input (red).
pub const ERROR_PROMPT: &str = "\u{1b}[31mtodalu>\u{1b}[0m ";
/// Prompt shown while a form is still open.
pub const CONTINUATION_PROMPT: &str = "....> ";

/// Outcome of feeding one physical line to the REPL.
#[derive(Debug, PartialEq)]
pub enum Feed {
    /// The line left parentheses open; more input is needed.
    Pending,
    /// The line handler's output, possibly empty.
    Output(String),
    /// Evaluation failed; the session continues.
    Failed(EvalError),
    /// `(exit n)` was evaluated.
    Exit(i32),
}

/// REPL state independent of the terminal.
pub struct Repl {
    session: Session,
    accumulator: LineAccumulator,
    last_failed: bool,
}

impl Repl {
    pub fn new(session: Session) -> Self {
        Repl {
            session,
            accumulator: LineAccumulator::new(),
            last_failed: false,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Prompt for the next line.
    pub fn prompt(&self) -> &'static str {
        if self.accumulator.is_pending() {
            CONTINUATION_PROMPT
        } else if self.last_failed {
            ERROR_PROMPT
        } else {
            PROMPT
        }
    }

    /// Buffer `line`, evaluating once the form is balanced.
    pub fn feed(&mut self, line: &str) -> Feed {
        let Some(text) = self.accumulator.push_line(line) else {
            return Feed::Pending;
        };
        match self.session.handle_line(&text) {
            Ok(output) => {
                self.last_failed = false;
                Feed::Output(output)
            }
            Err(err) => match err.exit_code() {
                Some(code) => Feed::Exit(code),
                None => {
                    self.last_failed = true;
                    Feed::Failed(err)
                }
            },
        }
    }

    /// Drop a partially typed form (Ctrl-C).
    pub fn interrupt(&mut self) {
        self.accumulator.clear();
    }
}

/// Run the interactive loop until end of input or `(exit n)`.
///
/// Returns the process exit status.
pub fn run_repl(options: DriverOptions) -> i32 {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!("cannot initialize line editor: {err}");
            return 1;
        }
    };
    let session = match new_session(Interpreter::new(), options) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("error in 'prelude': {err}");
            return err.exit_code().unwrap_or(1);
        }
    };
    let mut repl = Repl::new(session);

    loop {
        match editor.readline(repl.prompt()) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = editor.add_history_entry(line.as_str());
                }
                match repl.feed(&line) {
                    Feed::Pending => {}
                    Feed::Output(output) => {
                        print!("{output}");
                        let _ = std::io::stdout().flush();
                    }
                    Feed::Failed(err) => eprintln!("{err}"),
                    Feed::Exit(code) => return code,
                }
            }
            Err(ReadlineError::Interrupted) => repl.interrupt(),
            Err(ReadlineError::Eof) => return 0,
            Err(err) => {
                eprintln!("error: {err}");
                return 1;
            }
        }
    }
}
