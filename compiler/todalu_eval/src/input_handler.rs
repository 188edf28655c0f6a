//! Input source for `read` and `readstr`.

use std::collections::VecDeque;
use std::io::BufRead;

use parking_lot::Mutex;

/// Where `read`/`readstr` take their line from.
pub enum InputHandler {
    /// Process standard input.
    Stdin,
    /// Pre-supplied lines, consumed front to back (tests, embedding).
    Scripted(Mutex<VecDeque<String>>),
}

impl InputHandler {
    /// Next line without its terminator, or `None` at end of input.
    pub fn read_line(&self) -> std::io::Result<Option<String>> {
        match self {
            Self::Stdin => {
                let mut line = String::new();
                if std::io::stdin().lock().read_line(&mut line)? == 0 {
                    return Ok(None);
                }
                let trimmed = line.trim_end_matches(['\n', '\r']).len();
                line.truncate(trimmed);
                Ok(Some(line))
            }
            Self::Scripted(lines) => Ok(lines.lock().pop_front()),
        }
    }
}

/// Shared input handler.
pub type SharedInputHandler = std::sync::Arc<InputHandler>;

pub fn stdin_handler() -> SharedInputHandler {
    std::sync::Arc::new(InputHandler::Stdin)
}

/// Input handler that yields `lines` in order, then end of input.
pub fn scripted_handler<I, S>(lines: I) -> SharedInputHandler
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let lines: VecDeque<String> = lines.into_iter().map(Into::into).collect();
    std::sync::Arc::new(InputHandler::Scripted(Mutex::new(lines)))
}
