//! Where `print` and `println` send their text.
//!
//! The CLI writes straight to stdout. Tests and embedders capture into a
//! buffer and read it back with [`PrintHandler::get_output`].

use parking_lot::Mutex;

/// Output destination of one interpreter.
pub enum PrintHandler {
    Stdout,
    /// Everything printed so far.
    Buffer(Mutex<String>),
}

impl PrintHandler {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(msg);
                buffer.push('\n');
            }
        }
    }

    pub fn print(&self, msg: &str) {
        match self {
            Self::Stdout => print!("{msg}"),
            Self::Buffer(buffer) => buffer.lock().push_str(msg),
        }
    }

    /// Captured output; always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buffer) => buffer.lock().clone(),
        }
    }
}

/// Print handler shared between an interpreter and whoever inspects it.
pub type SharedPrintHandler = std::sync::Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandler::Stdout)
}

/// Handler that captures output for [`PrintHandler::get_output`].
pub fn buffer_handler() -> SharedPrintHandler {
    std::sync::Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}
