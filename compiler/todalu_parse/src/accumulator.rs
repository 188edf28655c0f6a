//! Multi-line form assembly.
//!
//! Source is consumed one physical line at a time. Lines are buffered until
//! the running parenthesis count drops to zero or below, at which point the
//! buffer is handed to the line handler as one unit.

/// Whether `line` evaluates to nothing: blank, or first non-whitespace `#`.
pub fn is_comment(line: &str) -> bool {
    line.trim_start().chars().next().map_or(true, |c| c == '#')
}

/// `(` counts +1, `)` counts -1. String contents are not special.
pub fn paren_balance(text: &str) -> i64 {
    text.chars().fold(0, |count, c| match c {
        '(' => count + 1,
        ')' => count - 1,
        _ => count,
    })
}

/// Buffers lines until they form a balanced unit.
#[derive(Debug, Default)]
pub struct LineAccumulator {
    buffer: String,
    balance: i64,
}

impl LineAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a line, returning the assembled text once its balance is `<= 0`.
    ///
    /// A comment line arriving while no form is pending is returned as-is so
    /// the caller still sees it; one arriving mid-form is dropped.
    pub fn push_line(&mut self, line: &str) -> Option<String> {
        if is_comment(line) {
            return self.buffer.is_empty().then(|| line.to_owned());
        }
        if !self.buffer.is_empty() {
            self.buffer.push('\n');
        }
        self.buffer.push_str(line);
        self.balance += paren_balance(line);
        if self.balance <= 0 {
            self.balance = 0;
            return Some(std::mem::take(&mut self.buffer));
        }
        None
    }

    /// True while part of a form has been buffered.
    pub fn is_pending(&self) -> bool {
        !self.buffer.is_empty()
    }

    /// Drop any partial form (REPL interrupt).
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.balance = 0;
    }

    /// Flush an incomplete trailing form at end of input.
    ///
    /// Callers hand the result to the line handler so that an unclosed
    /// parenthesis is reported rather than silently discarded.
    pub fn finish(&mut self) -> Option<String> {
        self.balance = 0;
        self.is_pending().then(|| std::mem::take(&mut self.buffer))
    }
}
