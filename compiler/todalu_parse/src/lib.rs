//! Todalu Parse - turns source text into [`Node`](todalu_ir::Node)s.
//!
//! The reader is deliberately simple:
//!
//! - [`tokenize`] pads parentheses with spaces and splits on whitespace.
//! - [`read_forms`] assembles tokens into nodes. String literals are
//!   re-joined from whitespace-separated tokens; numeric tokens become
//!   `Integer` or `Decimal`; everything else is a `Symbol`.
//! - [`LineAccumulator`] gathers physical lines until parentheses balance,
//!   which is how both the REPL and file mode decide that a form is complete.

mod accumulator;
mod error;
mod reader;

pub use accumulator::{is_comment, paren_balance, LineAccumulator};
pub use error::ParseError;
pub use reader::{read_forms, read_one, tokenize};
