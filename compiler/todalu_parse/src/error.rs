//! Reader errors.

/// A failure to turn tokens into nodes.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Input ran out before any form was read (e.g. `read` at end of input).
    #[error("Unexpected EOF while reading input")]
    UnexpectedEof,
    #[error("Unexpected ')'")]
    UnexpectedCloseParen,
    #[error("Unmatched '('")]
    UnmatchedOpenParen,
    #[error("Unmatched '\"'")]
    UnmatchedQuote,
    /// A line handed to the evaluator held several top-level forms.
    #[error("Contains more than one node at the base ({count} forms)")]
    MultipleForms { count: usize },
}
