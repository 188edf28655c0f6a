//! Tokenizer and form reader.

use todalu_ir::Node;
use todalu_stack::ensure_sufficient_stack;

use crate::ParseError;

/// Split source text into tokens.
///
/// Parentheses are always their own token; all other tokens are maximal runs
/// of non-whitespace. Newlines are ordinary whitespace.
pub fn tokenize(src: &str) -> Vec<String> {
    let mut padded = String::with_capacity(src.len() + src.len() / 2);
    for c in src.chars() {
        match c {
            '(' => padded.push_str(" ( "),
            ')' => padded.push_str(" ) "),
            _ => padded.push(c),
        }
    }
    padded.split_whitespace().map(str::to_owned).collect()
}

/// Read every top-level form in `src`.
///
/// Empty input yields an empty vector.
pub fn read_forms(src: &str) -> Result<Vec<Node>, ParseError> {
    let mut reader = Reader {
        tokens: tokenize(src).into_iter(),
    };
    reader.read_sequence(false)
}

/// Read at most one top-level form.
///
/// Returns `Ok(None)` for input containing no tokens and
/// [`ParseError::MultipleForms`] when more than one form is present.
pub fn read_one(src: &str) -> Result<Option<Node>, ParseError> {
    let mut forms = read_forms(src)?;
    match forms.len() {
        0 => Ok(None),
        1 => Ok(forms.pop()),
        count => Err(ParseError::MultipleForms { count }),
    }
}

struct Reader {
    tokens: std::vec::IntoIter<String>,
}

impl Reader {
    /// Read nodes until the enclosing `)` (when `nested`) or end of input.
    fn read_sequence(&mut self, nested: bool) -> Result<Vec<Node>, ParseError> {
        let mut nodes = Vec::new();
        while let Some(token) = self.tokens.next() {
            let node = if token == "(" {
                Node::List(ensure_sufficient_stack(|| self.read_sequence(true))?)
            } else if token == ")" {
                if nested {
                    return Ok(nodes);
                }
                return Err(ParseError::UnexpectedCloseParen);
            } else if token.starts_with('"') {
                self.read_string(token)?
            } else {
                classify_atom(token)
            };
            nodes.push(node);
        }
        if nested {
            return Err(ParseError::UnmatchedOpenParen);
        }
        Ok(nodes)
    }

    /// Accumulate tokens into a string literal.
    ///
    /// `opening` starts with `"`. Tokens are re-joined with single spaces
    /// until one ends with `"`; a lone `"` only opens the literal.
    fn read_string(&mut self, opening: String) -> Result<Node, ParseError> {
        let mut closed = opening.len() > 1 && opening.ends_with('"');
        let mut text = opening;
        while !closed {
            let token = self.tokens.next().ok_or(ParseError::UnmatchedQuote)?;
            closed = token.ends_with('"');
            text.push(' ');
            text.push_str(&token);
        }
        Ok(Node::Str(text[1..text.len() - 1].to_owned()))
    }
}

/// Integer if the token parses as `i32`, decimal if it contains a digit and
/// parses as `f32`, symbol otherwise.
///
/// The digit requirement keeps `inf` and `nan` symbols. Integer literals out
/// of `i32` range fall through to decimal.
fn classify_atom(token: String) -> Node {
    if let Ok(value) = token.parse::<i32>() {
        return Node::Integer(value);
    }
    if token.bytes().any(|b| b.is_ascii_digit()) {
        if let Ok(value) = token.parse::<f32>() {
            return Node::Decimal(value);
        }
    }
    Node::Symbol(token)
}
