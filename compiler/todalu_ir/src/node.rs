//! The `Node` sum type and its canonical representation.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::Params;

/// Variant tag of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Bool,
    Integer,
    Decimal,
    Str,
    Symbol,
    List,
    Lambda,
}

impl NodeKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Bool => "bool",
            NodeKind::Integer => "integer",
            NodeKind::Decimal => "decimal",
            NodeKind::Str => "string",
            NodeKind::Symbol => "symbol",
            NodeKind::List => "list",
            NodeKind::Lambda => "lambda",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A Todalu value, which is also a Todalu program fragment.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Bool(bool),
    Integer(i32),
    Decimal(f32),
    /// String literal, stored without its surrounding quotes.
    Str(String),
    Symbol(String),
    List(Vec<Node>),
    Lambda(Box<Lambda>),
}

impl Node {
    #[inline]
    pub fn int(value: i32) -> Self {
        Node::Integer(value)
    }

    #[inline]
    pub fn decimal(value: f32) -> Self {
        Node::Decimal(value)
    }

    pub fn string(text: impl Into<String>) -> Self {
        Node::Str(text.into())
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Node::Symbol(name.into())
    }

    pub fn list(items: impl IntoIterator<Item = Node>) -> Self {
        Node::List(items.into_iter().collect())
    }

    /// The empty list, `( )`.
    pub fn nil() -> Self {
        Node::List(Vec::new())
    }

    /// Variant tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Bool(_) => NodeKind::Bool,
            Node::Integer(_) => NodeKind::Integer,
            Node::Decimal(_) => NodeKind::Decimal,
            Node::Str(_) => NodeKind::Str,
            Node::Symbol(_) => NodeKind::Symbol,
            Node::List(_) => NodeKind::List,
            Node::Lambda(_) => NodeKind::Lambda,
        }
    }

    /// Canonical text of this node.
    ///
    /// Lists print as `( a b c )`, booleans as `#true`/`#false`, decimals
    /// always with a fractional part, strings with their quotes restored,
    /// lambdas as `<lambda=N>`.
    pub fn repr(&self) -> String {
        self.to_string()
    }

    /// Truthiness as seen by `if`.
    ///
    /// Numbers are true when nonzero, strings and lists when nonempty.
    /// Symbols and lambdas are always true.
    pub fn truthy(&self) -> bool {
        match self {
            Node::Bool(value) => *value,
            Node::Integer(value) => *value != 0,
            Node::Decimal(value) => *value != 0.0,
            Node::Str(text) => !text.is_empty(),
            Node::Symbol(_) | Node::Lambda(_) => true,
            Node::List(items) => !items.is_empty(),
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Node::Symbol(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Bool(true) => f.write_str("#true"),
            Node::Bool(false) => f.write_str("#false"),
            Node::Integer(value) => write!(f, "{value}"),
            // `{:?}` keeps the fractional part: `3.0`, not `3`.
            Node::Decimal(value) => write!(f, "{value:?}"),
            Node::Str(text) => write!(f, "\"{text}\""),
            Node::Symbol(name) => f.write_str(name),
            Node::List(items) => {
                f.write_str("( ")?;
                for item in items {
                    write!(f, "{item} ")?;
                }
                f.write_str(")")
            }
            Node::Lambda(lambda) => write!(f, "<lambda={}>", lambda.id()),
        }
    }
}

/// Source of lambda ids. Ids only need to be distinct within one process.
static NEXT_LAMBDA_ID: AtomicU64 = AtomicU64::new(1);

/// A function value: a validated parameter spec plus an unevaluated body.
///
/// Lambdas capture nothing. Free variables in the body resolve against the
/// environment that is live when the lambda is called.
#[derive(Clone, Debug, PartialEq)]
pub struct Lambda {
    id: u64,
    params: Params,
    body: Node,
}

impl Lambda {
    /// Create a lambda with a fresh id.
    pub fn new(params: Params, body: Node) -> Self {
        Lambda {
            id: NEXT_LAMBDA_ID.fetch_add(1, Ordering::Relaxed),
            params,
            body,
        }
    }

    /// Synthetic tag shown by `repr`. Copies of a lambda keep the tag.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Consume the lambda, yielding its parameter spec and body.
    pub fn into_parts(self) -> (Params, Node) {
        (self.params, self.body)
    }
}
