//! Lambda parameter specs.

use rustc_hash::FxHashSet;

use crate::{Node, NodeKind};

/// Parameter spec of a lambda.
///
/// Either a single symbol, which binds the one call argument, or a list of
/// distinct symbols bound positionally.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Params {
    Single(String),
    List(Vec<String>),
}

/// Why a node is not a valid parameter spec.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParamsError {
    #[error("parameter spec must be a symbol or a list of symbols, got {0}")]
    InvalidSpec(NodeKind),
    #[error("parameter must be a symbol, got {0}")]
    NotASymbol(NodeKind),
    #[error("duplicate parameter `{0}`")]
    Duplicate(String),
}

impl Params {
    /// Validate `node` as a parameter spec.
    pub fn from_node(node: &Node) -> Result<Self, ParamsError> {
        match node {
            Node::Symbol(name) => Ok(Params::Single(name.clone())),
            Node::List(items) => {
                let mut seen = FxHashSet::default();
                let mut names = Vec::with_capacity(items.len());
                for item in items {
                    let Node::Symbol(name) = item else {
                        return Err(ParamsError::NotASymbol(item.kind()));
                    };
                    if !seen.insert(name.as_str()) {
                        return Err(ParamsError::Duplicate(name.clone()));
                    }
                    names.push(name.clone());
                }
                Ok(Params::List(names))
            }
            other => Err(ParamsError::InvalidSpec(other.kind())),
        }
    }

    /// Parameter names in binding order.
    pub fn names(&self) -> &[String] {
        match self {
            Params::Single(name) => std::slice::from_ref(name),
            Params::List(names) => names,
        }
    }

    /// Number of call arguments this spec accepts.
    #[inline]
    pub fn arity(&self) -> usize {
        self.names().len()
    }
}
