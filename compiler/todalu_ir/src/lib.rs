//! Todalu IR - the node model shared by the reader and the evaluator.
//!
//! Todalu has a single representation for program text and runtime values:
//! [`Node`]. The reader produces nodes, the evaluator consumes nodes and
//! produces nodes, and the environment stores nodes.
//!
//! # Ownership
//!
//! Every node has exactly one owner. `List` and `Lambda` own their children
//! outright, so `Clone` is a full deep copy that shares nothing with its source.
//! The evaluator relies on this: values handed out of the environment are
//! clones, and freshly produced temporaries can be mutated in place.

mod node;
mod params;

pub use node::{Lambda, Node, NodeKind};
pub use params::{Params, ParamsError};
