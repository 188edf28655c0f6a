//! The global environment: one shadow stack of bindings per name.
//!
//! There are no nested scope objects. `def` pushes a binding that is never
//! removed; a lambda call pushes one binding per parameter and removes exactly
//! those slots on exit. Lookups always see the top of the stack, which makes
//! lambdas dynamically scoped.

use rustc_hash::FxHashMap;

use todalu_ir::{Node, Params};

use crate::errors::{undefined_symbol, EvalResult};

/// Name → stack of owned values, most recent binding last.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Vec<Node>>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `value` as the new top binding for `name`.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Node) {
        self.bindings.entry(name.into()).or_default().push(value);
    }

    /// Deep copy of the current binding of `name`.
    #[inline]
    pub fn lookup(&self, name: &str) -> EvalResult {
        self.bindings
            .get(name)
            .and_then(|stack| stack.last())
            .cloned()
            .ok_or_else(|| undefined_symbol(name))
    }

    /// Push one binding per parameter, positionally.
    ///
    /// Returns the stack slot each binding landed in, in parameter order.
    /// The caller has already checked `args.len() == params.arity()`.
    pub fn bind_params(&mut self, params: &Params, args: Vec<Node>) -> Vec<usize> {
        debug_assert_eq!(params.arity(), args.len(), "arity checked by caller");
        params
            .names()
            .iter()
            .zip(args)
            .map(|(name, value)| {
                let stack = self.bindings.entry(name.clone()).or_default();
                stack.push(value);
                stack.len() - 1
            })
            .collect()
    }

    /// Remove exactly the bindings recorded by the matching
    /// [`bind_params`](Self::bind_params).
    ///
    /// A `def` of a parameter name made during the call sits above the
    /// parameter's slot; it survives, and only the parameter binding goes.
    /// Slots of enclosing calls are all lower, so removal never shifts them.
    pub fn unbind_params(&mut self, params: &Params, slots: &[usize]) {
        debug_assert_eq!(params.arity(), slots.len(), "slots from bind_params");
        for (name, &slot) in params.names().iter().zip(slots).rev() {
            self.remove_slot(name, slot);
        }
    }

    /// Remove the binding of `name` at `slot`, dropping the entry once empty.
    fn remove_slot(&mut self, name: &str, slot: usize) {
        let Some(stack) = self.bindings.get_mut(name) else {
            return;
        };
        if slot < stack.len() {
            stack.remove(slot);
        }
        if stack.is_empty() {
            self.bindings.remove(name);
        }
    }

    /// Number of stacked bindings for `name` (0 when unbound).
    pub fn depth(&self, name: &str) -> usize {
        self.bindings.get(name).map_or(0, Vec::len)
    }

    pub fn is_bound(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of distinct bound names.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Bound names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
