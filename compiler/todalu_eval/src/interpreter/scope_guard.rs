//! RAII guard for lambda parameter bindings.
//!
//! [`ScopedBindings`] pushes one binding per parameter when created and
//! removes those same slots when dropped, so the environment is restored
//! whether the body returns a value, returns an error through `?`, or panics.
//!
//! The guard holds `&mut Interpreter` and implements `Deref`/`DerefMut`, so
//! the body is evaluated through the guard itself:
//!
//! ```text
//! interpreter.with_bindings(params, args, |scoped| scoped.eval(&body))
//! ```

use std::ops::{Deref, DerefMut};

use todalu_ir::{Node, Params};

use super::Interpreter;

/// Guard that unbinds `params` on drop.
pub struct ScopedBindings<'guard> {
    interpreter: &'guard mut Interpreter,
    params: Params,
    /// Stack slot of each parameter binding.
    slots: Vec<usize>,
}

impl Drop for ScopedBindings<'_> {
    fn drop(&mut self) {
        self.interpreter.env.unbind_params(&self.params, &self.slots);
    }
}

impl Deref for ScopedBindings<'_> {
    type Target = Interpreter;

    fn deref(&self) -> &Self::Target {
        self.interpreter
    }
}

impl DerefMut for ScopedBindings<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.interpreter
    }
}

impl Interpreter {
    /// Bind `args` to `params` until the returned guard is dropped.
    pub fn scoped(&mut self, params: Params, args: Vec<Node>) -> ScopedBindings<'_> {
        let slots = self.env.bind_params(&params, args);
        ScopedBindings {
            interpreter: self,
            params,
            slots,
        }
    }

    /// Run `f` with `args` bound to `params`.
    pub fn with_bindings<T, F>(&mut self, params: Params, args: Vec<Node>, f: F) -> T
    where
        F: FnOnce(&mut ScopedBindings<'_>) -> T,
    {
        let mut scoped = self.scoped(params, args);
        f(&mut scoped)
    }
}
