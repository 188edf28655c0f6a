//! Tree-walking interpreter for Todalu.
//!
//! # Architecture
//!
//! [`Interpreter::eval`] dispatches on the node variant:
//!
//! - Atoms and lambda values evaluate to a copy of themselves.
//! - Symbols resolve against the [`Environment`].
//! - A list whose head names a special form goes to `special_forms`.
//! - Any other list is a lambda application: the head is evaluated, the
//!   arguments are evaluated left to right, parameters are bound for the
//!   duration of the body through a [`ScopedBindings`] guard.
//!
//! # Ownership
//!
//! `eval` borrows its input and returns an owned value. Values coming out of
//! the environment or out of `quote` are clones; temporaries produced during
//! evaluation belong to the caller, which is what lets `cdr` and `cons`
//! mutate their operand in place without touching any stored binding.
//!
//! # Scoping
//!
//! Lambdas capture nothing. A free variable in a lambda body resolves to
//! whatever binding is on top of the shadow stack when the body runs.

mod arithmetic;
mod builder;
mod scope_guard;
mod special_forms;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedBindings;
pub use special_forms::{Arity, SpecialForm};

use todalu_ir::Node;
use todalu_stack::ensure_sufficient_stack;

use crate::errors::{
    arity_mismatch, empty_application, explicit_failure, not_a_function, EvalResult,
};
use crate::{Environment, SharedInputHandler, SharedPrintHandler};

/// The symbol whose evaluation always fails with `ExplicitFailure`.
pub const FAIL_SYMBOL: &str = "fail";

/// Evaluator state: the global environment plus I/O handlers.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
    input_handler: SharedInputHandler,
}

impl Interpreter {
    /// Interpreter with an empty environment, stdout output and stdin input.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    #[inline]
    pub fn env(&self) -> &Environment {
        &self.env
    }

    #[inline]
    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// Output captured by a buffer print handler (empty for stdout).
    pub fn get_print_output(&self) -> String {
        self.print_handler.get_output()
    }

    /// Evaluate `node`, returning an owned result.
    pub fn eval(&mut self, node: &Node) -> EvalResult {
        ensure_sufficient_stack(|| self.eval_inner(node))
    }

    fn eval_inner(&mut self, node: &Node) -> EvalResult {
        match node {
            Node::Bool(_)
            | Node::Integer(_)
            | Node::Decimal(_)
            | Node::Str(_)
            | Node::Lambda(_) => Ok(node.clone()),
            Node::Symbol(name) => self.eval_symbol(name),
            Node::List(items) => self.eval_list(items),
        }
    }

    fn eval_symbol(&self, name: &str) -> EvalResult {
        if name == FAIL_SYMBOL {
            return Err(explicit_failure(name));
        }
        self.env.lookup(name)
    }

    fn eval_list(&mut self, items: &[Node]) -> EvalResult {
        let Some((head, args)) = items.split_first() else {
            return Err(empty_application());
        };
        if let Some(form) = head.as_symbol().and_then(SpecialForm::from_name) {
            return self.eval_special(form, args);
        }
        self.apply(head, args)
    }

    /// Call the lambda `head` evaluates to with `args`.
    ///
    /// Parameter bindings are popped on every exit path, including errors
    /// raised while evaluating the body.
    #[tracing::instrument(level = "trace", skip_all, fields(argc = args.len()))]
    fn apply(&mut self, head: &Node, args: &[Node]) -> EvalResult {
        let callee = self.eval(head)?;
        let lambda = match callee {
            Node::Lambda(lambda) => lambda,
            other => return Err(not_a_function(other.kind())),
        };
        let id = lambda.id();
        let (params, body) = (*lambda).into_parts();
        if params.arity() != args.len() {
            return Err(arity_mismatch(params.arity(), args.len()));
        }

        let values = args
            .iter()
            .map(|arg| self.eval(arg))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::trace!(lambda = id, "entering lambda body");
        self.with_bindings(params, values, |scoped| scoped.eval(&body))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
