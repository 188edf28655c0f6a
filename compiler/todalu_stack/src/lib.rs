//! Stack growth for the recursive reader and evaluator.
//!
//! A Todalu call such as `(count 5000)` nests `eval`, special-form dispatch,
//! `apply` and the body's `eval` once per level, and the reader nests once per
//! open parenthesis. Both wrap each recursive step in
//! [`ensure_sufficient_stack`], so recursion depth is bounded by memory rather
//! than by the thread's initial stack.
//!
//! There is no depth limit: a program with infinite non-tail recursion runs
//! until the process is out of memory.

/// Grow once fewer than this many bytes of stack remain.
///
/// One Todalu call level spans several Rust frames, and debug builds make
/// those frames large.
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, switching to a fresh stack segment first if the current one is
/// nearly exhausted.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

/// `stacker` cannot switch stacks on wasm32; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
