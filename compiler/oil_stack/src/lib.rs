//! Stack growth for nested program calls.
//!
//! Every `call` instruction runs a child interpreter on the native stack of
//! its parent, so a chain of programs calling programs recurses once per
//! level. [`ensure_sufficient_stack`] wraps each child run and grows the
//! stack on demand instead of overflowing.
//!
//! On `wasm32` the wrapper is a plain passthrough.

/// Remaining stack below which a new segment is allocated (128KB).
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment (2MB).
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// Run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
