//! Stack growth guard for deep recursion.
//!
//! Union values may nest without bound: a `Cons` variant whose tail field is
//! another list union, a tree whose children are unions of the same tree.
//! Structural equality, hashing, display and field-type validation all walk
//! these values recursively, so each recursive step goes through
//! [`ensure_sufficient_stack`].
//!
//! - **Native targets**: `stacker` grows the stack on demand.
//! - **WASM targets**: plain call.

/// Remaining stack below which we grow (64KB).
const RED_ZONE: usize = 64 * 1024;

/// Size of each new stack segment (1MB).
const GROWTH: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, GROWTH, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
