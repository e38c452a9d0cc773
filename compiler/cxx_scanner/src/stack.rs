//! Stack safety for nested signature scanning.
//!
//! A parenthesized initializer is re-scanned by a child scanner, whose
//! own initializers may be re-scanned in turn. Deeply nested input must
//! not overflow the stack.

const RED_ZONE: usize = 100 * 1024; // 100KB
const STACK_PER_RECURSION: usize = 1024 * 1024; // 1MB

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
