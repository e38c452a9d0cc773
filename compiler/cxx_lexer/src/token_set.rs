//! Compile-time sets of token kinds.
//!
//! A `TokenSet` is a `u128` bitset indexed by the `TokenKind` discriminant,
//! so sets can be built in `const` context and shared between threads
//! without any initialization step.

use crate::TokenKind;

// Every kind must fit in the bitset.
const _: () = assert!((TokenKind::Unknown as u8) < 128);

/// A set of token kinds with O(1) membership testing.
///
/// # Example
/// ```
/// use cxx_lexer::{TokenKind, TokenSet};
///
/// const OPEN: TokenSet = TokenSet::new()
///     .with(TokenKind::LParen)
///     .with(TokenKind::LBracket);
///
/// assert!(OPEN.contains(TokenKind::LParen));
/// assert!(!OPEN.contains(TokenKind::RParen));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}
