//! Lexer construction errors.

use thiserror::Error;

/// Errors that prevent a [`Lexer`](crate::Lexer) from being built.
///
/// Malformed source never produces an error: unknown characters become
/// [`TokenKind::Unknown`](crate::TokenKind::Unknown) tokens and unterminated
/// literals or comments run to the end of their line or of the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// Line numbers are tracked as `u32`.
    #[error("source buffer of {len} bytes exceeds the {max} byte limit", max = u32::MAX)]
    SourceTooLarge { len: usize },
}
