//! Error-tolerant C/C++ tokenizer.
//!
//! Produces a pull-based stream of [`Token`]s over a borrowed buffer with
//! exactly one token of push-back ([`Lexer::unget`]) and per-token
//! preprocessor tracking. The tokenizer never fails on malformed source:
//! unknown characters become [`TokenKind::Unknown`] tokens and unterminated
//! strings or comments simply end where the input does.
//!
//! Keyword recognition depends on the selected [`CxxStandard`].

mod error;
pub mod keywords;
mod lexer;
mod raw_token;
mod standard;
mod token;
mod token_set;

pub use error::LexError;
pub use lexer::Lexer;
pub use standard::CxxStandard;
pub use token::{Token, TokenFlags, TokenKind};
pub use token_set::TokenSet;

/// Lex a whole buffer into a vector of tokens.
///
/// Convenience for tests and tooling; the scanner pulls tokens lazily.
pub fn tokenize(source: &str, standard: CxxStandard) -> Result<Vec<Token<'_>>, LexError> {
    Ok(Lexer::new(source, standard)?.collect())
}
