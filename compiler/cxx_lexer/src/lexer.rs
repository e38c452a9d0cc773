//! Pull-based token cursor with one-token push-back.
//!
//! The declaration scanner reads tokens one at a time and occasionally has
//! to "un-read" the last one after peeking. [`Lexer::unget`] supports
//! exactly one level of push-back: the most recently returned token is
//! handed out again by the next call to [`Lexer::next_token`].
//!
//! # Preprocessor sections
//!
//! A `#` that is the first token on its line opens a preprocessor
//! section which lasts until the next newline not escaped by a trailing
//! backslash. Every token inside the section, including the `#`, carries
//! [`TokenFlags::PREPROCESSOR`].

use logos::Logos;
use tracing::trace;

use crate::keywords;
use crate::raw_token::{convert_token, RawToken};
use crate::{CxxStandard, LexError, Token, TokenFlags, TokenKind};

/// Token cursor over a C/C++ buffer.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    standard: CxxStandard,
    /// Line of the next character to lex.
    line: u32,
    at_line_start: bool,
    in_preprocessor: bool,
    last: Option<Token<'src>>,
    pushed_back: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at line 1 of `source`.
    pub fn new(source: &'src str, standard: CxxStandard) -> Result<Self, LexError> {
        if u32::try_from(source.len()).is_err() {
            return Err(LexError::SourceTooLarge { len: source.len() });
        }
        Ok(Lexer {
            inner: RawToken::lexer(source),
            standard,
            line: 1,
            at_line_start: true,
            in_preprocessor: false,
            last: None,
            pushed_back: false,
        })
    }

    /// Number lines starting at `line` instead of 1.
    ///
    /// Used when lexing a fragment cut out of a larger buffer.
    #[must_use]
    pub fn with_first_line(mut self, line: u32) -> Self {
        self.line = line.max(1);
        self
    }

    /// Return the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        if self.pushed_back {
            self.pushed_back = false;
            return self.last;
        }

        loop {
            let raw = self.inner.next()?;
            let slice = self.inner.slice();
            let token = match raw {
                Ok(RawToken::Newline) => {
                    self.line = self.line.saturating_add(1);
                    self.at_line_start = true;
                    self.in_preprocessor = false;
                    continue;
                }
                Ok(RawToken::LineContinuation) => {
                    self.line = self.line.saturating_add(1);
                    continue;
                }
                Ok(raw) if raw.is_trivia() => {
                    self.advance_lines(slice);
                    continue;
                }
                Ok(raw) => {
                    let kind = match convert_token(raw) {
                        TokenKind::Ident => {
                            keywords::lookup(slice, self.standard).unwrap_or(TokenKind::Ident)
                        }
                        kind => kind,
                    };
                    let token = self.make_token(kind, slice);
                    if raw.is_multiline() {
                        self.advance_lines(slice);
                    }
                    token
                }
                Err(()) => {
                    trace!(line = self.line, text = slice, "unrecognized character");
                    self.make_token(TokenKind::Unknown, slice)
                }
            };
            self.last = Some(token);
            return Some(token);
        }
    }

    /// Push the most recently returned token back onto the stream.
    ///
    /// Only one token of push-back is supported; calling `unget` twice in
    /// a row pushes back the same token once.
    pub fn unget(&mut self) {
        if self.last.is_some() {
            self.pushed_back = true;
        }
    }

    fn make_token(&mut self, kind: TokenKind, text: &'src str) -> Token<'src> {
        let mut token = Token::new(kind, text, self.line);
        // Fits: the constructor rejects buffers longer than u32::MAX
        token.offset = u32::try_from(self.inner.span().start).unwrap_or(u32::MAX);
        if self.at_line_start && kind == TokenKind::Hash {
            self.in_preprocessor = true;
        }
        if self.in_preprocessor {
            token.flags.set(TokenFlags::PREPROCESSOR);
        }
        self.at_line_start = false;
        token
    }

    fn advance_lines(&mut self, text: &str) {
        let newlines = text.bytes().filter(|&b| b == b'\n').count();
        let newlines = u32::try_from(newlines).unwrap_or(u32::MAX);
        // Comments are whitespace to the preprocessor: a block comment
        // spanning lines does not end a directive.
        self.line = self.line.saturating_add(newlines);
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
