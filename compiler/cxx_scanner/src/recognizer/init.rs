//! Initializer reading.
//!
//! Forms after a name:
//!
//! | next | captured |
//! |---|---|
//! | `(` | `( args )` constructor arguments |
//! | `[` | `[ extent ]` |
//! | `{` | `{ items }` brace initializer |
//! | `=` | right-hand side up to `;` or `,` |
//!
//! Anything else is skipped up to the next `;`, `,` or `{`.

use cxx_lexer::{Token, TokenKind, TokenSet};

use super::name::{NameRead, SignatureSource};
use super::Recognizer;
use crate::pack::pack;

const STATEMENT_END: TokenSet = TokenSet::new()
    .with(TokenKind::Semicolon)
    .with(TokenKind::Comma);

const STATEMENT_END_OR_BODY: TokenSet = STATEMENT_END.with(TokenKind::LBrace);

/// Tokens read up to a delimiter.
struct Capture<'src> {
    tokens: Vec<Token<'src>>,
    /// The delimiter, or `None` at end of input.
    terminator: Option<Token<'src>>,
}

fn closing(open: TokenKind) -> Option<TokenKind> {
    match open {
        TokenKind::LParen => Some(TokenKind::RParen),
        TokenKind::LBracket => Some(TokenKind::RBracket),
        TokenKind::LBrace => Some(TokenKind::RBrace),
        _ => None,
    }
}

impl<'src> Recognizer<'src, '_> {
    pub(super) fn read_initializer(&mut self, read: &mut NameRead<'src>) {
        let Some(token) = self.stream.next_token() else {
            return;
        };

        if token.kind == TokenKind::Eq {
            if self.lambda_follows() {
                return;
            }
            let capture = self.read_until(STATEMENT_END);
            if let Some(terminator) = capture.terminator {
                self.stream.unget(&terminator);
            }
            self.set_initializer(read, &capture.tokens);
            return;
        }

        let Some(close) = closing(token.kind) else {
            self.stream.unget(&token);
            self.skip_to(STATEMENT_END_OR_BODY);
            return;
        };
        if token.kind == TokenKind::LParen && self.lambda_follows() {
            return;
        }
        let capture = self.read_until(TokenSet::new().with(close));
        let Some(terminator) = capture.terminator else {
            // Unbalanced: nothing to capture
            return;
        };
        let mut tokens = Vec::with_capacity(capture.tokens.len() + 2);
        tokens.push(token);
        tokens.extend(capture.tokens);
        tokens.push(terminator);
        self.set_initializer(read, &tokens);

        if token.kind == TokenKind::LParen {
            self.skip_to(STATEMENT_END_OR_BODY);
        } else {
            self.skip_to(STATEMENT_END);
        }
    }

    fn set_initializer(&self, read: &mut NameRead<'src>, tokens: &[Token<'src>]) {
        read.initializer = pack(tokens.iter().map(|t| (t.kind, t.text)));
        read.signature_source = match (tokens.first(), tokens.last()) {
            (Some(first), Some(last)) => self
                .source
                .get(first.offset as usize..last.end_offset())
                .map(|text| SignatureSource {
                    text,
                    line: first.line,
                }),
            _ => None,
        };
    }

    /// `= [` and `= ]` introduce a lambda, not a value.
    fn lambda_follows(&mut self) -> bool {
        self.stream
            .peek()
            .is_some_and(|t| matches!(t.kind, TokenKind::LBracket | TokenKind::RBracket))
    }

    /// Skip to a delimiter in `delimiters` and leave it in the stream.
    pub(super) fn skip_to(&mut self, delimiters: TokenSet) {
        if let Some(terminator) = self.read_until(delimiters).terminator {
            self.stream.unget(&terminator);
        }
    }

    /// Read tokens until a delimiter outside any brackets.
    ///
    /// An unclosed `<` does not hide a `;` or a closing bracket from the
    /// check, so `x = a < b;` still stops at the `;`.
    fn read_until(&mut self, delimiters: TokenSet) -> Capture<'src> {
        let mut tokens = Vec::new();
        let mut open: Vec<TokenKind> = Vec::new();
        while let Some(token) = self.stream.next_token() {
            let top_level = match token.kind {
                _ if open.is_empty() => true,
                // Only unclosed `<` left: a comparison, not a bracket
                TokenKind::Semicolon => open.iter().all(|&k| k == TokenKind::Lt),
                // A closer without its opener ends the enclosing capture
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    !open.iter().any(|&k| closing(k) == Some(token.kind))
                }
                _ => false,
            };
            if top_level && delimiters.contains(token.kind) {
                return Capture {
                    tokens,
                    terminator: Some(token),
                };
            }
            match token.kind {
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace | TokenKind::Lt => {
                    open.push(token.kind);
                }
                TokenKind::Gt => {
                    if open.last() == Some(&TokenKind::Lt) {
                        open.pop();
                    }
                }
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    close_bracket(&mut open, token.kind);
                }
                _ => {}
            }
            tokens.push(token);
        }
        Capture {
            tokens,
            terminator: None,
        }
    }
}

/// Pop up to and including the opener matching `close`, dropping any
/// unclosed `<` on the way. A close with no opener is ignored.
fn close_bracket(open: &mut Vec<TokenKind>, close: TokenKind) {
    let Some(index) = open.iter().rposition(|&k| closing(k) == Some(close)) else {
        return;
    };
    open.truncate(index);
}
