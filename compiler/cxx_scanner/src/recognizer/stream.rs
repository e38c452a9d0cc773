//! Filtered token stream for the recognizer.

use cxx_lexer::{Lexer, Token, TokenKind};
use rustc_hash::FxHashSet;

/// Tokens of the optimized buffer, minus preprocessor directives and
/// ignored macro names, with a running parenthesis depth.
pub(super) struct TokenStream<'src, 'opts> {
    lexer: Lexer<'src>,
    macros: &'opts FxHashSet<String>,
    paren_depth: i32,
    eof: bool,
}

impl<'src, 'opts> TokenStream<'src, 'opts> {
    pub(super) fn new(lexer: Lexer<'src>, macros: &'opts FxHashSet<String>) -> Self {
        TokenStream {
            lexer,
            macros,
            paren_depth: 0,
            eof: false,
        }
    }

    pub(super) fn next_token(&mut self) -> Option<Token<'src>> {
        let token = loop {
            let Some(token) = self.lexer.next_token() else {
                self.eof = true;
                return None;
            };
            if token.is_preprocessor()
                || (token.kind == TokenKind::Ident && self.macros.contains(token.text))
            {
                continue;
            }
            break token;
        };
        self.eof = false;
        match token.kind {
            TokenKind::LParen => self.paren_depth += 1,
            TokenKind::RParen => self.paren_depth -= 1,
            _ => {}
        }
        Some(token)
    }

    /// Push back `token`, which must be the last one returned.
    pub(super) fn unget(&mut self, token: &Token<'src>) {
        match token.kind {
            TokenKind::LParen => self.paren_depth -= 1,
            TokenKind::RParen => self.paren_depth += 1,
            _ => {}
        }
        self.lexer.unget();
    }

    /// Return the next token without consuming it.
    pub(super) fn peek(&mut self) -> Option<Token<'src>> {
        let token = self.next_token()?;
        self.unget(&token);
        Some(token)
    }

    pub(super) fn is_eof(&self) -> bool {
        self.eof
    }

    pub(super) fn paren_depth(&self) -> i32 {
        self.paren_depth
    }
}
