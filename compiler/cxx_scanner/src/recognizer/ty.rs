//! Type reading.
//!
//! A type is a run of identifiers, scope operators, fundamental type
//! keywords and qualifiers, plus anything inside `< >` or `[ ]`. The
//! hard part is deciding where the type ends and the name begins:
//! `std::string name` versus `const Foo name` versus `Foo name`.

use cxx_lexer::{Token, TokenKind};

use super::Recognizer;
use crate::TypeToken;

/// Tokens of a successfully read type.
#[derive(Debug, Default)]
pub(super) struct TypeRead {
    pub(super) tokens: Vec<TypeToken>,
    pub(super) is_auto: bool,
    /// Line of the first type token.
    pub(super) line: Option<u32>,
}

impl TypeRead {
    fn push(&mut self, token: &Token<'_>, depth: u32) {
        if self.tokens.is_empty() {
            self.line = Some(token.line);
        }
        if token.kind == TokenKind::Auto {
            self.is_auto = true;
        }
        self.tokens
            .push(TypeToken::new(token.kind, token.text, depth));
    }

    fn last_kind(&self) -> Option<TokenKind> {
        self.tokens.last().map(TypeToken::kind)
    }

    /// Whether an identifier seen now extends the type rather than
    /// naming the variable.
    fn accepts_identifier(&self) -> bool {
        let after_scope = self.last_kind() == Some(TokenKind::DoubleColon);
        if !after_scope {
            let has_identifier = self.tokens.iter().any(|t| t.kind() == TokenKind::Ident);
            let has_builtin = self.tokens.iter().any(|t| {
                t.depth() == 0 && (t.kind().is_builtin_type() || t.kind() == TokenKind::Auto)
            });
            if has_identifier || has_builtin {
                return false;
            }
        }
        matches!(
            self.last_kind(),
            Some(kind) if kind == TokenKind::DoubleColon
                || kind == TokenKind::Class
                || kind == TokenKind::Struct
                || kind.is_qualifier()
        )
    }
}

fn starts_type(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Ident
            | TokenKind::Class
            | TokenKind::Struct
            | TokenKind::DoubleColon
            | TokenKind::Auto
            | TokenKind::Using
            | TokenKind::Decltype
    ) || kind.is_builtin_type()
        || kind.is_qualifier()
}

fn continues_type(kind: TokenKind) -> bool {
    matches!(kind, TokenKind::Auto | TokenKind::DoubleColon)
        || kind.is_builtin_type()
        || kind.is_qualifier()
}

impl Recognizer<'_, '_> {
    /// Read a type, or `None` if the tokens cannot start a declaration.
    ///
    /// On success the token that ended the type (the name or a `*`/`&`
    /// decoration) is left in the stream. On failure every token looked
    /// at stays consumed.
    pub(super) fn read_type(&mut self) -> Option<TypeRead> {
        let mut ty = TypeRead::default();
        let mut depth = 0u32;
        while let Some(token) = self.stream.next_token() {
            if depth > 0 {
                ty.push(&token, depth);
                match token.kind {
                    TokenKind::Lt | TokenKind::LBracket => depth += 1,
                    TokenKind::Gt | TokenKind::RBracket => depth -= 1,
                    _ => {}
                }
                continue;
            }

            if ty.tokens.is_empty() {
                if !starts_type(token.kind) {
                    return None;
                }
                ty.push(&token, 0);
                if token.kind == TokenKind::Decltype {
                    self.read_decltype_operand(&mut ty)?;
                }
                continue;
            }

            match token.kind {
                TokenKind::Ident => {
                    if !ty.accepts_identifier() {
                        self.stream.unget(&token);
                        return Some(ty);
                    }
                    ty.push(&token, 0);
                }
                TokenKind::Lt | TokenKind::LBracket => {
                    ty.push(&token, 0);
                    depth = 1;
                }
                TokenKind::Star | TokenKind::Amp | TokenKind::AmpAmp | TokenKind::At => {
                    self.stream.unget(&token);
                    return Some(ty);
                }
                // Unnamed parameter: `void f(int, char)`
                TokenKind::Comma | TokenKind::RParen if self.signature => {
                    self.stream.unget(&token);
                    return Some(ty);
                }
                kind if continues_type(kind) => ty.push(&token, 0),
                _ => return None,
            }
        }
        None
    }

    /// Read the parenthesized operand of a leading `decltype`.
    fn read_decltype_operand(&mut self, ty: &mut TypeRead) -> Option<()> {
        let open = self.stream.next_token()?;
        if open.kind != TokenKind::LParen {
            return None;
        }
        ty.push(&open, 0);
        let mut depth = 1u32;
        while depth > 0 {
            let token = self.stream.next_token()?;
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth -= 1,
                _ => {}
            }
            ty.push(&token, depth.max(1));
        }
        Some(())
    }
}
