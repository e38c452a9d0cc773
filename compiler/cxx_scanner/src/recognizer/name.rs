//! Name reading: decoration, identifier and what follows it.

use cxx_lexer::{TokenKind, TokenSet};

use super::ty::TypeRead;
use super::Recognizer;
use crate::Variable;

/// Tokens that may follow a declared name in local scope.
const LOCAL_TERMINATORS: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::Eq)
    .with(TokenKind::Semicolon)
    .with(TokenKind::RParen)
    .with(TokenKind::LParen)
    .with(TokenKind::LBrace)
    .with(TokenKind::LBracket);

/// Tokens that end one parameter of a parameter list.
const PARAMETER_END: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::RParen);

/// Source text of a captured initializer, for re-scanning as a
/// parameter list.
#[derive(Clone, Copy, Debug)]
pub(super) struct SignatureSource<'src> {
    pub(super) text: &'src str,
    pub(super) line: u32,
}

/// Result of reading one declarator.
#[derive(Debug, Default)]
pub(super) struct NameRead<'src> {
    pub(super) name: String,
    pub(super) decoration: String,
    pub(super) line: Option<u32>,
    pub(super) initializer: String,
    pub(super) signature_source: Option<SignatureSource<'src>>,
    /// A `,` followed: another name shares the type.
    pub(super) has_more: bool,
}

impl NameRead<'_> {
    pub(super) fn to_variable(&self, ty: &TypeRead) -> Variable {
        Variable::new(self.name.clone(), ty.tokens.clone())
            .with_pointer_or_reference(self.decoration.clone())
            .with_auto(ty.is_auto)
            .with_default_value(self.initializer.clone())
            .with_line(self.line.or(ty.line))
    }
}

impl<'src> Recognizer<'src, '_> {
    /// Read `*`/`&` decorations, a name and its initializer.
    ///
    /// The returned name is empty if no declarator was found; the
    /// initializer may still be set (`f(int a) {` is a definition).
    /// In a parameter list the rest of the parameter (default value,
    /// array extent) is skipped up to the next `,` or `)`.
    pub(super) fn read_name(&mut self) -> NameRead<'src> {
        let mut read = NameRead::default();
        while let Some(token) = self.stream.next_token() {
            match token.kind {
                TokenKind::Star | TokenKind::Amp | TokenKind::AmpAmp | TokenKind::At => {
                    if read.decoration.ends_with(|c: char| c.is_ascii_alphabetic()) {
                        read.decoration.push(' ');
                    }
                    read.decoration.push_str(token.text);
                }
                // `char* const p`: the pointer itself is qualified
                TokenKind::Const | TokenKind::Volatile if !read.decoration.is_empty() => {
                    read.decoration.push(' ');
                    read.decoration.push_str(token.text);
                }
                TokenKind::Ident => {
                    read.name = token.text.to_owned();
                    read.line = Some(token.line);
                    if self.signature {
                        self.skip_to(PARAMETER_END);
                        return read;
                    }
                    self.read_after_name(&mut read);
                    return read;
                }
                _ => return read,
            }
        }
        read
    }

    fn read_after_name(&mut self, read: &mut NameRead<'src>) {
        let Some(next) = self.stream.peek() else {
            return;
        };
        if !LOCAL_TERMINATORS.contains(next.kind) {
            read.name.clear();
            return;
        }

        self.read_initializer(read);

        let Some(next) = self.stream.next_token() else {
            return;
        };
        match next.kind {
            TokenKind::LBrace if !read.initializer.is_empty() => {
                // `name(params) {` opens a function body
                self.stream.unget(&next);
                read.name.clear();
            }
            TokenKind::Comma => read.has_more = true,
            _ => self.stream.unget(&next),
        }
    }
}
